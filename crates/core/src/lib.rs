//! Domain types and rules for the sales copy service.
//!
//! Nothing in this crate performs I/O. Persistence lives in `salescopy-db`
//! and the chat-completion transport in `salescopy-llm`.

pub mod copy;
pub mod error;
pub mod generation;
pub mod types;
