//! Row models and insert DTOs.

pub mod copy;
