//! Command implementations

pub mod call;
pub mod operations;
pub mod profile;
