//! # Number types
pub mod float;
