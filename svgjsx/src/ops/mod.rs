//! Core operations.
//!
//! This module contains the business logic for svgjsx commands,
//! separated from CLI argument parsing and output rendering.

pub mod convert;

pub use convert::{ConvertRequest, convert};
