//! # Reading of linear programs
//!
//! This module provides read functionality for the plain text problem format.
use std::fs;
use std::path::Path;

use log::debug;

use crate::data::linear_program::definition::LinearProgram;
use crate::io::error::ImportError;

pub mod error;
pub mod text;

/// Import a problem from a file.
///
/// The `import` function takes a file path and returns, if successful, the linear program it
/// describes. See the `text` module for the format.
///
/// # Errors
///
/// When a file cannot be found or read, or when its contents can't be parsed into a valid linear
/// program.
pub fn import(file_path: &Path) -> Result<LinearProgram, ImportError> {
    let program = fs::read_to_string(file_path)?;
    debug!("Read {} bytes from {:?}", program.len(), file_path);

    text::parse(&program)
}
