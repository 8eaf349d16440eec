//! # Error reporting for reading of linear program files
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::error::Error;
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::io;

use thiserror::Error;

use crate::error::ConfigurationError;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    #[error("could not read the problem file: {0}")]
    IO(#[from] io::Error),
    /// Contents of the file could not be parsed into a linear program.
    ///
    /// # Note
    ///
    /// If the linear program is infeasible or unbounded, that will not be represented with this
    /// error. This variant should only be created for syntactically incorrect files.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The numbers were read, but they don't describe a valid linear program.
    ///
    /// For example, a coefficient might be infinite.
    #[error("problem file describes an invalid linear program: {0}")]
    LinearProgram(#[from] ConfigurationError),
}

/// Result of parsing a part of a problem file.
pub type ParseResult<T> = Result<T, ParseError>;

/// A `ParseError` represents all errors encountered during parsing.
///
/// It may recursively hold more ParseErrors to provide more detail. At the end of this chain, there
/// may be a token location, at which the error was caused.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ParseError {
    description: String,
    source: Option<ParseErrorSource>,
}

/// A `ParseErrorSource` can be used with a `ParseError` to describe its cause.
///
/// It can be either a token location, or another `ParseError` with its own description and
/// optionally, a cause.
#[derive(Debug, Clone, Eq, PartialEq)]
enum ParseErrorSource {
    TokenLocation(TokenLocation),
    Nested(Box<ParseError>),
}

/// Position of a token in a problem file.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TokenLocation {
    /// Number of the token in the file, counting from one.
    pub token: usize,
    /// Line on which the token is found, counting from one.
    pub line: usize,
    /// The token itself.
    pub text: String,
}

impl ParseError {
    /// Create a new `ParseError` with only a description.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), source: None }
    }

    /// Create a new `ParseError` instance with the location of the offending token.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `location`: The token that caused the error.
    pub fn with_location(description: impl Into<String>, location: TokenLocation) -> Self {
        Self {
            description: description.into(),
            source: Some(ParseErrorSource::TokenLocation(location)),
        }
    }

    /// Wrap a new `ParseError` around an existing one.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `parse_error`: What caused this `ParseError`.
    pub fn with_cause(description: impl Into<String>, parse_error: ParseError) -> Self {
        Self {
            description: description.into(),
            source: Some(ParseErrorSource::Nested(Box::new(parse_error))),
        }
    }

    /// What's wrong, without the cause.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The location of the token at the end of the chain, if it is known.
    pub fn location(&self) -> Option<&TokenLocation> {
        match &self.source {
            Some(ParseErrorSource::TokenLocation(location)) => Some(location),
            Some(ParseErrorSource::Nested(error)) => error.location(),
            None => None,
        }
    }

    /// Get all descriptions in the chain, leading up to this one.
    fn chain_description(&self) -> Vec<String> {
        let mut descriptions = vec![self.description.clone()];

        match &self.source {
            Some(ParseErrorSource::TokenLocation(TokenLocation { token, line, text })) => {
                descriptions.push(format!("\tCaused by token {} at line {}:\t\"{}\"", token, line, text));
            },
            Some(ParseErrorSource::Nested(error)) => descriptions.extend(error.chain_description()),
            None => (),
        }

        descriptions
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        write!(f, "ParseError: {}", self.chain_description().join("\n"))
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.source {
            Some(ParseErrorSource::Nested(error)) => Some(error.as_ref()),
            _ => None,
        }
    }
}
