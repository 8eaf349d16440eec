//! # Plain text problem files
//!
//! A problem file is a stream of whitespace separated tokens, in this order:
//!
//! * the number of variables `n` and the number of constraints `m`
//! * `n` objective function coefficients
//! * `m` rows of `n` constraint coefficients
//! * `m` right-hand side values
//! * `m` relation codes: `-1` for `<=`, `0` for `=` and `1` for `>=`
//! * `1` to maximize or `0` to minimize
//!
//! Line breaks carry no meaning, but are used to report the location of errors.
use crate::data::linear_program::definition::LinearProgram;
use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::io::error::{ImportError, ParseError, ParseResult, TokenLocation};

/// Parse the contents of a problem file.
///
/// # Arguments
///
/// * `program`: Complete contents of a problem file.
///
/// # Errors
///
/// If a token is missing, can't be parsed, or is left over at the end; or if the numbers don't
/// describe a valid linear program.
pub fn parse(program: &str) -> Result<LinearProgram, ImportError> {
    let mut tokens = Tokens::new(program);

    let nr_variables = tokens.dimension("number of variables")?;
    let nr_constraints = tokens.dimension("number of constraints")?;

    let cost = tokens.numbers(nr_variables, "objective function coefficient")
        .map_err(|error| ParseError::with_cause("Could not read the objective function", error))?;
    let constraints = (0..nr_constraints)
        .map(|i| tokens.numbers(nr_variables, "constraint coefficient")
            .map_err(|error| ParseError::with_cause(format!("Could not read constraint row {}", i + 1), error)))
        .collect::<ParseResult<Vec<_>>>()?;
    let b = tokens.numbers(nr_constraints, "right-hand side value")
        .map_err(|error| ParseError::with_cause("Could not read the right-hand side", error))?;
    let constraint_types = (0..nr_constraints)
        .map(|_| tokens.relation())
        .collect::<ParseResult<Vec<_>>>()?;
    let objective = tokens.direction()?;
    tokens.finish()?;

    Ok(LinearProgram::new(objective, cost, constraints, b, constraint_types)?)
}

/// Cursor over the tokens of a problem file.
struct Tokens<'a> {
    /// Line number and text of each token.
    tokens: Vec<(usize, &'a str)>,
    /// Index of the next token to read.
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(program: &'a str) -> Self {
        let tokens = program.lines()
            .enumerate()
            .flat_map(|(i, line)| line.split_whitespace().map(move |token| (i + 1, token)))
            .collect();

        Self { tokens, position: 0 }
    }

    /// Read the next token.
    ///
    /// # Arguments
    ///
    /// * `what`: Name of the expected value, for the end user.
    ///
    /// # Return value
    ///
    /// The token and its location.
    fn next(&mut self, what: &str) -> ParseResult<(&'a str, TokenLocation)> {
        match self.tokens.get(self.position) {
            Some(&(line, text)) => {
                self.position += 1;
                Ok((text, TokenLocation { token: self.position, line, text: text.to_string() }))
            },
            None => Err(ParseError::new(format!(
                "Unexpected end of file after {} tokens, expected {}", self.position, what,
            ))),
        }
    }

    fn number(&mut self, what: &str) -> ParseResult<f64> {
        let (text, location) = self.next(what)?;
        text.parse()
            .map_err(|_| ParseError::with_location(format!("Could not parse {}", what), location))
    }

    fn numbers(&mut self, len: usize, what: &str) -> ParseResult<Vec<f64>> {
        (0..len).map(|_| self.number(what)).collect()
    }

    fn integer(&mut self, what: &str) -> ParseResult<(i64, TokenLocation)> {
        let (text, location) = self.next(what)?;
        match text.parse() {
            Ok(value) => Ok((value, location)),
            Err(_) => Err(ParseError::with_location(format!("Could not parse {} as an integer", what), location)),
        }
    }

    fn dimension(&mut self, what: &str) -> ParseResult<usize> {
        let (value, location) = self.integer(what)?;
        match usize::try_from(value) {
            Ok(value) if value > 0 => Ok(value),
            _ => Err(ParseError::with_location(format!("The {} should be positive", what), location)),
        }
    }

    fn relation(&mut self) -> ParseResult<ConstraintType> {
        let (code, location) = self.integer("relation code")?;
        ConstraintType::try_from(code)
            .map_err(|code| ParseError::with_location(
                format!("Unknown relation code {}, expected -1, 0 or 1", code), location,
            ))
    }

    fn direction(&mut self) -> ParseResult<Objective> {
        let (text, location) = self.next("optimization direction")?;
        match text {
            "1" => Ok(Objective::Maximize),
            "0" => Ok(Objective::Minimize),
            _ => Err(ParseError::with_location(
                "Unknown optimization direction, expected 1 (maximize) or 0 (minimize)", location,
            )),
        }
    }

    /// Check that all tokens were read.
    fn finish(mut self) -> ParseResult<()> {
        if self.position < self.tokens.len() {
            let (_, location) = self.next("nothing")?;
            Err(ParseError::with_location("Unexpected token after the end of the problem", location))
        } else {
            Ok(())
        }
    }
}
