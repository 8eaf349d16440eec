//! # Rendering of tableaus
//!
//! A fixed width text layout of the coefficients, right-hand side, relative costs and basis. Used
//! for tracing the progress of the simplex method; nothing depends on its output.
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;

use crate::algorithm::two_phase::tableau::Tableau;
use crate::config::DisplayConfig;

/// A tableau together with the layout to render it with.
pub struct TableauDisplay<'a> {
    tableau: &'a Tableau,
    config: DisplayConfig,
}

impl<'a> TableauDisplay<'a> {
    pub(super) fn new(tableau: &'a Tableau, config: DisplayConfig) -> Self {
        Self { tableau, config }
    }

    fn write_values(&self, f: &mut Formatter<'_>, values: &[f64]) -> FormatResult {
        let DisplayConfig { cell_width, precision } = self.config;
        for value in values {
            write!(f, "{0:>width$.precision$}", value, width = cell_width, precision = precision)?;
        }
        Ok(())
    }
}

impl Display for TableauDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        let width = self.config.cell_width;

        // Column counters, numbered from one
        write!(f, "\t")?;
        for j in 0..self.tableau.nr_columns() {
            write!(f, "{0:>width$}", format!("x{}", j + 1), width = width)?;
        }
        writeln!(f, "{0:>width$}", "b", width = width)?;
        writeln!(f)?;

        for (row, b) in self.tableau.matrix().iter().zip(self.tableau.b()) {
            write!(f, "\t")?;
            self.write_values(f, row)?;
            self.write_values(f, &[*b])?;
            writeln!(f)?;
        }
        writeln!(f)?;

        write!(f, "d\t")?;
        self.write_values(f, self.tableau.relative_costs())?;
        writeln!(f)?;
        writeln!(f)?;

        writeln!(f, "Basis variables (from 0) = ( {} )", self.tableau.basis_indices().iter().join(" "))
    }
}
