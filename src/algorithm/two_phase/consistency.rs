//! # Consistency of linear systems
//!
//! Before any pivot is made, the equality rows of a problem are checked for a solution by
//! Gaussian elimination. When they have none, no sequence of pivots can make the problem feasible.
use crate::data::number_types::float::numerical_precision::{is_close_to_zero, round_to_integer_if_close};
use crate::error::ConfigurationError;

/// Whether the system `matrix x = b` has at least one solution.
///
/// The system is row reduced with partial pivoting on a private copy. The system is inconsistent
/// when a row reduces to only zero coefficients while its right-hand side is nonzero.
///
/// # Arguments
///
/// * `matrix`: Coefficients, rectangular with at least one row and one column.
/// * `b`: Right-hand side, one value per row.
/// * `epsilon`: Values closer than this to zero are treated as zero; intermediate results closer
/// than this to an integer are snapped to it.
///
/// # Errors
///
/// If the matrix is empty, ragged or doesn't match the right-hand side in size.
pub fn is_consistent(matrix: &[Vec<f64>], b: &[f64], epsilon: f64) -> Result<bool, ConfigurationError> {
    if matrix.is_empty() {
        return Err(ConfigurationError::NoRows);
    }
    if b.len() != matrix.len() {
        return Err(ConfigurationError::LengthMismatch {
            what: "right-hand side",
            expected: matrix.len(),
            found: b.len(),
        });
    }
    let nr_columns = matrix[0].len();
    if nr_columns == 0 {
        return Err(ConfigurationError::NoColumns);
    }
    if let Some((row, values)) = matrix.iter().enumerate().find(|(_, values)| values.len() != nr_columns) {
        return Err(ConfigurationError::RaggedRow { row, expected: nr_columns, found: values.len() });
    }

    let round = |value: f64| round_to_integer_if_close(value, epsilon);
    let mut rows = matrix.to_vec();
    let mut b = b.to_vec();

    let mut rank = 0;
    for column in 0..nr_columns {
        if rank == rows.len() {
            break;
        }

        // Partial pivoting: the largest remaining value in this column
        let pivot = (rank..rows.len())
            .filter(|&i| !is_close_to_zero(rows[i][column], epsilon))
            .max_by(|&i, &k| rows[i][column].abs().total_cmp(&rows[k][column].abs()));
        let Some(pivot) = pivot else { continue };
        rows.swap(rank, pivot);
        b.swap(rank, pivot);

        let (reduced, remaining) = rows.split_at_mut(rank + 1);
        let pivot_row = &reduced[rank];
        let pivot_value = pivot_row[column];
        for (i, row) in remaining.iter_mut().enumerate() {
            let factor = row[column] / pivot_value;
            if factor == 0f64 {
                continue;
            }

            for (value, pivot_row_value) in row.iter_mut().zip(pivot_row).skip(column) {
                *value = round(*value - factor * pivot_row_value);
            }
            row[column] = 0f64;
            let k = rank + 1 + i;
            b[k] = round(b[k] - factor * b[rank]);
        }

        rank += 1;
    }

    // All rows below the rank have been reduced to zero coefficients
    Ok(b[rank..].iter().all(|&value| is_close_to_zero(value, epsilon)))
}
