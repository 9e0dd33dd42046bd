use std::iter::zip;

use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_aug::{MatrixAug, Scalar};
use crate::solver::gauss::Step;
use crate::utils::approx_eq;

#[derive(Debug, Clone)]
pub struct UserStep<T> {
    pub step_number: usize,
    pub operation: String,
    pub matrix: MatrixAug<T>,
}

#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub feedback: Vec<String>,
}

/// Positional comparison of a full user trace against the canonical one.
/// A deviating matrix fails the step, a deviating description alone only warns.
pub fn validate_steps<T: Scalar>(
    user_steps: &[UserStep<T>],
    correct_steps: &[Step<T>],
) -> ValidationReport {
    if user_steps.len() != correct_steps.len() {
        return ValidationReport {
            is_valid: false,
            feedback: vec![format!(
                "Wrong number of steps. Expected: {}, Received: {}",
                correct_steps.len(),
                user_steps.len()
            )],
        };
    }

    let mut is_valid = true;
    let mut feedback = vec![];

    for (index, (user_step, correct_step)) in zip(user_steps, correct_steps).enumerate() {
        if !user_step
            .matrix
            .matches_within(&correct_step.matrix, T::CELL_TOL)
        {
            is_valid = false;
            feedback.push(format!(
                "❌ Step {}: the matrix does not match the expected result",
                index + 1
            ));
            feedback.push(format!("  Expected:\n{}", correct_step.matrix.format()));
            feedback.push(format!("  Received:\n{}", user_step.matrix.format()));
        } else if user_step.operation != correct_step.description {
            feedback.push(format!(
                "⚠ Step {}: correct operation but different description",
                index + 1
            ));
            feedback.push(format!("  Expected: {}", correct_step.description));
            feedback.push(format!("  Received: {}", user_step.operation));
        } else {
            feedback.push(format!(
                "✓ Step {}: correct - {}",
                index + 1,
                user_step.operation
            ));
        }
    }

    ValidationReport { is_valid, feedback }
}

/// Sparse comparison: each submission is matched to the canonical step it
/// claims via `step_number`, so partial or out-of-order submissions are fine.
pub fn validate_submitted<T: Scalar>(
    user_steps: &[UserStep<T>],
    correct_steps: &[Step<T>],
) -> ValidationReport {
    let mut is_valid = true;
    let mut feedback = vec![];

    for user_step in user_steps {
        let number = user_step.step_number;
        let correct_step = match correct_steps.get(number) {
            Some(step) => step,
            None => {
                is_valid = false;
                feedback.push(format!(
                    "❌ Step {}: no such step, the solution has {} steps",
                    number + 1,
                    correct_steps.len()
                ));
                continue;
            }
        };

        if user_step
            .matrix
            .matches_within(&correct_step.matrix, T::CELL_TOL)
        {
            feedback.push(format!("✓ Step {} correct", number + 1));
        } else {
            is_valid = false;
            feedback.push(format!("❌ Step {} incorrect", number + 1));
            feedback.push(format!("  Operation: {}", correct_step.description));
            feedback.push(format!("  Expected:\n{}", correct_step.matrix.format()));
            feedback.push(format!("  Entered:\n{}", user_step.matrix.format()));
        }
    }

    ValidationReport { is_valid, feedback }
}

/// Final-answer mode: only the solution vectors are compared.
pub fn validate_solutions<T: Scalar>(user: &[T], expected: &[T]) -> ValidationReport {
    if user.len() != expected.len() {
        return ValidationReport {
            is_valid: false,
            feedback: vec![format!(
                "Wrong number of unknowns. Expected: {}, Received: {}",
                expected.len(),
                user.len()
            )],
        };
    }

    let mut is_valid = true;
    let mut feedback = vec![];

    for (index, (user_value, expected_value)) in zip(user, expected).enumerate() {
        if approx_eq(*user_value, *expected_value, T::CELL_TOL) {
            feedback.push(format!("✓ x{} = {:.4}", index + 1, user_value));
        } else {
            is_valid = false;
            feedback.push(format!(
                "❌ x{} = {:.4} (correct: {:.4})",
                index + 1,
                user_value,
                expected_value
            ));
        }
    }

    ValidationReport { is_valid, feedback }
}

/// Coordinates of the cells that deviate beyond tolerance, for cell-level
/// highlighting. A shape mismatch reports every expected coordinate.
pub fn mismatched_cells<T: Scalar>(
    user: &MatrixAug<T>,
    expected: &MatrixAug<T>,
) -> Vec<(usize, usize)> {
    let every_cell: Vec<(usize, usize)> = (0..expected.rows)
        .flat_map(|row| (0..expected.cols).map(move |col| (row, col)))
        .collect();

    if user.rows != expected.rows || user.cols != expected.cols {
        return every_cell;
    }

    every_cell
        .into_iter()
        .filter(|&(row, col)| !approx_eq(user.at(row, col), expected.at(row, col), T::CELL_TOL))
        .collect()
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
