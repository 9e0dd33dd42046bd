use std::fmt;
use std::fmt::Display;

use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_aug::{MatrixAug, Scalar};

#[derive(Debug, Clone)]
pub struct Step<T> {
    pub description: String,
    pub matrix: MatrixAug<T>,
}

#[derive(Debug, Clone)]
pub struct Solved<T> {
    pub solutions: Vec<T>,
    pub steps: Vec<Step<T>>,
}

/// A pivot column with no usable entry. Carries the trace recorded up to the
/// point of failure, there is no partial solution.
#[derive(Debug, Clone)]
pub struct SingularSystem<T> {
    pub steps: Vec<Step<T>>,
}

impl<T> Display for SingularSystem<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Singular system")
    }
}

/// Gaussian elimination with partial pivoting over a private copy of `input`.
/// Every row swap, normalization and elimination is recorded as a `Step`
/// owning its own snapshot of the matrix.
pub fn solve<T: Scalar>(input: &MatrixAug<T>) -> Result<Solved<T>, SingularSystem<T>> {
    assert!(input.is_square_augmented());

    let n = input.rows;
    let mut mat = input.clone();
    let mut steps = vec![Step {
        description: "Initial matrix".into(),
        matrix: input.clone(),
    }];

    for i in 0..n {
        // Partial pivoting: largest magnitude in column i from row i down.
        // Strict `>` keeps the earliest row on ties.
        let mut max_row = i;
        for k in i + 1..n {
            if mat.at(k, i).abs() > mat.at(max_row, i).abs() {
                max_row = k;
            }
        }

        if max_row != i {
            mat.swap_rows(i, max_row);
            steps.push(Step {
                description: format!("Swap F{} ↔ F{}", i + 1, max_row + 1),
                matrix: mat.clone(),
            });
        }

        let pivot = mat.at(i, i);
        if pivot.abs() < T::PIVOT_EPS {
            return Err(SingularSystem { steps });
        }

        // Normalization
        for j in i..=n {
            mat.cells[i * mat.cols + j] = mat.at(i, j) / pivot;
        }
        steps.push(Step {
            description: format!("F{} → F{} / {:.2}", i + 1, i + 1, pivot),
            matrix: mat.clone(),
        });

        // Elimination: rows whose column-i entry is already within tolerance
        // of zero get no step.
        for k in 0..n {
            if k == i || mat.at(k, i).abs() <= T::PIVOT_EPS {
                continue;
            }

            let factor = mat.at(k, i);
            for j in i..=n {
                let scaled = mat.at(i, j) * factor;
                mat.cells[k * mat.cols + j] = mat.at(k, j) - scaled;
            }
            steps.push(Step {
                description: format!("F{} → F{} - ({:.2})×F{}", k + 1, k + 1, factor, i + 1),
                matrix: mat.clone(),
            });
        }
    }

    Ok(Solved {
        solutions: back_substitute(&mat),
        steps,
    })
}

// The diagonal is 1 after normalization, the division stays for robustness.
fn back_substitute<T: Scalar>(mat: &MatrixAug<T>) -> Vec<T> {
    let n = mat.rows;
    let mut solutions = vec![T::zero(); n];

    for i in (0..n).rev() {
        let mut acc = mat.at(i, n);
        for j in i + 1..n {
            acc = acc - mat.at(i, j) * solutions[j];
        }
        solutions[i] = acc / mat.at(i, i);
    }

    solutions
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
