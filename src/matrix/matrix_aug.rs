use itertools::Itertools;
use num_traits::Float;
use std::fmt::{Debug, Display};
use std::iter::zip;

use crate::matrix::matrix::Matrix;
use crate::utils::{approx_eq, fmt_value};

pub trait Scalar: Float + Display + Debug {
    /// Magnitude below which a pivot is treated as zero.
    const PIVOT_EPS: Self;
    /// Cellwise tolerance when comparing user-entered values.
    const CELL_TOL: Self;
}

impl Scalar for f64 {
    const PIVOT_EPS: Self = 1e-10;
    const CELL_TOL: Self = 0.01;
}

impl Scalar for f32 {
    const PIVOT_EPS: Self = 1e-10;
    const CELL_TOL: Self = 0.01;
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatrixAug<T> {
    pub cols: usize,
    pub rows: usize,
    pub cells: Vec<T>,
}

impl<T: Scalar> Matrix<T> for MatrixAug<T> {
    fn from_list(lines: Vec<Vec<T>>) -> Self {
        let rows = lines.len();
        let cols = lines.iter().map(|line| line.len()).max().unwrap_or(0);
        assert!(lines.iter().all(|line| line.len() == cols));

        MatrixAug {
            cols,
            rows,
            cells: lines.into_iter().flatten().collect(),
        }
    }

    fn to_list(&self) -> Vec<Vec<T>> {
        self.cells
            .chunks(self.cols)
            .map(|line| line.into())
            .collect()
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col]
    }
}

impl<T: Scalar> MatrixAug<T> {
    /// N rows of N coefficients plus one constant term.
    pub fn is_square_augmented(&self) -> bool {
        self.rows > 0 && self.cols == self.rows + 1
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        for k in 0..self.cols {
            self.cells.swap(a * self.cols + k, b * self.cols + k);
        }
    }

    pub fn matches_within(&self, rhs: &MatrixAug<T>, tolerance: T) -> bool {
        self.rows == rhs.rows
            && self.cols == rhs.cols
            && zip(self.cells.iter(), rhs.cells.iter())
                .all(|(a, b)| approx_eq(*a, *b, tolerance))
    }

    /// Fixed-width rendering, `[ c1 c2 ... | constant ]` per row. The validator
    /// embeds this output verbatim in its feedback.
    pub fn format(&self) -> String {
        self.cells
            .chunks(self.cols)
            .map(|line| {
                let (coeffs, constant) = line.split_at(self.cols - 1);
                format!(
                    "[ {} | {} ]",
                    coeffs.iter().map(|value| fmt_value(*value)).join(" "),
                    fmt_value(constant[0]),
                )
            })
            .join("\n")
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
