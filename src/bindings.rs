use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_aug::MatrixAug;
use crate::solver::gauss;
use crate::validate::steps;
use crate::validate::steps::UserStep;

/// Outcome of a solve as the UI consumes it. On a singular system `solutions`
/// is `None`, `error` holds the message and `steps` the partial trace.
#[derive(Debug, Clone)]
#[pyclass(frozen)]
pub struct SolveResult {
    solutions: Option<Vec<f64>>,
    steps: Vec<gauss::Step<f64>>,
    error: Option<String>,
}

#[pymethods]
impl SolveResult {
    #[getter]
    pub fn solutions(&self) -> Option<Vec<f64>> {
        self.solutions.clone()
    }

    #[getter]
    pub fn steps(&self) -> Vec<(String, Vec<Vec<f64>>)> {
        self.steps
            .iter()
            .map(|step| (step.description.clone(), step.matrix.to_list()))
            .collect()
    }

    #[getter]
    pub fn error(&self) -> Option<String> {
        self.error.clone()
    }
}

fn rectangular_from_py(matrix: Vec<Vec<f64>>) -> PyResult<MatrixAug<f64>> {
    if matrix.is_empty() {
        return Err(PyValueError::new_err("Empty matrix"));
    }
    let cols = matrix[0].len();
    if cols < 2 || matrix.iter().any(|row| row.len() != cols) {
        return Err(PyValueError::new_err(
            "Rows must all hold the same number of values, coefficients plus a constant",
        ));
    }
    Ok(MatrixAug::from_list(matrix))
}

fn augmented_from_py(matrix: Vec<Vec<f64>>) -> PyResult<MatrixAug<f64>> {
    let matrix = rectangular_from_py(matrix)?;
    if !matrix.is_square_augmented() {
        return Err(PyValueError::new_err(
            "Expected a square augmented matrix, n rows of n + 1 values",
        ));
    }
    Ok(matrix)
}

fn user_steps_from_py(
    user_steps: Vec<(usize, String, Vec<Vec<f64>>)>,
) -> PyResult<Vec<UserStep<f64>>> {
    user_steps
        .into_iter()
        .map(|(step_number, operation, matrix)| {
            Ok(UserStep {
                step_number,
                operation,
                matrix: rectangular_from_py(matrix)?,
            })
        })
        .collect()
}

#[pyfunction]
pub fn solve_system(matrix: Vec<Vec<f64>>) -> PyResult<SolveResult> {
    let input = augmented_from_py(matrix)?;

    match gauss::solve(&input) {
        Ok(solved) => Ok(SolveResult {
            solutions: Some(solved.solutions),
            steps: solved.steps,
            error: None,
        }),
        Err(singular) => Ok(SolveResult {
            solutions: None,
            error: Some(singular.to_string()),
            steps: singular.steps,
        }),
    }
}

#[pyfunction]
pub fn validate_steps(
    user_steps: Vec<(usize, String, Vec<Vec<f64>>)>,
    result: &SolveResult,
) -> PyResult<(bool, Vec<String>)> {
    let user_steps = user_steps_from_py(user_steps)?;
    let report = steps::validate_steps(&user_steps, &result.steps);
    Ok((report.is_valid, report.feedback))
}

#[pyfunction]
pub fn validate_submitted(
    user_steps: Vec<(usize, String, Vec<Vec<f64>>)>,
    result: &SolveResult,
) -> PyResult<(bool, Vec<String>)> {
    let user_steps = user_steps_from_py(user_steps)?;
    let report = steps::validate_submitted(&user_steps, &result.steps);
    Ok((report.is_valid, report.feedback))
}

#[pyfunction]
pub fn validate_solutions(user: Vec<f64>, expected: Vec<f64>) -> (bool, Vec<String>) {
    let report = steps::validate_solutions(&user, &expected);
    (report.is_valid, report.feedback)
}

#[pyfunction]
pub fn format_matrix(matrix: Vec<Vec<f64>>) -> PyResult<String> {
    Ok(rectangular_from_py(matrix)?.format())
}

#[pyfunction]
pub fn mismatched_cells(
    user: Vec<Vec<f64>>,
    expected: Vec<Vec<f64>>,
) -> PyResult<Vec<(usize, usize)>> {
    let user = rectangular_from_py(user)?;
    let expected = rectangular_from_py(expected)?;
    Ok(steps::mismatched_cells(&user, &expected))
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_system_shape_errors() {
        assert!(solve_system(vec![]).is_err());
        assert!(solve_system(vec![vec![1.0, 2.0], vec![3.0]]).is_err());
        assert!(solve_system(vec![vec![1.0, 2.0, 3.0]]).is_err());
    }

    #[test]
    fn test_solve_system_roundtrip() {
        let result = solve_system(vec![
            vec![2.0, 1.0, -1.0, 8.0],
            vec![-3.0, -1.0, 2.0, -11.0],
            vec![-2.0, 1.0, 2.0, -3.0],
        ])
        .unwrap();

        assert!(result.error().is_none());
        let solutions = result.solutions().unwrap();
        assert!((solutions[0] - 2.0).abs() < 1e-4);

        let steps = result.steps();
        assert_eq!(steps[0].0, "Initial matrix");
        assert_eq!(steps[0].1[0], vec![2.0, 1.0, -1.0, 8.0]);
    }

    #[test]
    fn test_solve_system_singular_keeps_trace() {
        let result = solve_system(vec![
            vec![0.0, 1.0, 2.0],
            vec![0.0, 2.0, 3.0],
        ])
        .unwrap();

        assert_eq!(result.error().as_deref(), Some("Singular system"));
        assert!(result.solutions().is_none());
        assert_eq!(result.steps().len(), 1);
    }

    #[test]
    fn test_validate_steps_binding() {
        let result = solve_system(vec![vec![2.0, 1.0, 5.0], vec![1.0, 3.0, 10.0]]).unwrap();

        let echoed: Vec<(usize, String, Vec<Vec<f64>>)> = result
            .steps()
            .into_iter()
            .enumerate()
            .map(|(index, (description, matrix))| (index, description, matrix))
            .collect();

        let (is_valid, feedback) = validate_steps(echoed, &result).unwrap();
        assert!(is_valid);
        assert_eq!(feedback.len(), result.steps().len());
    }

    #[test]
    fn test_format_matrix_binding() {
        let formatted = format_matrix(vec![vec![2.0, 1.0, -1.0, 8.0]]).unwrap();
        assert_eq!(formatted, "[   2.00   1.00  -1.00 |   8.00 ]");

        assert!(format_matrix(vec![vec![1.0]]).is_err());
    }
}
