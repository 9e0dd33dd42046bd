use pyo3::prelude::*;

pub mod matrix {
    pub mod matrix;
    pub mod matrix_aug;
}
pub mod solver {
    pub mod gauss;
}
pub mod validate {
    pub mod steps;
}

pub mod bindings;
pub mod utils;

/// A Python module implemented in Rust.
#[pymodule]
fn gauss_trainer(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<bindings::SolveResult>()?;
    m.add_function(wrap_pyfunction!(bindings::solve_system, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::validate_steps, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::validate_submitted, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::validate_solutions, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::format_matrix, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::mismatched_cells, m)?)?;
    Ok(())
}
