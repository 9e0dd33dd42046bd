use num_traits::Float;
use std::fmt::Display;

/// Right-justified to 6 characters, 2 decimal places. The precision only
/// exists in rendered text, stored values keep full precision.
pub fn fmt_value<T: Float + Display>(value: T) -> String {
    format!("{:>6.2}", value)
}

pub fn approx_eq<T: Float>(a: T, b: T, tolerance: T) -> bool {
    (a - b).abs() < tolerance
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
