//! Error types for tower layout.

use std::fmt;

/// Errors that can occur while laying out a tower.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A tower parameter failed validation.
    InvalidParameter {
        /// The parameter that was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// Ring geometry left the domain of the spacing calculation.
    GeometryDomain {
        /// Context for where the error occurred.
        context: &'static str,
        /// Description of what was degenerate.
        detail: String,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter { name, value } => {
                write!(f, "invalid {name}: {value} (must be positive and finite)")
            }
            Self::GeometryDomain { context, detail } => {
                write!(f, "degenerate {context}: {detail}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Result type for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;
