use std::fmt;

/// Errors returned when validating a [`SimulationConfig`](crate::config::SimulationConfig).
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A parameter is `NaN` or infinite.
    NotFinite {
        /// Name of the parameter.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A parameter that must be strictly positive is zero or negative.
    NotPositive {
        /// Name of the parameter.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The number of substeps per frame is zero.
    NoSubsteps,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotFinite { field, value } => {
                write!(f, "`{}` must be finite, got {}", field, value)
            }
            ConfigError::NotPositive { field, value } => {
                write!(f, "`{}` must be strictly positive, got {}", field, value)
            }
            ConfigError::NoSubsteps => write!(f, "`substeps` must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}
