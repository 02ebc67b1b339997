use thiserror::Error;

/// One rejected projection input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidField {
    pub field: &'static str,
    pub reason: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    /// Every offending field, in input order.
    #[error("Invalid projection input: {}", describe(.0))]
    InvalidInput(Vec<InvalidField>),
    #[error("Projection figures exceed the supported numeric range")]
    OutOfRange,
}

impl ProjectionError {
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            ProjectionError::InvalidInput(issues) => issues.iter().map(|issue| issue.field).collect(),
            ProjectionError::OutOfRange => Vec::new(),
        }
    }
}

fn describe(issues: &[InvalidField]) -> String {
    issues
        .iter()
        .map(|issue| format!("{} {}", issue.field, issue.reason))
        .collect::<Vec<_>>()
        .join("; ")
}
