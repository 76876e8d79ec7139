use itertools::Itertools;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalculatorError {
    #[error("Request was considered invalid due to error: {0}")]
    InvalidRequest(#[from] anyhow::Error),
    #[error("{0}")]
    InvalidInput(#[from] InputIssues),
    #[error("Unable to calculate due to inconsistent upstream data: {0}")]
    Structural(#[from] StructuralError),
    #[error("Unable to serialize calculation result: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CalculatorError {
    /// The collected validation issues, if this error was raised for bad user input.
    pub fn issues(&self) -> Option<&[String]> {
        match self {
            CalculatorError::InvalidInput(issues) => Some(issues.issues()),
            _ => None,
        }
    }
}

/// Every validation issue collected while normalizing a calculation input.
#[derive(Clone, Debug, Default, Error, PartialEq)]
#[error("{}", .issues.iter().join(", "))]
pub struct InputIssues {
    issues: Vec<String>,
}

impl InputIssues {
    pub(crate) fn new(issues: Vec<String>) -> Self {
        Self { issues }
    }

    pub fn issues(&self) -> &[String] {
        &self.issues
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

/// A missing or malformed relationship in upstream data (simulations, home status records).
#[derive(Debug, Error)]
#[error(transparent)]
pub struct StructuralError {
    error: anyhow::Error,
}

impl StructuralError {
    pub(crate) fn new(error: anyhow::Error) -> Self {
        Self { error }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn should_join_issues_into_single_message() {
        let error: CalculatorError = InputIssues::new(vec![
            "State was not provided".to_string(),
            "Heating Fuel was not provided".to_string(),
        ])
        .into();

        assert_eq!(
            error.to_string(),
            "State was not provided, Heating Fuel was not provided"
        );
        assert_eq!(error.issues().map(|issues| issues.len()), Some(2));
    }

    #[rstest]
    fn should_keep_structural_errors_distinct_from_issues() {
        let error: CalculatorError =
            StructuralError::new(anyhow!("Simulation 42 has 1 analyses")).into();

        assert!(matches!(error, CalculatorError::Structural(_)));
        assert!(error.issues().is_none());
        assert!(error.to_string().ends_with("Simulation 42 has 1 analyses"));
    }
}
