use thiserror::Error;

use crate::schema::ValidationIssue;

/// Raised when a request body fails its schema. Carries exactly one issue.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Validation failed on '{}': {}", .0.field_name, .0.message)]
pub struct ValidationException(pub ValidationIssue);

impl ValidationException {
    pub fn new(issue: ValidationIssue) -> Self {
        Self(issue)
    }

    pub fn issue(&self) -> &ValidationIssue {
        &self.0
    }

    pub fn into_issue(self) -> ValidationIssue {
        self.0
    }
}

impl From<ValidationIssue> for ValidationException {
    fn from(issue: ValidationIssue) -> Self {
        Self(issue)
    }
}
