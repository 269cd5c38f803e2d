use thiserror::Error;

use crate::{config::LoadError, domain::error::DomainError, infra::error::InfraError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error("failed to load configuration: {0}")]
    Config(#[from] LoadError),
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }

    /// Process exit code for the command-line binary.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Domain(DomainError::NotFound { .. }) => 4,
            AppError::Domain(DomainError::Validation { .. }) | AppError::Config(_) => 2,
            AppError::Infra(_) | AppError::Unexpected(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_separate_user_errors_from_failures() {
        assert_eq!(AppError::from(DomainError::not_found("post")).exit_code(), 4);
        assert_eq!(AppError::from(DomainError::validation("bad")).exit_code(), 2);
        assert_eq!(AppError::from(InfraError::database("down")).exit_code(), 1);
    }
}
