//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

impl From<DomainError> for CliError {
    fn from(e: DomainError) -> Self {
        CliError::from(ApplicationError::Domain(e))
    }
}

impl CliError {
    /// True when the command was rejected before any request was made.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CliError::InvalidArgs(_)
                | CliError::Infra(InfraError::Application(ApplicationError::Domain(_)))
        )
    }

    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Infra(e) => match e {
                InfraError::Io { .. } => crate::exitcode::IOERR,
                InfraError::Http(_) => crate::exitcode::SOFTWARE,
                InfraError::Application(app) => match app {
                    ApplicationError::Domain(_) => crate::exitcode::USAGE,
                    ApplicationError::Api(_) => crate::exitcode::UNAVAILABLE,
                    ApplicationError::InvalidResponse { .. } | ApplicationError::Encode { .. } => {
                        crate::exitcode::SOFTWARE
                    }
                    ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::traits::ApiError;

    #[test]
    fn test_exit_codes_by_error_class() {
        let validation = CliError::from(DomainError::MissingKeySchema);
        assert!(validation.is_validation());
        assert_eq!(validation.exit_code(), crate::exitcode::USAGE);

        let api = CliError::from(ApplicationError::Api(ApiError::Status {
            status: 409,
            message: "topic exists".to_string(),
        }));
        assert!(!api.is_validation());
        assert_eq!(api.exit_code(), crate::exitcode::UNAVAILABLE);
        assert_eq!(api.to_string(), "409: topic exists");
    }
}
