//! SDM Consumer Error Types
//!
//! Every SDM operation resolves to exactly one of three outcome shapes:
//! success (`Ok`), a structured application error the UDM described
//! (`Problem`), or a transport failure (`NoResponse` / `Transport`). The
//! two remaining variants are hard local errors raised without or despite
//! a remote answer.

use thiserror::Error;

use fivecore_sbi::models::ProblemDetails;
use fivecore_sbi::SbiError;

/// SDM consumer error
#[derive(Debug, Error)]
pub enum SdmError {
    /// The UDM explicitly rejected the request and described why
    #[error("problem from UDM: {}", problem_label(.0))]
    Problem(ProblemDetails),

    /// The request produced no response at all
    #[error("server no response")]
    NoResponse(#[source] SbiError),

    /// A response arrived but could not be interpreted
    #[error(transparent)]
    Transport(#[from] SbiError),

    /// Two distinct subscribedSnssaiInfos keys fold to the same lowercase
    /// key; storing either would silently drop the other
    #[error("duplicate key {0}")]
    DuplicateSnssaiKey(String),

    /// Unsubscribe attempted with no stored subscription identifier
    #[error("no SDM subscription to delete")]
    NoSubscription,
}

impl SdmError {
    /// The structured error document, when the UDM sent one
    pub fn problem(&self) -> Option<&ProblemDetails> {
        match self {
            Self::Problem(problem) => Some(problem),
            _ => None,
        }
    }

    /// True when no interpretable answer was obtained from the UDM
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::NoResponse(_) | Self::Transport(_))
    }
}

/// Result type for SDM operations
pub type SdmResult<T = ()> = Result<T, SdmError>;

fn problem_label(problem: &ProblemDetails) -> String {
    if let Some(title) = &problem.title {
        return title.clone();
    }
    if let Some(cause) = &problem.cause {
        return cause.clone();
    }
    match problem.status {
        Some(status) => format!("status {status}"),
        None => "unspecified".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_accessor() {
        let err = SdmError::Problem(ProblemDetails::with_status(404).with_title("Not Found"));
        assert_eq!(err.problem().unwrap().title.as_deref(), Some("Not Found"));
        assert!(!err.is_transport());
        assert_eq!(err.to_string(), "problem from UDM: Not Found");
    }

    #[test]
    fn test_no_response_display() {
        let err = SdmError::NoResponse(SbiError::ConnectionError("connection refused".into()));
        assert!(err.is_transport());
        assert!(err.problem().is_none());
        assert_eq!(err.to_string(), "server no response");
    }

    #[test]
    fn test_duplicate_key_display() {
        let err = SdmError::DuplicateSnssaiKey("01010203".to_string());
        assert_eq!(err.to_string(), "duplicate key 01010203");
        assert!(!err.is_transport());
    }

    #[test]
    fn test_problem_label_fallbacks() {
        let err = SdmError::Problem(ProblemDetails::with_status(403).with_cause("ACCESS_DENIED"));
        assert_eq!(err.to_string(), "problem from UDM: ACCESS_DENIED");

        let err = SdmError::Problem(ProblemDetails::with_status(500));
        assert_eq!(err.to_string(), "problem from UDM: status 500");
    }
}
