//! Error types for workspace binding validation

use thiserror::Error;

use super::newtypes::WorkspaceName;

/// A single binding failed its own well-formedness check
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// None of the storage source fields is set
    #[error("expected exactly one storage source, got none")]
    MissingSource,

    /// More than one storage source field is set
    #[error("expected exactly one storage source, got: {}", .0.join(", "))]
    MultipleSources(Vec<&'static str>),

    /// The selected storage source lacks a required field
    #[error("missing field: {0}")]
    MissingField(&'static str),
}

/// Errors returned by the binding validators
///
/// Every variant is terminal: the request is malformed and resubmitting it
/// unchanged yields the same error.
///
/// # Examples
///
/// ```
/// use workspace_binding::ValidationError;
///
/// let err = ValidationError::MultiplePvc;
/// assert_eq!(err.kind(), "multiple_pvc");
/// assert!(!err.is_retryable());
/// assert_eq!(err.to_string(), "more than one PersistentVolumeClaim is bound");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A binding failed self-validation
    #[error("binding \"{name}\" is invalid: {source}")]
    BindingInvalid {
        /// Name of the offending binding
        name: WorkspaceName,
        /// Why the binding is invalid
        #[source]
        source: BindingError,
    },

    /// Declared and bound workspace names differ
    #[error(
        "bound workspaces did not match declared workspaces: missing [{}], unexpected [{}]",
        join_names(.missing),
        join_names(.unexpected)
    )]
    NameMismatch {
        /// Declared but not bound, sorted
        missing: Vec<WorkspaceName>,
        /// Bound but not declared, sorted
        unexpected: Vec<WorkspaceName>,
    },

    /// Bindings resolve to more than one distinct persistent volume claim
    #[error("more than one PersistentVolumeClaim is bound")]
    MultiplePvc,
}

impl ValidationError {
    /// Stable machine-readable code for the failed rule.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::BindingInvalid { .. } => "binding_invalid",
            Self::NameMismatch { .. } => "name_mismatch",
            Self::MultiplePvc => "multiple_pvc",
        }
    }

    /// Always `false`; kept so admission code can treat all errors uniformly.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::BindingInvalid { .. } | Self::NameMismatch { .. } | Self::MultiplePvc => false,
        }
    }
}

fn join_names(names: &[WorkspaceName]) -> String {
    names
        .iter()
        .map(|n| format!("{:?}", n.as_str()))
        .collect::<Vec<_>>()
        .join(", ")
}
