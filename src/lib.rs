//! Pre-admission validation of run workspace bindings.
//!
//! A task or pipeline declares the workspaces it needs; a run supplies a
//! binding for each. Before the run is created the admission layer checks
//! that the bindings are well-formed, that they match the declarations, and,
//! when the affinity assistant is enabled, that they need at most one
//! persistent volume claim.
//!
//! # Module Organization
//!
//! - [`workspace`] - Declarations, bindings, and the two validators
//! - [`admission`] - Composition of the validators under an [`AdmissionConfig`]
//! - [`config`] - Admission configuration
//! - [`error`] - Crate-level error type
//!
//! # Examples
//!
//! ```
//! use workspace_binding::{
//!     validate_bindings, ValidationError, WorkspaceBinding, WorkspaceDeclaration,
//! };
//!
//! let declared = [WorkspaceDeclaration::new("src"), WorkspaceDeclaration::new("cache")];
//! let bound = [WorkspaceBinding::empty_dir("src")];
//!
//! let err = validate_bindings(&declared, &bound).unwrap_err();
//! assert!(matches!(err, ValidationError::NameMismatch { .. }));
//! assert!(err.to_string().contains("\"cache\""));
//! ```

pub mod admission;
pub mod config;
pub mod error;
#[cfg(feature = "logging")]
pub mod logging;
pub mod workspace;

// Re-exports for ergonomic access
pub use admission::RunAdmission;
pub use config::AdmissionConfig;
pub use error::{Error, Result};
#[cfg(feature = "logging")]
pub use logging::init_logging;
pub use workspace::{
    claim_identities, validate_bindings, validate_only_one_pvc_is_used, BindingError,
    StorageSource, ValidationError, VolumeClaimTemplate, WorkspaceBinding, WorkspaceDeclaration,
    WorkspaceName,
};
