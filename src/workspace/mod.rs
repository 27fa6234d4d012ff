//! Workspace declarations, bindings, and the checks run before a run is
//! admitted.
//!
//! Two validators live here and neither depends on the other:
//!
//! - [`validate_bindings`] checks every binding is well-formed and that the
//!   bound names match the declared names.
//! - [`validate_only_one_pvc_is_used`] checks the bindings need at most one
//!   persistent volume claim, which the affinity assistant requires.
//!
//! # Examples
//!
//! ```
//! use workspace_binding::workspace::{
//!     validate_bindings, validate_only_one_pvc_is_used, WorkspaceBinding,
//!     WorkspaceDeclaration,
//! };
//!
//! let declared = [WorkspaceDeclaration::new("source")];
//! let bound = [WorkspaceBinding::persistent_volume_claim("source", "repo-claim")];
//!
//! validate_bindings(&declared, &bound)?;
//! validate_only_one_pvc_is_used(&bound)?;
//! # Ok::<(), workspace_binding::ValidationError>(())
//! ```

pub mod binding;
pub mod declaration;
pub mod error;
pub mod newtypes;
pub mod validate;

// Re-export commonly used types
pub use binding::{
    ConfigMapSource, EmptyDirSource, PersistentVolumeClaimSource, SecretSource, StorageSource,
    VolumeClaimTemplate, WorkspaceBinding,
};
pub use declaration::WorkspaceDeclaration;
pub use error::{BindingError, ValidationError};
pub use newtypes::WorkspaceName;
pub use validate::{claim_identities, validate_bindings, validate_only_one_pvc_is_used};
