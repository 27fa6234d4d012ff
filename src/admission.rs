//! Pre-admission workspace checks for a run.
//!
//! [`RunAdmission`] composes the two workspace validators in the order the
//! admission layer runs them: bindings against declarations first, then the
//! single-claim rule when the affinity assistant is enabled.

use crate::config::AdmissionConfig;
use crate::error::Result;
use crate::workspace::{
    validate_bindings, validate_only_one_pvc_is_used, WorkspaceBinding, WorkspaceDeclaration,
};

/// Runs the workspace checks for a run under a given configuration.
///
/// # Examples
///
/// ```
/// use workspace_binding::{AdmissionConfig, RunAdmission, WorkspaceBinding, WorkspaceDeclaration};
///
/// let admission = RunAdmission::new(AdmissionConfig::default());
/// let declared = [WorkspaceDeclaration::new("a"), WorkspaceDeclaration::new("b")];
/// let bound = [
///     WorkspaceBinding::persistent_volume_claim("a", "claimX"),
///     WorkspaceBinding::persistent_volume_claim("b", "claimY"),
/// ];
/// assert!(admission.check(&declared, &bound).is_err());
///
/// let admission = RunAdmission::new(AdmissionConfig::default().with_affinity_assistant(false));
/// assert!(admission.check(&declared, &bound).is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RunAdmission {
    config: AdmissionConfig,
}

impl RunAdmission {
    /// Create an admission check with the given configuration
    pub fn new(config: AdmissionConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &AdmissionConfig {
        &self.config
    }

    /// Checks the run's bindings, returning the first violation found.
    pub fn check(
        &self,
        declarations: &[WorkspaceDeclaration],
        bindings: &[WorkspaceBinding],
    ) -> Result<()> {
        validate_bindings(declarations, bindings)?;
        if self.config.affinity_assistant {
            validate_only_one_pvc_is_used(bindings)?;
        } else {
            tracing::debug!("affinity assistant disabled, skipping single claim check");
        }
        Ok(())
    }
}
