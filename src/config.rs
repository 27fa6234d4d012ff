//! Admission configuration.
//!
//! Holds the switches the admission layer consults before running the
//! workspace checks. Loadable from TOML:
//!
//! ```toml
//! affinity_assistant = false
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for [`RunAdmission`](crate::admission::RunAdmission).
///
/// # Defaults
///
/// | Setting              | Default | Description                                      |
/// |----------------------|---------|--------------------------------------------------|
/// | `affinity_assistant` | true    | Require bindings to share at most one claim      |
///
/// # Examples
///
/// ```
/// use workspace_binding::AdmissionConfig;
///
/// let config = AdmissionConfig::default();
/// assert!(config.affinity_assistant);
///
/// let config = AdmissionConfig::default().with_affinity_assistant(false);
/// assert!(!config.affinity_assistant);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdmissionConfig {
    /// Whether the affinity assistant co-locates a run's pods with its claim.
    ///
    /// When enabled, admission also runs
    /// [`validate_only_one_pvc_is_used`](crate::workspace::validate_only_one_pvc_is_used).
    pub affinity_assistant: bool,
}

impl Default for AdmissionConfig {
    fn default() -> Self {
        Self {
            affinity_assistant: true,
        }
    }
}

impl AdmissionConfig {
    /// Sets whether the affinity assistant is enabled.
    pub fn with_affinity_assistant(mut self, enabled: bool) -> Self {
        self.affinity_assistant = enabled;
        self
    }

    /// Parses configuration from a TOML document. Missing keys take their
    /// defaults; unknown keys are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use workspace_binding::AdmissionConfig;
    ///
    /// let config = AdmissionConfig::from_toml_str("affinity_assistant = false")?;
    /// assert!(!config.affinity_assistant);
    /// # Ok::<(), workspace_binding::Error>(())
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        tracing::debug!(
            affinity_assistant = config.affinity_assistant,
            "loaded admission config"
        );
        Ok(config)
    }
}
