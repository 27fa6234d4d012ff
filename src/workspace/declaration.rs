//! Workspace declarations
//!
//! A declaration names a storage slot a task or pipeline needs. Only the
//! name takes part in validation; the remaining fields are carried so a
//! manifest round-trips without loss.

use serde::{Deserialize, Serialize};

use super::newtypes::WorkspaceName;

/// A workspace declared by a task or pipeline definition.
///
/// # Examples
///
/// ```
/// use workspace_binding::WorkspaceDeclaration;
///
/// let decl = WorkspaceDeclaration::new("source")
///     .with_description("Checked out repository")
///     .with_mount_path("/workspace/source");
/// assert_eq!(decl.name.as_str(), "source");
/// assert!(!decl.read_only);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceDeclaration {
    /// Name bindings refer to. Expected to be unique in the declaring set.
    pub name: WorkspaceName,

    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Where the workspace is mounted, if not the default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mount_path: Option<String>,

    /// Whether the task only reads from the workspace.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub read_only: bool,
}

impl WorkspaceDeclaration {
    /// Create a declaration with only a name.
    pub fn new(name: impl Into<WorkspaceName>) -> Self {
        Self {
            name: name.into(),
            description: None,
            mount_path: None,
            read_only: false,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the mount path.
    #[must_use]
    pub fn with_mount_path(mut self, mount_path: impl Into<String>) -> Self {
        self.mount_path = Some(mount_path.into());
        self
    }

    /// Marks the workspace read-only.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }
}
