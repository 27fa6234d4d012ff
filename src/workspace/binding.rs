//! Workspace bindings and their storage sources
//!
//! A binding supplies the concrete storage for one declared workspace. In a
//! run manifest every storage source is an optional field and exactly one of
//! them is expected to be set; [`WorkspaceBinding::source`] enforces that and
//! hands back the selection as a [`StorageSource`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::BindingError;
use super::newtypes::WorkspaceName;

/// Reference to an existing persistent volume claim
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistentVolumeClaimSource {
    /// Name of the claim in the run's namespace
    #[serde(default)]
    pub claim_name: String,
    /// Mount the claim read-only
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub read_only: bool,
}

/// Inline template for a claim provisioned per run
///
/// The template body is handed through untouched to whatever provisions the
/// claim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumeClaimTemplate {
    /// Claim metadata
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
    /// Claim spec (access modes, storage class, resource requests)
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub spec: Map<String, Value>,
}

/// Scratch directory that lives as long as the pod
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmptyDirSource {
    /// Backing medium, e.g. `Memory`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    /// Size limit as a quantity string, e.g. `1Gi`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_limit: Option<String>,
}

/// Config map projected as files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigMapSource {
    /// Name of the config map
    #[serde(default)]
    pub name: String,
}

/// Secret projected as files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretSource {
    /// Name of the secret
    #[serde(default)]
    pub secret_name: String,
}

/// The single storage source selected by a well-formed binding
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StorageSource<'a> {
    /// Existing persistent volume claim
    PersistentVolumeClaim(&'a PersistentVolumeClaimSource),
    /// Claim provisioned from an inline template
    VolumeClaimTemplate(&'a VolumeClaimTemplate),
    /// Pod-scoped scratch directory
    EmptyDir(&'a EmptyDirSource),
    /// Config map
    ConfigMap(&'a ConfigMapSource),
    /// Secret
    Secret(&'a SecretSource),
}

impl StorageSource<'_> {
    /// Manifest field name that selects this source.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::PersistentVolumeClaim(_) => "persistentVolumeClaim",
            Self::VolumeClaimTemplate(_) => "volumeClaimTemplate",
            Self::EmptyDir(_) => "emptyDir",
            Self::ConfigMap(_) => "configMap",
            Self::Secret(_) => "secret",
        }
    }
}

/// Storage supplied for a declared workspace at run time.
///
/// # Examples
///
/// ```
/// use workspace_binding::{StorageSource, WorkspaceBinding};
///
/// let binding = WorkspaceBinding::persistent_volume_claim("source", "shared-claim");
/// assert!(binding.validate().is_ok());
/// assert!(matches!(
///     binding.source(),
///     Ok(StorageSource::PersistentVolumeClaim(pvc)) if pvc.claim_name == "shared-claim"
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceBinding {
    /// Declared workspace this binding satisfies
    pub name: WorkspaceName,

    /// Directory inside the volume to expose instead of its root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_path: Option<String>,

    /// Existing claim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persistent_volume_claim: Option<PersistentVolumeClaimSource>,

    /// Claim to provision for this run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_claim_template: Option<VolumeClaimTemplate>,

    /// Scratch directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_dir: Option<EmptyDirSource>,

    /// Config map
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_map: Option<ConfigMapSource>,

    /// Secret
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<SecretSource>,
}

impl WorkspaceBinding {
    /// Binding with a name and no storage source. Not valid until one is set.
    pub fn new(name: impl Into<WorkspaceName>) -> Self {
        Self {
            name: name.into(),
            sub_path: None,
            persistent_volume_claim: None,
            volume_claim_template: None,
            empty_dir: None,
            config_map: None,
            secret: None,
        }
    }

    /// Binding to an existing claim.
    pub fn persistent_volume_claim(
        name: impl Into<WorkspaceName>,
        claim_name: impl Into<String>,
    ) -> Self {
        Self {
            persistent_volume_claim: Some(PersistentVolumeClaimSource {
                claim_name: claim_name.into(),
                read_only: false,
            }),
            ..Self::new(name)
        }
    }

    /// Binding that provisions a claim from `template`.
    pub fn volume_claim_template(
        name: impl Into<WorkspaceName>,
        template: VolumeClaimTemplate,
    ) -> Self {
        Self {
            volume_claim_template: Some(template),
            ..Self::new(name)
        }
    }

    /// Binding to a scratch directory.
    pub fn empty_dir(name: impl Into<WorkspaceName>) -> Self {
        Self {
            empty_dir: Some(EmptyDirSource::default()),
            ..Self::new(name)
        }
    }

    /// Binding to a config map.
    pub fn config_map(name: impl Into<WorkspaceName>, config_map: impl Into<String>) -> Self {
        Self {
            config_map: Some(ConfigMapSource {
                name: config_map.into(),
            }),
            ..Self::new(name)
        }
    }

    /// Binding to a secret.
    pub fn secret(name: impl Into<WorkspaceName>, secret_name: impl Into<String>) -> Self {
        Self {
            secret: Some(SecretSource {
                secret_name: secret_name.into(),
            }),
            ..Self::new(name)
        }
    }

    /// Sets the sub-path (chainable)
    #[must_use]
    pub fn with_sub_path(mut self, sub_path: impl Into<String>) -> Self {
        self.sub_path = Some(sub_path.into());
        self
    }

    /// Returns the storage source, provided exactly one is set.
    ///
    /// # Errors
    ///
    /// [`BindingError::MissingSource`] when no source is set and
    /// [`BindingError::MultipleSources`] when several are.
    pub fn source(&self) -> Result<StorageSource<'_>, BindingError> {
        let mut sources = self.set_sources();
        match sources.len() {
            0 => Err(BindingError::MissingSource),
            1 => Ok(sources.remove(0)),
            _ => Err(BindingError::MultipleSources(
                sources.iter().map(StorageSource::field_name).collect(),
            )),
        }
    }

    /// Checks that the binding is internally well-formed.
    ///
    /// Exactly one storage source must be set, and that source must carry the
    /// name of the object it refers to.
    pub fn validate(&self) -> Result<(), BindingError> {
        match self.source()? {
            StorageSource::PersistentVolumeClaim(pvc) if pvc.claim_name.is_empty() => {
                Err(BindingError::MissingField("persistentVolumeClaim.claimName"))
            },
            StorageSource::ConfigMap(cm) if cm.name.is_empty() => {
                Err(BindingError::MissingField("configMap.name"))
            },
            StorageSource::Secret(secret) if secret.secret_name.is_empty() => {
                Err(BindingError::MissingField("secret.secretName"))
            },
            StorageSource::PersistentVolumeClaim(_)
            | StorageSource::VolumeClaimTemplate(_)
            | StorageSource::EmptyDir(_)
            | StorageSource::ConfigMap(_)
            | StorageSource::Secret(_) => Ok(()),
        }
    }

    /// Claims this binding needs a dedicated volume for.
    ///
    /// A claim reference contributes the claim name; a template contributes
    /// the binding name, since the provisioned claim belongs to this binding
    /// alone. Fields are read as written, so a malformed binding carrying
    /// both yields two identities.
    pub fn claim_identities(&self) -> impl Iterator<Item = &str> + '_ {
        let claim = self
            .persistent_volume_claim
            .as_ref()
            .map(|pvc| pvc.claim_name.as_str());
        let template = self
            .volume_claim_template
            .as_ref()
            .map(|_| self.name.as_str());
        claim.into_iter().chain(template)
    }

    fn set_sources(&self) -> Vec<StorageSource<'_>> {
        let mut sources = Vec::with_capacity(1);
        if let Some(pvc) = &self.persistent_volume_claim {
            sources.push(StorageSource::PersistentVolumeClaim(pvc));
        }
        if let Some(template) = &self.volume_claim_template {
            sources.push(StorageSource::VolumeClaimTemplate(template));
        }
        if let Some(empty_dir) = &self.empty_dir {
            sources.push(StorageSource::EmptyDir(empty_dir));
        }
        if let Some(config_map) = &self.config_map {
            sources.push(StorageSource::ConfigMap(config_map));
        }
        if let Some(secret) = &self.secret {
            sources.push(StorageSource::Secret(secret));
        }
        sources
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::WorkspaceDeclaration;
    use serde_json::json;

    #[test]
    fn test_each_source_variant_is_valid() {
        let bindings = [
            WorkspaceBinding::persistent_volume_claim("a", "claim"),
            WorkspaceBinding::volume_claim_template("b", VolumeClaimTemplate::default()),
            WorkspaceBinding::empty_dir("c"),
            WorkspaceBinding::config_map("d", "settings"),
            WorkspaceBinding::secret("e", "credentials"),
        ];
        for binding in &bindings {
            assert!(binding.validate().is_ok(), "{} should be valid", binding.name);
        }
    }

    #[test]
    fn test_binding_without_source_is_invalid() {
        let binding = WorkspaceBinding::new("bare");
        assert_eq!(binding.validate(), Err(BindingError::MissingSource));
        assert_eq!(binding.source(), Err(BindingError::MissingSource));
    }

    #[test]
    fn test_binding_with_two_sources_is_invalid() {
        let mut binding = WorkspaceBinding::persistent_volume_claim("both", "claim");
        binding.empty_dir = Some(EmptyDirSource::default());

        assert_eq!(
            binding.validate(),
            Err(BindingError::MultipleSources(vec![
                "persistentVolumeClaim",
                "emptyDir"
            ]))
        );
    }

    #[test]
    fn test_empty_claim_name_is_invalid() {
        let binding = WorkspaceBinding::persistent_volume_claim("src", "");
        assert_eq!(
            binding.validate(),
            Err(BindingError::MissingField("persistentVolumeClaim.claimName"))
        );
    }

    #[test]
    fn test_empty_config_map_name_is_invalid() {
        let binding = WorkspaceBinding::config_map("settings", "");
        assert_eq!(
            binding.validate(),
            Err(BindingError::MissingField("configMap.name"))
        );
    }

    #[test]
    fn test_empty_secret_name_is_invalid() {
        let binding = WorkspaceBinding::secret("creds", "");
        assert_eq!(
            binding.validate(),
            Err(BindingError::MissingField("secret.secretName"))
        );
    }

    #[test]
    fn test_source_field_names() {
        let binding = WorkspaceBinding::volume_claim_template("vct", VolumeClaimTemplate::default());
        let source = binding.source().unwrap();
        assert_eq!(source.field_name(), "volumeClaimTemplate");
    }

    #[test]
    fn test_claim_identities() {
        let pvc = WorkspaceBinding::persistent_volume_claim("a", "claimX");
        let template = WorkspaceBinding::volume_claim_template("b", VolumeClaimTemplate::default());
        let scratch = WorkspaceBinding::empty_dir("c");

        assert_eq!(pvc.claim_identities().collect::<Vec<_>>(), vec!["claimX"]);
        assert_eq!(template.claim_identities().collect::<Vec<_>>(), vec!["b"]);
        assert_eq!(scratch.claim_identities().count(), 0);
    }

    #[test]
    fn test_claim_identities_reads_every_field() {
        let mut binding = WorkspaceBinding::persistent_volume_claim("a", "claimX");
        binding.volume_claim_template = Some(VolumeClaimTemplate::default());

        assert_eq!(
            binding.claim_identities().collect::<Vec<_>>(),
            vec!["claimX", "a"]
        );
    }

    #[test]
    fn test_binding_deserializes_manifest() {
        let binding: WorkspaceBinding = serde_json::from_value(json!({
            "name": "source",
            "subPath": "checkout",
            "volumeClaimTemplate": {
                "spec": {
                    "accessModes": ["ReadWriteOnce"],
                    "resources": { "requests": { "storage": "1Gi" } }
                }
            }
        }))
        .unwrap();

        assert_eq!(binding.name.as_str(), "source");
        assert_eq!(binding.sub_path.as_deref(), Some("checkout"));
        assert!(binding.validate().is_ok());
        let Ok(StorageSource::VolumeClaimTemplate(template)) = binding.source() else {
            panic!("expected a volume claim template");
        };
        assert_eq!(template.spec["accessModes"], json!(["ReadWriteOnce"]));
    }

    #[test]
    fn test_binding_manifest_missing_claim_name() {
        let binding: WorkspaceBinding = serde_json::from_value(json!({
            "name": "source",
            "persistentVolumeClaim": {}
        }))
        .unwrap();

        assert_eq!(
            binding.validate(),
            Err(BindingError::MissingField("persistentVolumeClaim.claimName"))
        );
    }

    #[test]
    fn test_binding_serializes_only_set_fields() {
        let value = serde_json::to_value(WorkspaceBinding::secret("creds", "token")).unwrap();
        assert_eq!(
            value,
            json!({ "name": "creds", "secret": { "secretName": "token" } })
        );
    }

    #[test]
    fn test_sub_path_does_not_affect_validity() {
        let binding = WorkspaceBinding::empty_dir("scratch").with_sub_path("tmp");
        assert_eq!(binding.sub_path.as_deref(), Some("tmp"));
        assert!(binding.validate().is_ok());
    }

    #[test]
    fn test_binding_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WorkspaceBinding>();
        assert_send_sync::<WorkspaceDeclaration>();
    }
}
