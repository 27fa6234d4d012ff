//! Validation of run bindings against declared workspaces

use std::collections::BTreeSet;

use super::binding::WorkspaceBinding;
use super::declaration::WorkspaceDeclaration;
use super::error::ValidationError;
use super::newtypes::WorkspaceName;

/// Validates that `bindings` satisfy `declarations`.
///
/// Each binding must pass [`WorkspaceBinding::validate`]; the first one that
/// does not is reported and the rest are not inspected. Then the bound names
/// must equal the declared names as sets. Order does not matter and a name
/// repeated on either side counts once.
///
/// # Examples
///
/// ```
/// use workspace_binding::{validate_bindings, WorkspaceBinding, WorkspaceDeclaration};
///
/// let declared = [WorkspaceDeclaration::new("src"), WorkspaceDeclaration::new("cache")];
/// let bound = [
///     WorkspaceBinding::empty_dir("cache"),
///     WorkspaceBinding::persistent_volume_claim("src", "repo"),
/// ];
/// assert!(validate_bindings(&declared, &bound).is_ok());
/// ```
pub fn validate_bindings(
    declarations: &[WorkspaceDeclaration],
    bindings: &[WorkspaceBinding],
) -> Result<(), ValidationError> {
    for binding in bindings {
        if let Err(source) = binding.validate() {
            tracing::warn!(binding = %binding.name, error = %source, "invalid workspace binding");
            return Err(ValidationError::BindingInvalid {
                name: binding.name.clone(),
                source,
            });
        }
    }

    let declared: BTreeSet<&WorkspaceName> = declarations.iter().map(|d| &d.name).collect();
    let bound: BTreeSet<&WorkspaceName> = bindings.iter().map(|b| &b.name).collect();

    if declared != bound {
        let missing: Vec<WorkspaceName> = declared.difference(&bound).map(|&n| n.clone()).collect();
        let unexpected: Vec<WorkspaceName> =
            bound.difference(&declared).map(|&n| n.clone()).collect();
        tracing::warn!(
            ?missing,
            ?unexpected,
            "bound workspaces did not match declared workspaces"
        );
        return Err(ValidationError::NameMismatch {
            missing,
            unexpected,
        });
    }

    tracing::debug!(
        declared = declarations.len(),
        bound = bindings.len(),
        "workspace bindings validated"
    );
    Ok(())
}

/// Distinct claim identities used by `bindings`, in byte order.
///
/// See [`WorkspaceBinding::claim_identities`] for what each binding
/// contributes.
pub fn claim_identities(bindings: &[WorkspaceBinding]) -> BTreeSet<&str> {
    bindings
        .iter()
        .flat_map(WorkspaceBinding::claim_identities)
        .collect()
}

/// Validates that `bindings` use at most one persistent volume claim.
///
/// Only needed when the affinity assistant pins every pod of a run to the
/// node holding the claim; two distinct claims cannot both be honoured.
///
/// # Examples
///
/// ```
/// use workspace_binding::{validate_only_one_pvc_is_used, ValidationError, WorkspaceBinding};
///
/// let shared = [
///     WorkspaceBinding::persistent_volume_claim("a", "claimX"),
///     WorkspaceBinding::persistent_volume_claim("b", "claimX"),
/// ];
/// assert!(validate_only_one_pvc_is_used(&shared).is_ok());
///
/// let split = [
///     WorkspaceBinding::persistent_volume_claim("a", "claimX"),
///     WorkspaceBinding::persistent_volume_claim("b", "claimY"),
/// ];
/// assert_eq!(validate_only_one_pvc_is_used(&split), Err(ValidationError::MultiplePvc));
/// ```
pub fn validate_only_one_pvc_is_used(
    bindings: &[WorkspaceBinding],
) -> Result<(), ValidationError> {
    let claims = claim_identities(bindings);
    if claims.len() > 1 {
        tracing::warn!(?claims, "more than one persistent volume claim is bound");
        return Err(ValidationError::MultiplePvc);
    }
    tracing::debug!(claims = claims.len(), "single claim check passed");
    Ok(())
}
