//! Global subscriber installation.
//!
//! Kept in its own test binary: installing a global subscriber affects every
//! test sharing the process.

#![cfg(feature = "logging")]

use workspace_binding::{init_logging, validate_only_one_pvc_is_used, WorkspaceBinding};

#[test]
fn second_init_leaves_existing_subscriber_in_place() {
    assert!(init_logging());
    assert!(!init_logging());

    let bindings = [
        WorkspaceBinding::persistent_volume_claim("a", "claimX"),
        WorkspaceBinding::persistent_volume_claim("b", "claimY"),
    ];
    assert!(validate_only_one_pvc_is_used(&bindings).is_err());
}
