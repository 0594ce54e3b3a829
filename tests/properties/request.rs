//! Property tests for request validation.

use proptest::prelude::*;

use modelship::{ConfigurationError, DeploymentRequest};

proptest! {
    /// PROPERTY: any target outside aws/gcp/local is rejected, never panics.
    #[test]
    fn property_unknown_targets_are_rejected(target in "[a-zA-Z0-9_-]{0,10}") {
        let lowered = target.to_lowercase();
        prop_assume!(!["aws", "gcp", "local"].contains(&lowered.as_str()));

        let err = DeploymentRequest::new("gpt2", target.clone()).to_config().unwrap_err();
        prop_assert_eq!(err, ConfigurationError::UnknownTarget(target));
    }

    /// PROPERTY: blank model ids are rejected before the target is looked at.
    #[test]
    fn property_blank_model_id_is_reported_first(
        blank in "[ \t]{0,4}",
        target in "[a-z]{0,6}",
    ) {
        let err = DeploymentRequest::new(blank, target).to_config().unwrap_err();
        prop_assert_eq!(err, ConfigurationError::EmptyModelId);
    }
}
