use crate::domain::{error::DomainError, profile::ProjectProfile};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_profile(profile: &ProjectProfile) -> Result<(), DomainError> {
        profile.validate()
    }
}
