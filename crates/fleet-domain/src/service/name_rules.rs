//! Name validation shared by the container, ship and truck create flows

use fleet_types::DomainError;

/// Check a display name against the emptiness and length rules.
///
/// Uniqueness is a store query and stays with the caller; the order there
/// is always empty, then too long, then unique.
pub fn validate_name(name: &str, maximum_length: usize) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::NameCannotBeEmpty);
    }

    if name.chars().count() > maximum_length {
        return Err(DomainError::NameTooLong(maximum_length));
    }

    Ok(())
}
