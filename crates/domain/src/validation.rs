// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::entity::EntityId;
use crate::error::DomainError;

/// Validates that an entity identifier is non-empty.
///
/// # Errors
///
/// Returns `DomainError::InvalidEntityId` if the identifier is empty or
/// whitespace-only.
pub fn validate_entity_id(id: &EntityId) -> Result<(), DomainError> {
    if id.as_str().trim().is_empty() {
        return Err(DomainError::InvalidEntityId(String::from(
            "identifier must not be empty",
        )));
    }
    Ok(())
}

/// Validates that a display name is non-empty.
///
/// # Errors
///
/// Returns `DomainError::InvalidDisplayName` if the name is empty or
/// whitespace-only.
pub fn validate_display_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidDisplayName(String::from(
            "name must not be empty",
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_entity_id_rejected() {
        assert!(validate_entity_id(&EntityId::new("")).is_err());
        assert!(validate_entity_id(&EntityId::new("  ")).is_err());
        assert!(validate_entity_id(&EntityId::new("1")).is_ok());
    }

    #[test]
    fn test_empty_display_name_rejected() {
        assert!(validate_display_name("").is_err());
        assert!(validate_display_name("   ").is_err());
        assert!(validate_display_name("Bird Watching").is_ok());
    }
}
