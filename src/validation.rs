//! Attribute Name Validation
//!
//! This module provides the identifier checks applied to every attribute name
//! before it participates in dependency analysis.
//!
//! ## Validation Principles
//!
//! 1. **Whitelist, not blacklist**: Only allow known-safe characters
//! 2. **Validate early**: Check names before any set construction
//! 3. **Fail clearly**: Return the rejection reason with every error
//!
//! ## Usage
//!
//! ```rust
//! use relnorm::validation::validate_attribute_name;
//!
//! assert!(validate_attribute_name("employee_id").is_ok());
//! assert!(validate_attribute_name("1st_place").is_err());
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{NormError, NormResult};

/// Maximum attribute name length in bytes.
///
/// Matches the identifier cap used by common SQL catalogs, so a validated
/// name can double as a column name without further checks.
pub const MAX_ATTRIBUTE_NAME_LEN: usize = 63;

/// Well-formed attribute names: a letter or underscore followed by letters,
/// digits, and underscores.
static ATTRIBUTE_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("attribute name regex must compile")
});

/// Validate an attribute name
///
/// Allows: ASCII alphanumeric + underscore, not starting with a digit
/// Rejects: empty names, punctuation, whitespace, overlong names
///
/// # Arguments
///
/// * `name` - Attribute name to validate
///
/// # Returns
///
/// `Ok(())` if valid, `Err` with the rejection reason if invalid
///
/// # Examples
///
/// ```rust
/// use relnorm::validation::validate_attribute_name;
///
/// validate_attribute_name("user_name")?;
/// validate_attribute_name("_hidden")?;
///
/// assert!(validate_attribute_name("user name").is_err());
/// assert!(validate_attribute_name("user-name").is_err());
/// # Ok::<(), relnorm::NormError>(())
/// ```
pub fn validate_attribute_name(name: &str) -> NormResult<()> {
    // Check for empty
    if name.is_empty() {
        return Err(NormError::InvalidAttributeName {
            name: name.to_string(),
            reason: "name cannot be empty".to_string(),
        });
    }

    // Ensure valid identifier characters (ASCII alphanumeric + underscore)
    if !ATTRIBUTE_NAME_PATTERN.is_match(name) {
        let reason = if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            "name cannot start with a digit".to_string()
        } else {
            "name must contain only ASCII letters, digits, and underscores".to_string()
        };
        return Err(NormError::InvalidAttributeName {
            name: truncate_for_message(name),
            reason,
        });
    }

    // Length limit; the pattern guarantees ASCII, so byte slicing is safe here
    if name.len() > MAX_ATTRIBUTE_NAME_LEN {
        return Err(NormError::InvalidAttributeName {
            name: format!("{}... ({} bytes)", &name[..20], name.len()),
            reason: format!("name too long (max {MAX_ATTRIBUTE_NAME_LEN} bytes)"),
        });
    }

    Ok(())
}

/// Truncate a name for error messages
fn truncate_for_message(s: &str) -> String {
    const MAX_SHOWN: usize = 50;

    if s.chars().count() > MAX_SHOWN {
        let shown: String = s.chars().take(MAX_SHOWN).collect();
        format!("{shown}...")
    } else {
        s.to_string()
    }
}
