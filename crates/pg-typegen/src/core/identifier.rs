//! Identifier validation and case conversion.
//!
//! Catalog identifiers arrive as lowercase names with separators
//! (`order_status`); generated code refers to them as upper-camel-case type
//! names (`OrderStatus`). Configuration names are validated against the
//! limits PostgreSQL itself enforces.

use crate::error::{Result, TypegenError};

/// Maximum identifier length (PostgreSQL's NAMEDATALEN - 1).
const MAX_IDENTIFIER_LENGTH: usize = 63;

/// Validate a catalog identifier.
///
/// Rejects:
/// - Empty identifiers
/// - Identifiers containing null bytes
/// - Identifiers exceeding PostgreSQL's maximum length
///
/// # Errors
///
/// Returns `TypegenError::Config` for invalid identifiers with a descriptive message.
pub fn validate_identifier(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(TypegenError::Config(
            "Identifier cannot be empty".to_string(),
        ));
    }

    if name.contains('\0') {
        return Err(TypegenError::Config(format!(
            "Identifier contains null byte: {:?}",
            name
        )));
    }

    if name.len() > MAX_IDENTIFIER_LENGTH {
        return Err(TypegenError::Config(format!(
            "Identifier exceeds maximum length of {} bytes (got {} bytes): {:?}",
            MAX_IDENTIFIER_LENGTH,
            name.len(),
            name
        )));
    }

    Ok(())
}

/// Convert a separated identifier into an upper-camel-case type name.
///
/// The identifier is split on every non-alphanumeric character. Each
/// non-empty segment gets its first character upper-cased; the rest of the
/// segment (digits, existing capitals) is kept as-is.
///
/// ```
/// use pg_typegen::core::identifier::camelize;
///
/// assert_eq!(camelize("order_status"), "OrderStatus");
/// assert_eq!(camelize("OrderStatus"), "OrderStatus");
/// assert_eq!(camelize(""), "");
/// ```
pub fn camelize(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len());

    for segment in identifier.split(|c: char| !c.is_alphanumeric()) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            // Some uppercase mappings expand into combining marks; those
            // would split the name on a second pass, so keep the original.
            let upper = first.to_uppercase();
            if upper.clone().all(char::is_alphanumeric) {
                out.extend(upper);
            } else {
                out.push(first);
            }
            out.push_str(chars.as_str());
        }
    }

    out
}
