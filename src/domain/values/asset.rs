use crate::domain::error::DomainError;

/// Normalize a user-supplied asset filter: trimmed, uppercased, single token.
/// Blank input means "no filter".
pub fn normalize_asset(raw: &str) -> Result<Option<String>, DomainError> {
    let token = raw.trim();
    if token.is_empty() {
        return Ok(None);
    }
    if !token.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(DomainError::InvalidInput(format!(
            "Asset must be a single alphanumeric ticker, got: {token}"
        )));
    }
    Ok(Some(token.to_ascii_uppercase()))
}
