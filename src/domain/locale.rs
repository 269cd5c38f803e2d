//! Locale codes as used by the translations table.

use super::error::DomainError;

pub const DEFAULT_SOURCE_LOCALE: &str = "en";

/// Normalise a locale code such as `pt-BR` into its lowercase storage form.
///
/// Accepts a 2-3 letter language subtag optionally followed by `-` or `_`
/// and a region subtag.
pub fn normalize_locale(code: &str) -> Result<String, DomainError> {
    let trimmed = code.trim();
    let mut parts = trimmed.splitn(2, ['-', '_']);
    let language = parts.next().unwrap_or_default();
    if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(DomainError::validation(format!(
            "`{trimmed}` is not a valid locale code"
        )));
    }

    match parts.next() {
        None => Ok(language.to_ascii_lowercase()),
        Some(region)
            if (2..=4).contains(&region.len())
                && region.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            Ok(format!(
                "{}-{}",
                language.to_ascii_lowercase(),
                region.to_ascii_lowercase()
            ))
        }
        Some(_) => Err(DomainError::validation(format!(
            "`{trimmed}` has an invalid region subtag"
        ))),
    }
}

pub fn same_locale(left: &str, right: &str) -> bool {
    left.trim().eq_ignore_ascii_case(right.trim())
}
