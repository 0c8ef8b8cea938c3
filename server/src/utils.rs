//! Small helpers shared by handlers.

/// Validate email address format.
///
/// Basic syntactic checks, not full RFC 5322:
/// - exactly one `@` with non-empty local and domain parts
/// - domain contains at least one dot and no empty labels
/// - length between 3 and 255 characters
/// - restricted character sets for both parts
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.len() < 3 || email.len() > 255 {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    if !domain.contains('.') || domain.split('.').any(str::is_empty) {
        return false;
    }

    let valid_local = |c: char| c.is_alphanumeric() || matches!(c, '.' | '-' | '+' | '_');
    let valid_domain = |c: char| c.is_alphanumeric() || matches!(c, '.' | '-');

    local.chars().all(valid_local) && domain.chars().all(valid_domain)
}
