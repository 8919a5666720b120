//! Utility functions

/// Mask the local part of an email address for log output.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let keep = if local.chars().count() <= 2 { 1 } else { 2 };
            let kept: String = local.chars().take(keep).collect();
            format!("{kept}***@{domain}")
        }
        _ => "***".to_string(),
    }
}
