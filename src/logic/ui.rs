//! UI state transition logic

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 1500;

/// Check if a toast shown `elapsed_ms` ago should be dismissed
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

/// Toasts starting with this prefix are rendered as errors
pub const ERROR_PREFIX: &str = "Error:";

pub fn is_error_toast(message: &str) -> bool {
    message.starts_with(ERROR_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_dismissal() {
        assert!(!should_dismiss_toast(0));
        assert!(!should_dismiss_toast(1499));
        assert!(should_dismiss_toast(1500));
    }

    #[test]
    fn test_error_toast() {
        assert!(is_error_toast("Error: disk full"));
        assert!(!is_error_toast("Saved rocket-favicon.svg"));
    }
}
