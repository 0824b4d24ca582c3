use super::backend::BackendError;
use crate::global;

/// Collapse a completion result into something the transcript can show.
/// Backend failures stop here.
pub fn normalize(result: Result<String, BackendError>) -> String {
    match result {
        Ok(text) => text,
        Err(err) => format!("{}{}", global::ERROR_PREFIX, err),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_success_is_untouched() {
        assert_eq!(normalize(Ok("  Paris.\n".into())), "  Paris.\n");
        assert_eq!(normalize(Ok(String::new())), "");
    }

    #[test]
    fn test_failures_become_error_text() {
        let failures = vec![
            BackendError::Transport("connection refused".into()),
            BackendError::Malformed("response carried no choices".into()),
            BackendError::Timeout(Duration::from_secs(3)),
        ];
        for err in failures {
            let detail = err.to_string();
            let text = normalize(Err(err));
            assert!(text.starts_with("⚠️ Error: "));
            assert!(text.ends_with(&detail));
        }
    }

    #[test]
    fn test_connection_refused_shape() {
        let text = normalize(Err(BackendError::Transport("connection refused".into())));
        assert_eq!(text, "⚠️ Error: connection refused");
    }
}
