use thiserror::Error;

/// Errors from talk store operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("No talk '{0}' found")]
    TalkNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = StoreError::TalkNotFound("welding".to_string());
        assert_eq!(err.to_string(), "No talk 'welding' found");
    }
}
