use std::fmt;

/// Custom error type for tree parsing operations
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// No lines or records were supplied to a parser
    InputEmpty(String),
    /// Format token is not one of the recognized kinds
    UnsupportedFormat(String),
    /// Tree shape violations (third child, inconsistent indices/depths)
    StructuralViolation(String),
    /// A structured-document record is missing fields or fails to decode
    MalformedRecord(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InputEmpty(msg) => write!(f, "InputEmpty: {}", msg),
            ParseError::UnsupportedFormat(msg) => write!(f, "UnsupportedFormat: {}", msg),
            ParseError::StructuralViolation(msg) => write!(f, "StructuralViolation: {}", msg),
            ParseError::MalformedRecord(msg) => write!(f, "MalformedRecord: {}", msg),
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ParseError::InputEmpty("no lines".to_string());
        assert_eq!(err.to_string(), "InputEmpty: no lines");

        let err = ParseError::UnsupportedFormat("XML".to_string());
        assert_eq!(err.to_string(), "UnsupportedFormat: XML");

        let err = ParseError::StructuralViolation("third child".to_string());
        assert_eq!(err.to_string(), "StructuralViolation: third child");

        let err = ParseError::MalformedRecord("missing depth".to_string());
        assert_eq!(err.to_string(), "MalformedRecord: missing depth");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<ParseError>();
        assert_sync::<ParseError>();
    }
}
