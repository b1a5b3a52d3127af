#[cfg(test)]
mod tests {
    use crate::core::counter::{Command, CommandError};

    #[test]
    fn test_bytes_use_variant_names() {
        let bytes = Command::Increment.to_bytes().unwrap();
        assert_eq!(bytes, b"\"Increment\"");
        assert_eq!(Command::from_bytes(b"\"Decrement\"").unwrap(), Command::Decrement);
    }

    #[test]
    fn test_from_bytes_rejects_unknown_command() {
        let err = Command::from_bytes(b"\"Set\"").unwrap_err();
        assert!(matches!(err, CommandError::Decode(_)));
        assert!(err.to_string().starts_with("invalid counter command"));
    }

    #[test]
    fn test_parse_script() {
        let script = Command::parse_script(r#"["Increment", "Decrement", "Increment"]"#).unwrap();
        assert_eq!(
            script,
            vec![Command::Increment, Command::Decrement, Command::Increment]
        );
    }

    #[test]
    fn test_parse_blank_script_is_empty() {
        assert!(Command::parse_script("").unwrap().is_empty());
        assert!(Command::parse_script("  \n").unwrap().is_empty());
        assert!(Command::parse_script("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_script_rejects_non_array() {
        assert!(Command::parse_script("\"Increment\"").is_err());
        assert!(Command::parse_script("[\"Increment\"").is_err());
    }
}
