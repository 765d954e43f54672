//! Congratulation message rules.

/// Maximum length of a congratulation, in characters.
pub const MAX_TEXT_LENGTH: usize = 1_000;

/// A congratulation must contain non-whitespace text within the length limit.
pub fn validate_text(text: &str) -> Result<(), String> {
    if text.trim().is_empty() {
        return Err("Congratulation text cannot be empty".to_string());
    }
    if text.chars().count() > MAX_TEXT_LENGTH {
        return Err(format!(
            "Congratulation text exceeds maximum length of {MAX_TEXT_LENGTH} characters"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_rejected() {
        assert!(validate_text("").is_err());
        assert!(validate_text("   \n").is_err());
    }

    #[test]
    fn normal_text_is_accepted() {
        assert!(validate_text("Happy birthday!").is_ok());
    }

    #[test]
    fn length_is_counted_in_characters() {
        let cyrillic = "я".repeat(MAX_TEXT_LENGTH);
        assert!(validate_text(&cyrillic).is_ok());
        let too_long = "a".repeat(MAX_TEXT_LENGTH + 1);
        let msg = validate_text(&too_long).unwrap_err();
        assert!(msg.contains("1000"));
    }
}
