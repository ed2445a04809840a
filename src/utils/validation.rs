//! Input validation utilities

use crate::constants::{self, MAX_TAGS_PER_PROBLEM, MAX_TAG_LENGTH};

/// Validate username format
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if username.len() < 3 {
        return Err("Username must be at least 3 characters");
    }
    if username.len() > 50 {
        return Err("Username must be at most 50 characters");
    }
    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
    {
        return Err("Username can only contain letters, numbers, underscores, and hyphens");
    }
    Ok(())
}

/// Validate problem difficulty
pub fn validate_difficulty(difficulty: &str) -> Result<(), &'static str> {
    if constants::difficulties::ALL.contains(&difficulty) {
        Ok(())
    } else {
        Err("Difficulty must be one of Easy, Medium, Hard")
    }
}

/// Validate profile theme
pub fn validate_theme(theme: &str) -> Result<(), &'static str> {
    if constants::themes::ALL.contains(&theme) {
        Ok(())
    } else {
        Err("Theme must be light or dark")
    }
}

/// Validate user role
pub fn validate_role(role: &str) -> Result<(), &'static str> {
    if constants::roles::ALL.contains(&role) {
        Ok(())
    } else {
        Err("Invalid role")
    }
}

/// Validate a problem's tag set
pub fn validate_tags(tags: &[String]) -> Result<(), &'static str> {
    if tags.len() > MAX_TAGS_PER_PROBLEM {
        return Err("Too many tags");
    }
    for tag in tags {
        if tag.trim().is_empty() {
            return Err("Tags cannot be empty");
        }
        if tag.len() > MAX_TAG_LENGTH {
            return Err("Tag is too long");
        }
    }
    Ok(())
}

/// Parse a comma-separated tag filter from a query string
///
/// Whitespace around entries is trimmed and empty entries dropped. Returns
/// `None` when nothing usable remains, so callers can bind it as an absent
/// filter.
pub fn parse_tag_filter(raw: &str) -> Option<Vec<String>> {
    let tags: Vec<String> = raw
        .split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    if tags.is_empty() { None } else { Some(tags) }
}

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("Alice_123").is_ok());
        assert!(validate_username("ab").is_err()); // Too short
        assert!(validate_username("user@name").is_err()); // Invalid character
    }

    #[test]
    fn test_validate_difficulty() {
        assert!(validate_difficulty("Easy").is_ok());
        assert!(validate_difficulty("Medium").is_ok());
        assert!(validate_difficulty("Hard").is_ok());
        assert!(validate_difficulty("easy").is_err()); // Case sensitive
        assert!(validate_difficulty("Expert").is_err());
    }

    #[test]
    fn test_validate_theme() {
        assert!(validate_theme("light").is_ok());
        assert!(validate_theme("dark").is_ok());
        assert!(validate_theme("solarized").is_err());
    }

    #[test]
    fn test_validate_tags() {
        assert!(validate_tags(&["array".to_string(), "dp".to_string()]).is_ok());
        assert!(validate_tags(&["  ".to_string()]).is_err());
        assert!(validate_tags(&["x".repeat(100)]).is_err());
    }

    #[test]
    fn test_parse_tag_filter() {
        assert_eq!(
            parse_tag_filter("array, dp ,graph"),
            Some(vec![
                "array".to_string(),
                "dp".to_string(),
                "graph".to_string()
            ])
        );
        assert_eq!(parse_tag_filter(" , ,"), None);
        assert_eq!(parse_tag_filter(""), None);
    }

    #[test]
    fn test_sanitize_string() {
        assert_eq!(sanitize_string("  two sum \u{0000}"), "two sum");
    }
}
