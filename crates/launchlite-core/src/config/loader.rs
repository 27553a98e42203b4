//! Environment variable loading helpers.
//!
//! Centralizes the fallback chains so business code never repeats
//! `or_else` ladders, and keeps the one `unsafe` set_var call site here.

use std::env;

/// Load `.env` from the current directory into the process environment.
/// Existing variables are never overwritten. Runs at most once.
pub fn load_dotenv() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let path = env::current_dir()
            .map(|d| d.join(".env"))
            .unwrap_or_else(|_| std::path::PathBuf::from(".env"));
        if let Ok(content) = std::fs::read_to_string(&path) {
            for line in content.lines() {
                if let Some((key, value)) = parse_dotenv_line(line) {
                    if env::var(key).is_err() {
                        set_env_var(key, value);
                    }
                }
            }
        }
    });
}

/// Parse one `.env` line into a key/value pair.
///
/// Skips blanks and `#` comments, strips inline comments outside quotes,
/// and unwraps single or double quotes around the value.
pub fn parse_dotenv_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let mut value = line[eq_pos + 1..].trim();
    if let Some(hash_pos) = value.find('#') {
        let before_hash = value[..hash_pos].trim_end();
        if !before_hash.contains('"') && !before_hash.contains('\'') {
            value = before_hash;
        }
    }
    if (value.starts_with('"') && value.ends_with('"') && value.len() >= 2)
        || (value.starts_with('\'') && value.ends_with('\'') && value.len() >= 2)
    {
        value = &value[1..value.len() - 1];
    }
    if key.is_empty() {
        return None;
    }
    Some((key, value))
}

/// Read from the primary variable or an alias chain, falling back to a default.
pub fn env_or<F>(primary: &str, aliases: &[&str], default: F) -> String
where
    F: FnOnce() -> String,
{
    env::var(primary)
        .ok()
        .or_else(|| aliases.iter().find_map(|a| env::var(a).ok()))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(default)
}

/// Read from the primary variable or an alias chain; empty counts as unset.
pub fn env_optional(primary: &str, aliases: &[&str]) -> Option<String> {
    env::var(primary)
        .ok()
        .or_else(|| aliases.iter().find_map(|a| env::var(a).ok()))
        .and_then(|s| {
            let s = s.trim().to_string();
            if s.is_empty() {
                None
            } else {
                Some(s)
            }
        })
}

/// Parse a boolean variable: 1/true/yes are true, 0/false/no/off are false.
pub fn env_bool(primary: &str, aliases: &[&str], default: bool) -> bool {
    let v = env::var(primary)
        .ok()
        .or_else(|| aliases.iter().find_map(|a| env::var(a).ok()));
    match v.as_deref() {
        Some(s) => !matches!(
            s.trim().to_lowercase().as_str(),
            "0" | "false" | "no" | "off"
        ),
        None => default,
    }
}

// All env::set_var / remove_var calls go through the wrappers below;
// business code never contains `unsafe { env::set_var(...) }`.
//
// SAFETY contract: callers invoke these before any threads are spawned.

/// Set a single environment variable.
#[allow(unsafe_code)]
pub fn set_env_var(key: &str, value: &str) {
    unsafe { env::set_var(key, value) };
}

/// Remove a single environment variable.
#[allow(unsafe_code)]
pub fn remove_env_var(key: &str) {
    unsafe { env::remove_var(key) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dotenv_line_basic() {
        assert_eq!(parse_dotenv_line("KEY=value"), Some(("KEY", "value")));
        assert_eq!(parse_dotenv_line("  KEY = value  "), Some(("KEY", "value")));
    }

    #[test]
    fn test_parse_dotenv_line_skips_comments_and_blanks() {
        assert_eq!(parse_dotenv_line(""), None);
        assert_eq!(parse_dotenv_line("   "), None);
        assert_eq!(parse_dotenv_line("# a comment"), None);
        assert_eq!(parse_dotenv_line("no_equals_sign"), None);
        assert_eq!(parse_dotenv_line("=value"), None);
    }

    #[test]
    fn test_parse_dotenv_line_strips_inline_comment() {
        assert_eq!(
            parse_dotenv_line("KEY=value # trailing"),
            Some(("KEY", "value"))
        );
        // Hash inside quotes is kept
        assert_eq!(
            parse_dotenv_line("KEY=\"val # ue\""),
            Some(("KEY", "val # ue"))
        );
    }

    #[test]
    fn test_parse_dotenv_line_unquotes() {
        assert_eq!(parse_dotenv_line("KEY=\"quoted\""), Some(("KEY", "quoted")));
        assert_eq!(parse_dotenv_line("KEY='single'"), Some(("KEY", "single")));
    }

    #[test]
    fn test_env_bool_parsing() {
        // Unset primary + aliases falls through to default
        assert!(env_bool("LAUNCHLITE_TEST_UNSET_BOOL", &[], true));
        assert!(!env_bool("LAUNCHLITE_TEST_UNSET_BOOL", &[], false));
    }
}
