use std::env;
use std::str::FromStr;

/// Reads `key`, falling back to `default` when unset or unparsable.
pub(crate) fn parsed_or<T: FromStr>(key: &str, default: T) -> T {
    parse_or(env::var(key).ok().as_deref(), default)
}

pub(crate) fn string_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

pub(crate) fn parse_or<T: FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or() {
        assert_eq!(parse_or::<u16>(Some("8080"), 3000), 8080);
        assert_eq!(parse_or::<u16>(Some(" 8080 "), 3000), 8080);
        assert_eq!(parse_or::<u16>(Some("http"), 3000), 3000);
        assert_eq!(parse_or::<u16>(None, 3000), 3000);
    }
}
