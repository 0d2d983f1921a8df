// src/utils.rs
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::path::Path;

/// Ensure directory exists
pub async fn ensure_dir_exists(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path)
        .await
        .with_context(|| format!("Failed to create directory: {}", path.display()))
}

/// Parse an optional RFC 3339 timestamp from a request field. An empty
/// string counts as absent.
pub fn parse_datetime_opt(value: Option<&str>) -> Result<Option<DateTime<Utc>>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => {
            let parsed = DateTime::parse_from_rfc3339(raw)
                .with_context(|| format!("Invalid timestamp: {}", raw))?;
            Ok(Some(parsed.with_timezone(&Utc)))
        }
    }
}

/// Escape LIKE wildcards in user-supplied search text so a keyword of
/// "100%" matches literally. Pair with `ESCAPE '\'` in the query.
pub fn escape_like(keyword: &str) -> String {
    keyword
        .chars()
        .flat_map(|c| match c {
            '%' | '_' | '\\' => vec!['\\', c],
            other => vec![other],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_datetime_opt() {
        assert_eq!(parse_datetime_opt(None).unwrap(), None);
        assert_eq!(parse_datetime_opt(Some("  ")).unwrap(), None);

        let parsed = parse_datetime_opt(Some("2026-10-15T14:00:00+02:00"))
            .unwrap()
            .unwrap();
        assert_eq!(parsed.to_rfc3339(), "2026-10-15T12:00:00+00:00");

        assert!(parse_datetime_opt(Some("15 octobre")).is_err());
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("infirmier"), "infirmier");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b\\c"), "a\\_b\\\\c");
    }
}
