//! Centralized configuration (environment variables + defaults).

use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_DB_FILE: &str = "db.json";
pub const DEFAULT_DB_DIR: &str = "db";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_PLATFORM: &str = "standalone";
pub const DEFAULT_LOG_FILTER: &str = "json_collections_api=info,api_server=info,merge_json=info,tower_http=info";

/// Merged document path (`DB_FILE`, default `db.json`).
pub fn db_file() -> PathBuf {
    env_or("DB_FILE", DEFAULT_DB_FILE).into()
}

/// Per-collection directory (`DB_DIR`, default `db`).
pub fn db_dir() -> PathBuf {
    env_or("DB_DIR", DEFAULT_DB_DIR).into()
}

/// Listen address (`BIND_ADDR`, default `0.0.0.0:3000`).
pub fn bind_addr() -> anyhow::Result<SocketAddr> {
    let raw = env_or("BIND_ADDR", DEFAULT_BIND_ADDR);
    raw.parse::<SocketAddr>()
        .map_err(|e| anyhow::anyhow!("BIND_ADDR '{}' is not a valid socket address: {}", raw, e))
}

/// Hosting label reported by `/api/status` (`APP_PLATFORM`).
pub fn platform() -> String {
    env_or("APP_PLATFORM", DEFAULT_PLATFORM)
}

/// CORS origin allow-list (`CORS_ALLOWED_ORIGINS`, comma separated).
///
/// `None` means any origin is allowed.
pub fn cors_allowed_origins() -> Option<Vec<String>> {
    let raw = std::env::var("CORS_ALLOWED_ORIGINS").ok()?;
    let origins = parse_list(&raw);
    if origins.is_empty() {
        None
    } else {
        Some(origins)
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bind_addr_parses() {
        let addr: SocketAddr = DEFAULT_BIND_ADDR.parse().unwrap();
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_parse_list_trims_and_drops_empty() {
        assert_eq!(
            parse_list(" https://a.example, ,https://b.example ,"),
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
        assert!(parse_list(" , ").is_empty());
    }
}
