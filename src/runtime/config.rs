/// Environment variable holding the catalog service base URL.
pub const BASE_URL_ENV: &str = "PRODUCT_API_BASE_URL";

/// Where the catalog service lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme and authority, without a trailing slash (e.g. `http://localhost:8080`).
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_base_url("http://localhost:8080")
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Reads [`BASE_URL_ENV`], falling back to the default when unset or blank.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::with_base_url(url.trim()),
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_are_stripped() {
        assert_eq!(
            ClientConfig::with_base_url("http://catalog.local/").base_url,
            "http://catalog.local"
        );
        assert_eq!(ClientConfig::with_base_url("").base_url, "");
    }

    #[test]
    fn test_default_points_at_local_server() {
        assert_eq!(ClientConfig::default().base_url, "http://localhost:8080");
    }
}
