//! Application configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAP_EMBED_URL: &str = "https://maps.google.com/maps?width=100%25&height=600&hl=es&q=Universidad+(Mi%20Organizacion)&t=&z=14&ie=UTF8&iwloc=B&output=embed";
pub const DEFAULT_BACKGROUND_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1480714378408-67cf0d13bc1b?q=80&w=2070&auto=format&fit=crop";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable (and its fallback, if any) is not set.
    #[error("missing config: env var {var} not set")]
    Missing { var: &'static str },

    /// A variable is set but its value is unusable.
    #[error("invalid config: {var}={value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Connection settings for the hosted backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Project base URL without trailing slash, e.g. `https://abc.supabase.co`.
    pub url: String,
    /// Public (anon) API key sent as `apikey` and bearer token.
    pub anon_key: String,
    pub timeouts: BackendTimeouts,
}

/// Presentation settings for the rendered pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub map_embed_url: String,
    pub background_image_url: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            map_embed_url: DEFAULT_MAP_EMBED_URL.to_owned(),
            background_image_url: DEFAULT_BACKGROUND_IMAGE_URL.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub backend: BackendConfig,
    pub page: PageConfig,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `SUPABASE_URL` (falls back to `VITE_SUPABASE_URL`)
    /// - `SUPABASE_ANON_KEY` (falls back to `VITE_SUPABASE_ANON_KEY`)
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_REQUEST_TIMEOUT_SECS`: default 30
    /// - `BACKEND_CONNECT_TIMEOUT_SECS`: default 10
    /// - `MAP_EMBED_URL`, `BACKGROUND_IMAGE_URL`
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = env_with_fallback("SUPABASE_URL", "VITE_SUPABASE_URL")?;
        let url = url.trim().trim_end_matches('/').to_owned();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid { var: "SUPABASE_URL", value: url });
        }
        let anon_key = env_with_fallback("SUPABASE_ANON_KEY", "VITE_SUPABASE_ANON_KEY")?
            .trim()
            .to_owned();

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            Err(_) => DEFAULT_PORT,
        };

        let timeouts = BackendTimeouts {
            request_secs: env_parse_u64("BACKEND_REQUEST_TIMEOUT_SECS", DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("BACKEND_CONNECT_TIMEOUT_SECS", DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS),
        };

        let page = PageConfig {
            map_embed_url: std::env::var("MAP_EMBED_URL").unwrap_or_else(|_| DEFAULT_MAP_EMBED_URL.to_owned()),
            background_image_url: std::env::var("BACKGROUND_IMAGE_URL")
                .unwrap_or_else(|_| DEFAULT_BACKGROUND_IMAGE_URL.to_owned()),
        };

        Ok(Self { port, backend: BackendConfig { url, anon_key, timeouts }, page })
    }
}

/// A blank primary counts as unset so the fallback still applies.
fn env_with_fallback(primary: &'static str, fallback: &'static str) -> Result<String, ConfigError> {
    env_non_blank(primary)
        .or_else(|| env_non_blank(fallback))
        .ok_or(ConfigError::Missing { var: primary })
}

fn env_non_blank(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
