use voting_errors::AppError;

use crate::infrastructure::backend::DEFAULT_API_URL;

const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend base URL without a trailing slash.
    pub api_url: String,
    pub google_client_id: Option<String>,
}

impl AppConfig {
    /// Reads `API_URL` and `GOOGLE_CLIENT_ID`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_values(
            std::env::var("API_URL").ok(),
            std::env::var("GOOGLE_CLIENT_ID").ok(),
        )
    }

    pub fn from_values(
        api_url: Option<String>,
        google_client_id: Option<String>,
    ) -> Result<Self, AppError> {
        let api_url = api_url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Self {
            api_url: validate_api_url(&api_url)?,
            google_client_id: google_client_id
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty()),
        })
    }
}

fn validate_api_url(raw: &str) -> Result<String, AppError> {
    let parsed = url::Url::parse(raw)
        .map_err(|e| AppError::Config(format!("API_URL is not a valid URL: {}", e)))?;

    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(AppError::Config(
            "API_URL must use http or https".to_string(),
        ));
    }

    if parsed.host_str().is_none() {
        return Err(AppError::Config("API_URL must have a host".to_string()));
    }

    Ok(raw.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, None).unwrap();
        assert_eq!(config.api_url, "http://localhost:4000");
        assert_eq!(config.google_client_id, None);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config =
            AppConfig::from_values(Some("https://vote.example.com/api/".into()), Some(" id ".into()))
                .unwrap();
        assert_eq!(config.api_url, "https://vote.example.com/api");
        assert_eq!(config.google_client_id.as_deref(), Some("id"));
    }

    #[test]
    fn test_invalid_url() {
        assert!(AppConfig::from_values(Some("not a url".into()), None).is_err());
        assert!(AppConfig::from_values(Some("ftp://example.com".into()), None).is_err());
    }
}
