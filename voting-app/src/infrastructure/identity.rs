use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;
use voting_errors::AppError;

/// Claims read from a Google ID token.
///
/// The token is decoded without checking its signature. The voting backend
/// receives only `name` and `email` and is responsible for trusting them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IdentityClaims {
    pub email: String,
    pub name: String,
}

impl IdentityClaims {
    pub fn decode_unverified(credential: &str) -> Result<Self, AppError> {
        let mut parts = credential.trim().split('.');
        let payload = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(_header), Some(payload), Some(_signature), None) => payload,
            _ => {
                return Err(AppError::InvalidCredential(
                    "expected three dot-separated segments".to_string(),
                ))
            }
        };

        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .map_err(|e| AppError::InvalidCredential(format!("payload is not base64url: {}", e)))?;

        let claims: IdentityClaims = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::InvalidCredential(format!("payload is not valid claims: {}", e)))?;

        if claims.email.trim().is_empty() {
            return Err(AppError::InvalidCredential("credential has no email".to_string()));
        }

        Ok(claims)
    }
}
