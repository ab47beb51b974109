use chrono::{DateTime, Duration, Utc};
use pasetors::{
    claims::{Claims, ClaimsValidationRules},
    keys::SymmetricKey,
    local,
    token::UntrustedToken,
    version4::V4,
    Local,
};
use uuid::Uuid;

use crate::settings::types::SecretSettings;

const SUBJECT_CLAIM: &str = "sub";
const EXPIRATION_CLAIM: &str = "exp";

#[derive(Debug, Clone, PartialEq)]
pub struct TokenClaims {
    pub subject: Uuid,
    pub expires_at: DateTime<Utc>,
}

#[derive(thiserror::Error, Debug)]
pub enum TokenError {
    #[error("token key must be exactly 32 bytes")]
    InvalidKey,
    #[error("token is not a v4.local PASETO")]
    Malformed,
    #[error("token failed verification")]
    Rejected,
    #[error("token claims are unusable: {0}")]
    Claims(String),
}

/// Issues and verifies the bearer tokens that identify a user.
pub trait TokenCodec {
    fn issue(&self, subject: Uuid) -> Result<String, TokenError>;
    /// Fails for tampered, foreign-key, malformed and expired tokens alike.
    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError>;
}

pub struct PasetoCodec {
    key: SymmetricKey<V4>,
    implicit_assertion: Vec<u8>,
    time_to_live: Duration,
}

impl PasetoCodec {
    pub fn new(secret: &SecretSettings) -> Result<Self, TokenError> {
        let key = SymmetricKey::<V4>::from(secret.secret_key.as_bytes())
            .map_err(|_| TokenError::InvalidKey)?;
        Ok(Self {
            key,
            implicit_assertion: secret.implicit_assertion.as_bytes().to_vec(),
            time_to_live: Duration::minutes(secret.token_expiration),
        })
    }

    pub fn issue_expiring_at(
        &self,
        subject: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let mut claims = Claims::new().map_err(|e| TokenError::Claims(e.to_string()))?;
        claims
            .subject(&subject.to_string())
            .map_err(|e| TokenError::Claims(e.to_string()))?;
        claims
            .expiration(&expires_at.to_rfc3339())
            .map_err(|e| TokenError::Claims(e.to_string()))?;
        local::encrypt(&self.key, &claims, None, Some(self.implicit_assertion.as_slice()))
            .map_err(|e| TokenError::Claims(e.to_string()))
    }
}

impl TokenCodec for PasetoCodec {
    fn issue(&self, subject: Uuid) -> Result<String, TokenError> {
        self.issue_expiring_at(subject, Utc::now() + self.time_to_live)
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let untrusted =
            UntrustedToken::<Local, V4>::try_from(token).map_err(|_| TokenError::Malformed)?;
        let trusted = local::decrypt(
            &self.key,
            &untrusted,
            &ClaimsValidationRules::new(),
            None,
            Some(self.implicit_assertion.as_slice()),
        )
        .map_err(|_| TokenError::Rejected)?;
        let claims = trusted
            .payload_claims()
            .ok_or(TokenError::Claims("missing payload".to_string()))?;

        let subject = claims
            .get_claim(SUBJECT_CLAIM)
            .and_then(|sub| sub.as_str())
            .and_then(|sub| Uuid::parse_str(sub).ok())
            .ok_or(TokenError::Claims("subject is not a user id".to_string()))?;
        let expires_at = claims
            .get_claim(EXPIRATION_CLAIM)
            .and_then(|exp| exp.as_str())
            .and_then(|exp| DateTime::parse_from_rfc3339(exp).ok())
            .map(|exp| exp.with_timezone(&Utc))
            .ok_or(TokenError::Claims("expiration is not a timestamp".to_string()))?;

        Ok(TokenClaims {
            subject,
            expires_at,
        })
    }
}
