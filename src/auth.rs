// src/auth.rs
//! Bearer-token verification against the hosted identity provider.
//!
//! Credentials never live here: the provider signs RS256 ID tokens, we
//! verify them against its published x509 keys and bind the subject claim
//! to a local profile row, creating the row on first sight.

use crate::config::AuthSettings;
use crate::database::Database;
use crate::models::UserProfile;
use crate::repositories::ProfileRepository;
use anyhow::Result;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use rocket::http::Status;
use rocket::request::{FromRequest, Outcome};
use rocket::{Request, State};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{error, info, warn};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub aud: String,
    pub iss: String,
    pub sub: String,
    pub email: String,
    pub exp: usize,
    pub iat: usize,
}

/// Identity asserted by a verified token.
#[derive(Debug, Clone)]
pub struct TokenIdentity {
    pub subject: String,
    pub email: String,
}

impl From<Claims> for TokenIdentity {
    fn from(claims: Claims) -> Self {
        Self {
            subject: claims.sub,
            email: claims.email,
        }
    }
}

pub struct AuthConfig {
    settings: AuthSettings,
    keys: HashMap<String, String>, // kid -> public key PEM
}

impl AuthConfig {
    pub fn new(settings: AuthSettings) -> Self {
        Self {
            settings,
            keys: HashMap::new(),
        }
    }

    /// Fetch the identity provider's public keys for token verification.
    pub async fn refresh_keys(&mut self) -> Result<()> {
        let response = reqwest::get(&self.settings.keys_url).await?;
        let keys: HashMap<String, String> = response.json().await?;

        self.keys = keys;
        info!("Updated identity provider public keys");

        Ok(())
    }

    pub fn settings(&self) -> &AuthSettings {
        &self.settings
    }
}

/// Authenticated request: verified token identity plus the profile row it
/// maps to.
pub struct AuthenticatedUser {
    pub identity: TokenIdentity,
    pub profile: UserProfile,
}

impl AuthenticatedUser {
    pub fn user_id(&self) -> &str {
        &self.profile.id
    }

    pub fn email(&self) -> &str {
        &self.identity.email
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AuthenticatedUser {
    type Error = AuthError;

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let auth_config = match req.guard::<&State<AuthConfig>>().await {
            Outcome::Success(config) => config,
            Outcome::Error((status, _)) => {
                return Outcome::Error((status, AuthError::DatabaseError))
            }
            Outcome::Forward(f) => return Outcome::Forward(f),
        };

        let db = match req.guard::<&State<Database>>().await {
            Outcome::Success(db) => db,
            Outcome::Error((status, _)) => {
                return Outcome::Error((status, AuthError::DatabaseError))
            }
            Outcome::Forward(f) => return Outcome::Forward(f),
        };

        let token = match req.headers().get_one("Authorization") {
            Some(header) if header.starts_with("Bearer ") => &header[7..],
            Some(_) => {
                warn!("Invalid Authorization header format");
                return Outcome::Error((Status::Unauthorized, AuthError::InvalidToken));
            }
            None => {
                warn!("Missing Authorization header");
                return Outcome::Error((Status::Unauthorized, AuthError::MissingToken));
            }
        };

        let identity = match verify_bearer_token(token, auth_config) {
            Ok(identity) => identity,
            Err(e) => {
                warn!("Token verification failed: {}", e);
                return Outcome::Error((Status::Unauthorized, AuthError::TokenVerificationFailed));
            }
        };

        // First authenticated request provisions the profile row.
        let repo = ProfileRepository::new(db.pool());
        let profile = match repo.get_or_create(&identity.subject, &identity.email).await {
            Ok(profile) => profile,
            Err(e) => {
                error!(
                    "Failed to load or provision profile for {}: {}",
                    identity.email, e
                );
                return Outcome::Error((Status::InternalServerError, AuthError::DatabaseError));
            }
        };

        info!("User {} authenticated", identity.email);

        Outcome::Success(AuthenticatedUser { identity, profile })
    }
}

#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
    TokenVerificationFailed,
    DatabaseError,
}

impl AuthError {
    pub fn message(&self) -> &'static str {
        match self {
            AuthError::MissingToken => "Authorization token required",
            AuthError::InvalidToken => "Invalid authorization token format",
            AuthError::TokenVerificationFailed => "Token verification failed",
            AuthError::DatabaseError => "Database error occurred",
        }
    }
}

fn verify_bearer_token(token: &str, auth_config: &AuthConfig) -> Result<TokenIdentity> {
    let header = jsonwebtoken::decode_header(token)?;
    let kid = header
        .kid
        .ok_or_else(|| anyhow::anyhow!("Missing kid in token header"))?;

    let public_key = auth_config
        .keys
        .get(&kid)
        .ok_or_else(|| anyhow::anyhow!("Unknown key ID: {}", kid))?;

    let settings = auth_config.settings();
    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_audience(&[&settings.project_id]);
    validation.set_issuer(&[&settings.issuer]);

    let decoding_key = DecodingKey::from_rsa_pem(public_key.as_bytes())?;
    let token_data = decode::<Claims>(token, &decoding_key, &validation)?;

    Ok(token_data.claims.into())
}

/// Optional auth guard that doesn't fail if no auth is provided.
pub struct OptionalAuth {
    pub user: Option<AuthenticatedUser>,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for OptionalAuth {
    type Error = ();

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match AuthenticatedUser::from_request(req).await {
            Outcome::Success(auth) => Outcome::Success(OptionalAuth { user: Some(auth) }),
            _ => Outcome::Success(OptionalAuth { user: None }),
        }
    }
}

/// Guard for the provisioning endpoints: the caller must present the
/// configured service key, not a user token.
pub struct ServiceAuth;

#[rocket::async_trait]
impl<'r> FromRequest<'r> for ServiceAuth {
    type Error = AuthError;

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let auth_config = match req.guard::<&State<AuthConfig>>().await {
            Outcome::Success(config) => config,
            Outcome::Error((status, _)) => {
                return Outcome::Error((status, AuthError::DatabaseError))
            }
            Outcome::Forward(f) => return Outcome::Forward(f),
        };

        match req.headers().get_one("X-Service-Key") {
            Some(key) if key == auth_config.settings().service_key => {
                Outcome::Success(ServiceAuth)
            }
            Some(_) => {
                warn!("Rejected admin request with wrong service key");
                Outcome::Error((Status::Forbidden, AuthError::TokenVerificationFailed))
            }
            None => Outcome::Error((Status::Unauthorized, AuthError::MissingToken)),
        }
    }
}
