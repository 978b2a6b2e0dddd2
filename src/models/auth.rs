//! Admin session model.
//!
//! The session is an explicit object: logging in issues a signed JWT stored
//! through `actix-identity`, and every handler that needs the session takes
//! an [`AuthenticatedUser`] extractor argument. There is no ambient global
//! login state.

use std::future::{Ready, ready};

use actix_identity::Identity;
use actix_web::error::{ErrorInternalServerError, ErrorUnauthorized};
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::models::config::ServerConfig;

/// Claims carried by the admin session token.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Subject, the login name of the session holder.
    pub sub: String,
    pub roles: Vec<String>,
    /// Expiry as a unix timestamp, validated on every request.
    pub exp: usize,
}

impl AuthenticatedUser {
    pub fn new(sub: impl Into<String>, roles: Vec<String>, valid_for_hours: i64) -> Self {
        let exp = chrono::Utc::now() + chrono::Duration::hours(valid_for_hours);
        Self {
            sub: sub.into(),
            roles,
            exp: exp.timestamp() as usize,
        }
    }

    pub fn to_jwt(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    pub fn from_jwt(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        let data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(data.claims)
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let identity = match Identity::from_request(req, payload).into_inner() {
            Ok(identity) => identity,
            Err(_) => return ready(Err(ErrorUnauthorized("not signed in"))),
        };

        let token = match identity.id() {
            Ok(token) => token,
            Err(_) => return ready(Err(ErrorUnauthorized("session has no token"))),
        };

        let Some(config) = req.app_data::<web::Data<ServerConfig>>() else {
            return ready(Err(ErrorInternalServerError("server config missing")));
        };

        match Self::from_jwt(&token, &config.secret) {
            Ok(user) => ready(Ok(user)),
            Err(_) => ready(Err(ErrorUnauthorized("invalid session token"))),
        }
    }
}
