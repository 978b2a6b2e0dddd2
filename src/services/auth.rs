//! Admin login: password check against the configured secret, producing a
//! signed session token. The session is an explicit value handed to
//! `actix-identity`; nothing here is process-global.

use validator::Validate;

use crate::SERVICE_ADMIN_ROLE;
use crate::forms::auth::LoginForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::services::{ServiceError, ServiceResult};

const SESSION_HOURS: i64 = 24;

/// Verifies the admin password and issues the session JWT.
pub fn login(form: &LoginForm, config: &ServerConfig) -> ServiceResult<String> {
    if form.validate().is_err() {
        return Err(ServiceError::Form("password is required".to_string()));
    }

    if form.password != config.admin_password {
        return Err(ServiceError::Unauthorized);
    }

    let user = AuthenticatedUser::new(
        "admin",
        vec![SERVICE_ADMIN_ROLE.to_string()],
        SESSION_HOURS,
    );

    user.to_jwt(&config.secret)
        .map_err(|err| ServiceError::Internal(format!("failed to sign session token: {err}")))
}
