use crate::auth::dto::{LoginRequest, SignupRequest};
use crate::auth::repo::UserStore;
use crate::auth::repo_types::User;
use crate::error::{AppError, Result};
use crate::utils::{is_truthy, unix_millis};
use serde_json::Value;
use tracing::debug;

/// Returns the field's value, or a validation error when it is absent or empty.
fn require(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!("{} is required", field))),
    }
}

fn flag(value: Option<&Value>) -> bool {
    value.map(is_truthy).unwrap_or(false)
}

/// Session token handed out on login. Never stored or checked.
pub fn mint_token() -> String {
    let token = format!("demo-token-{}", unix_millis());
    debug!(%token, "token minted");
    token
}

pub async fn signup(store: &dyn UserStore, req: SignupRequest) -> Result<User> {
    let name = require(req.name, "name")?;
    let email = require(req.email, "email")?;
    let password = require(req.password, "password")?;

    let user = User {
        name,
        email,
        password,
        marketing_email: flag(req.marketing_email.as_ref()),
        marketing_sms: flag(req.marketing_sms.as_ref()),
        xfer_agree: flag(req.xfer_agree.as_ref()),
    };

    let inserted = store
        .insert_if_absent(user.clone())
        .await
        .map_err(|e| AppError::internal("signup failed", e))?;
    if !inserted {
        return Err(AppError::Conflict("Email already registered".into()));
    }
    Ok(user)
}

/// Returns the matching user and a fresh token. Unknown email and wrong
/// password produce the same error.
pub async fn login(store: &dyn UserStore, req: LoginRequest) -> Result<(User, String)> {
    let email = require(req.email, "email")?;
    let password = require(req.password, "password")?;

    let user = store
        .find_by_email(&email)
        .await
        .map_err(|e| AppError::internal("login failed", e))?
        .filter(|u| u.password == password)
        .ok_or(AppError::InvalidCredentials)?;

    Ok((user, mint_token()))
}
