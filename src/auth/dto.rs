use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for signup.
///
/// Consent flags arrive as whatever the front-end sends (`true`, `"on"`, `1`,
/// ...) and are coerced to booleans by truthiness.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub marketing_email: Option<Value>,
    pub marketing_sms: Option<Value>,
    pub xfer_agree: Option<Value>,
}

/// Request body for login.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Response returned after signup.
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub ok: bool,
    pub email: String,
    pub name: String,
}

/// Response returned after login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub ok: bool,
    pub email: String,
    pub name: String,
    pub token: String,
}
