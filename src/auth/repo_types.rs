use serde::{Deserialize, Serialize};

/// User record kept in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String, // unique key, compared case-sensitively
    #[serde(skip_serializing)]
    pub password: String, // plaintext, never exposed in JSON
    pub marketing_email: bool,
    pub marketing_sms: bool,
    pub xfer_agree: bool,
}
