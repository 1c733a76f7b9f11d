use crate::constants::DEFAULT_ACK_MESSAGE;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Login response; only the session id is consumed
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// User information block
    #[serde(rename = "userInfo")]
    pub user_info: LoginUserInfo,
}

/// User information returned by login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginUserInfo {
    /// Minted session token
    #[serde(rename = "sessionId")]
    pub session_id: String,
    /// Organization id
    #[serde(rename = "orgId", default)]
    pub org_id: Option<String>,
    /// Login name
    #[serde(default)]
    pub name: Option<String>,
}

/// One entry of a path lookup request
#[derive(Debug, Clone, Serialize)]
pub struct LookupRequestItem {
    /// Object path
    pub path: String,
    /// Object type
    #[serde(rename = "type")]
    pub object_type: String,
}

/// Path lookup request body
#[derive(Debug, Clone, Serialize)]
pub struct LookupRequest {
    /// Objects to look up
    pub objects: Vec<LookupRequestItem>,
}

impl LookupRequest {
    /// Lookup of a single path
    pub fn single(path: impl Into<String>, object_type: impl Into<String>) -> Self {
        Self {
            objects: vec![LookupRequestItem {
                path: path.into(),
                object_type: object_type.into(),
            }],
        }
    }
}

/// Synthesized payload for a bodiless success
pub fn acknowledgement(message: Option<&str>) -> Value {
    json!({ "message": message.unwrap_or(DEFAULT_ACK_MESSAGE) })
}

/// Extracts the `id` field of an entity payload
pub fn entity_id(item: &Value) -> Option<String> {
    match item.get("id")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
