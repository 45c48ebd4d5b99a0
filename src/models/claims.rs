//! JWT claim set embedded in issued bearer tokens.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The payload of an issued token.
///
/// # Claims
///
/// - `sid`: stable identity id of the user
/// - `sub`: username (subject name)
/// - `jti`: fresh random token identifier, unique per issued token
/// - `unique_name`: display name, equal to the username
/// - `email`, `given_name`, `family_name`: profile claims; the family name
///   is an empty string when the user has no last name
/// - `roles`: assigned role names, zero or more
/// - `nbf` / `exp`: validity window; `exp` is always strictly after `nbf`
///   by the configured expiration minutes
/// - `iss` / `aud`: issuer and audience from configuration
/// - any supplemental claims stored for the identity, flattened verbatim
///   into the payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sid: Uuid,

    pub sub: String,

    pub jti: Uuid,

    pub unique_name: String,

    pub email: String,

    pub given_name: String,

    pub family_name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,

    pub nbf: i64,

    pub exp: i64,

    pub iss: String,

    pub aud: String,

    /// Supplemental claims, serialized as additional top-level fields
    #[serde(flatten, default, skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, serde_json::Value>,
}
