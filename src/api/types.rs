use serde::{Deserialize, Serialize};

use crate::core::user::User;

/// Payload accepted by the create and edit commit endpoints.
///
/// Every field is optional on the wire; no validation is applied. The edit
/// endpoint takes the record id from the request path, so an id carried in
/// this payload is ignored there.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct UserForm {
    #[serde(default)]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserForm {
    pub fn into_user(self) -> User {
        User::new(self.id, self.name, self.email)
    }
}

/// User view model returned by the list, detail, and search endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Search request parameters
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Name fragment to match; an absent or blank value yields no results
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}
