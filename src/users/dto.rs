use serde::{Deserialize, Serialize};

use crate::users::repo::User;

/// Request body for POST /users.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request body for PUT /users/:id; any subset of fields may be supplied.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Response for POST /users.
#[derive(Debug, Serialize)]
pub struct UserCreatedResponse {
    pub user: User,
    pub message: String,
}

/// Response for PUT /users/:id. The camelCase key matches the wire format
/// clients already depend on.
#[derive(Debug, Serialize)]
pub struct UserUpdatedResponse {
    #[serde(rename = "updatedUser")]
    pub updated_user: User,
    pub message: String,
}

/// Bare confirmation body, used by DELETE /users/:id.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
