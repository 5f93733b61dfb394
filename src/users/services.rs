use tracing::warn;
use uuid::Uuid;

use crate::error::ApiError;
use crate::users::dto::{CreateUserRequest, MessageResponse, UpdateUserRequest};
use crate::users::password::hash_password;
use crate::users::repo::{NewUser, User, UserChanges, UserStore};

/// Create a user after checking the email is not already taken. The plaintext
/// password is hashed here, never handed to the store.
pub async fn create_user(store: &dyn UserStore, req: CreateUserRequest) -> Result<User, ApiError> {
    if store.find_by_email(&req.email).await?.is_some() {
        warn!(email = %req.email, "email already registered");
        return Err(ApiError::Conflict("User already exists".into()));
    }

    let digest = hash_password(&req.password)?;
    let user = store
        .insert(NewUser {
            name: req.name,
            email: req.email,
            password: digest,
        })
        .await?;
    Ok(user)
}

pub async fn get_user_by_id(store: &dyn UserStore, id: Uuid) -> Result<User, ApiError> {
    match store.find_by_id(id).await? {
        Some(user) => Ok(user),
        None => {
            warn!(user_id = %id, "user not found");
            Err(ApiError::NotFound("User not found".into()))
        }
    }
}

/// Full scan. An empty table is an empty vec, not an error.
pub async fn get_all_users(store: &dyn UserStore) -> Result<Vec<User>, ApiError> {
    let users = store.list().await?;
    Ok(users)
}

/// Partial update: only supplied fields change. A supplied password is
/// re-hashed here, mirroring create; the store only ever sees digests.
pub async fn update_user(
    store: &dyn UserStore,
    id: Uuid,
    req: UpdateUserRequest,
) -> Result<User, ApiError> {
    if store.find_by_id(id).await?.is_none() {
        warn!(user_id = %id, "user not found");
        return Err(ApiError::NotFound("User not found".into()));
    }

    let password = match req.password {
        Some(plain) => Some(hash_password(&plain)?),
        None => None,
    };
    let user = store
        .update(
            id,
            UserChanges {
                name: req.name,
                email: req.email,
                password,
            },
        )
        .await?;
    Ok(user)
}

pub async fn delete_user(store: &dyn UserStore, id: Uuid) -> Result<MessageResponse, ApiError> {
    if store.find_by_id(id).await?.is_none() {
        warn!(user_id = %id, "user not found");
        return Err(ApiError::NotFound("User not found".into()));
    }

    store.delete(id).await?;
    Ok(MessageResponse {
        message: "User deleted successfully".into(),
    })
}
