//! Authentication endpoints (signup and login)

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::user::{CreateUser, LoginUser, Role, User},
};

/// Generic message response
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    #[serde(rename = "Message")]
    pub message: String,
}

/// Public view of a user returned on login
#[derive(Serialize, ToSchema)]
pub struct UserInfo {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "ID")]
    pub id: Uuid,
    #[serde(rename = "Role")]
    pub role: Option<Vec<Role>>,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            name: user.name,
            email: user.email,
            id: user.id,
            role: user.role,
        }
    }
}

/// Login response with the issued bearer token
#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "User")]
    pub user: UserInfo,
    #[serde(rename = "Token")]
    pub token: String,
}

/// Create a new user account
#[utoipa::path(
    post,
    path = "/auth/v1/signup",
    tag = "auth",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = MessageResponse),
        (status = 204, description = "All input fields are mandatory"),
        (status = 409, description = "Email already registered", body = crate::error::ErrorResponse),
        (status = 500, description = "Internal error", body = crate::error::ErrorResponse)
    )
)]
pub async fn signup(
    State(state): State<crate::AppState>,
    Json(payload): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    state.services.auth.signup(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Signup successful.".to_string(),
        }),
    ))
}

/// Login with existing user credentials
#[utoipa::path(
    post,
    path = "/auth/v1/login",
    tag = "auth",
    request_body = LoginUser,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 204, description = "All input fields are mandatory"),
        (status = 401, description = "Invalid password", body = crate::error::ErrorResponse),
        (status = 404, description = "Email not registered", body = crate::error::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(payload): Json<LoginUser>,
) -> AppResult<Json<LoginResponse>> {
    let (token, user) = state.services.auth.login(payload).await?;

    Ok(Json(LoginResponse {
        message: "Login successful.".to_string(),
        user: user.into(),
        token,
    }))
}
