//! User model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Capability tags granting access to book operations.
///
/// Tags are independent: `VIEW_ALL` gates the full catalog listing
/// separately from `VIEWER`, and neither implies `CREATOR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Role {
    #[serde(rename = "CREATOR")]
    Creator,
    #[serde(rename = "VIEWER")]
    Viewer,
    #[serde(rename = "VIEW_ALL")]
    ViewAll,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Creator => "CREATOR",
            Role::Viewer => "VIEWER",
            Role::ViewAll => "VIEW_ALL",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREATOR" => Ok(Role::Creator),
            "VIEWER" => Ok(Role::Viewer),
            "VIEW_ALL" => Ok(Role::ViewAll),
            _ => Err(format!("Invalid role tag: {}", s)),
        }
    }
}

/// Internal row structure for database queries (role tags as raw strings)
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    id: Uuid,
    name: String,
    email: String,
    password: String,
    role: Option<Vec<String>>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            name: row.name,
            email: row.email,
            password: row.password,
            // Tags that do not parse as a known capability grant nothing.
            role: row
                .role
                .map(|tags| tags.iter().filter_map(|t| t.parse().ok()).collect()),
        }
    }
}

/// Full user model from database
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Hashed password (argon2)
    #[serde(skip_serializing)]
    pub password: String,
    pub role: Option<Vec<Role>>,
}

impl User {
    /// Check for exact tag membership. An absent role set grants nothing.
    pub fn has_role(&self, required: Role) -> bool {
        self.role
            .as_ref()
            .map_or(false, |roles| roles.contains(&required))
    }
}

/// Signup request body. All fields are presence-checked by the service;
/// the role array must be present but may be empty.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CreateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Vec<Role>>,
}

/// Login request body
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct LoginUser {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// JWT Claims for authenticated users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Identity key of the authenticated user
    pub sub: Uuid,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    /// Create claims for a user, valid for the given number of hours
    pub fn new(user_id: Uuid, valid_hours: u64) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            sub: user_id,
            exp: now + valid_hours as i64 * 3600,
            iat: now,
        }
    }

    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }
}
