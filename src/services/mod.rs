//! Business logic services

pub mod auth;
pub mod books;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub books: books::BooksService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone(), auth_config),
            books: books::BooksService::new(repository),
        }
    }
}

/// Presence check shared by the request-body validations. Absent or blank
/// fields answer with the legacy "no content" outcome.
pub(crate) fn require_field(value: Option<String>) -> AppResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::Validation(
            "All input fields are mandatory.".to_string(),
        )),
    }
}
