//! User domain methods on Repository

use uuid::Uuid;

use super::Repository;
use crate::{
    error::AppResult,
    models::user::{Role, User, UserRow},
};

impl Repository {
    /// Find a user by email (exact match)
    pub async fn users_find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(User::from))
    }

    /// Find a user by its identity key
    pub async fn users_find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(User::from))
    }

    /// Insert a new user. The password must already be hashed.
    pub async fn users_insert(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
        roles: &[Role],
    ) -> AppResult<User> {
        let tags: Vec<String> = roles.iter().map(|r| r.as_str().to_string()).collect();
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, name, email, password, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(tags)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }
}
