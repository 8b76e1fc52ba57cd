//! Book domain methods on Repository

use chrono::Utc;
use uuid::Uuid;

use super::Repository;
use crate::{
    error::AppResult,
    models::book::{Book, TimeWindow, UpdateBook},
};

impl Repository {
    /// Insert a new book, stamping the creation instant
    pub async fn books_insert(
        &self,
        title: &str,
        author: &str,
        category: &str,
        creator_id: &str,
    ) -> AppResult<Book> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (id, title, author, category, created_time, creator_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(title)
        .bind(author)
        .bind(category)
        .bind(Utc::now())
        .bind(creator_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Scan books, optionally filtered to one side of the time-window cutoff
    pub async fn books_find(&self, window: Option<TimeWindow>) -> AppResult<Vec<Book>> {
        let books = match window {
            None => {
                sqlx::query_as::<_, Book>("SELECT * FROM books")
                    .fetch_all(&self.pool)
                    .await?
            }
            Some(window) => {
                let cutoff = TimeWindow::cutoff(Utc::now());
                let query = match window {
                    TimeWindow::New => "SELECT * FROM books WHERE created_time >= $1",
                    TimeWindow::Old => "SELECT * FROM books WHERE created_time < $1",
                };
                sqlx::query_as::<_, Book>(query)
                    .bind(cutoff)
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(books)
    }

    /// List books by creator id. An unknown creator yields an empty list.
    pub async fn books_find_by_creator(&self, creator_id: &str) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE creator_id = $1")
            .bind(creator_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(books)
    }

    /// Look up a book by primary key
    pub async fn books_find_by_id(&self, id: Uuid) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(book)
    }

    /// Apply a patch and return the post-update record, or None if the id
    /// does not exist. An empty patch degenerates to a lookup.
    pub async fn books_update(&self, id: Uuid, data: &UpdateBook) -> AppResult<Option<Book>> {
        let mut sets = Vec::new();
        let mut idx = 1;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.title, "title");
        add_field!(data.author, "author");
        add_field!(data.category, "category");

        if sets.is_empty() {
            return self.books_find_by_id(id).await;
        }

        let query = format!(
            "UPDATE books SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, Book>(&query);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.title);
        bind_field!(data.author);
        bind_field!(data.category);

        let book = builder.bind(id).fetch_optional(&self.pool).await?;
        Ok(book)
    }

    /// Physically remove a book, returning the removed record, or None if
    /// the id does not exist
    pub async fn books_delete(&self, id: Uuid) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>("DELETE FROM books WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(book)
    }
}
