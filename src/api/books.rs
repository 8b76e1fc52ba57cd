//! Book catalog endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::book::{Book, BookQuery, CreateBook, UpdateBook},
    models::user::Role,
};

use super::AuthenticatedUser;

/// Single-book response. A missing record still answers 200 with a null
/// book, matching the legacy API.
#[derive(Serialize, ToSchema)]
pub struct BookResponse {
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "Book")]
    pub book: Option<Book>,
}

/// Full catalog listing response
#[derive(Serialize, ToSchema)]
pub struct BooksResponse {
    #[serde(rename = "Books")]
    pub books: Vec<Book>,
}

/// Per-creator listing response
#[derive(Serialize, ToSchema)]
pub struct CreatorBooksResponse {
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "Books")]
    pub books: Vec<Book>,
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    security(("bearer_auth" = [])),
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = BookResponse),
        (status = 204, description = "All input fields are mandatory"),
        (status = 401, description = "Not authorized", body = crate::error::ErrorResponse),
        (status = 500, description = "Internal error", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(payload): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<BookResponse>)> {
    state.services.auth.require_role(claims.sub, Role::Creator).await?;

    let book = state.services.books.create(claims.sub, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(BookResponse {
            message: "Book added successfully.".to_string(),
            book: Some(book),
        }),
    ))
}

/// List all books, optionally filtered by the New/Old time-window flags
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    security(("bearer_auth" = [])),
    params(BookQuery),
    responses(
        (status = 200, description = "List of books", body = BooksResponse),
        (status = 401, description = "Not authorized", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<BooksResponse>> {
    state.services.auth.require_role(claims.sub, Role::ViewAll).await?;

    let books = state.services.books.list(&query).await?;
    Ok(Json(BooksResponse { books }))
}

/// List the books of a specific creator
#[utoipa::path(
    get,
    path = "/books/{uid}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(
        ("uid" = String, Path, description = "Creator user ID")
    ),
    responses(
        (status = 200, description = "Books of the creator (possibly empty)", body = CreatorBooksResponse),
        (status = 401, description = "Not authorized", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_creator_books(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(uid): Path<String>,
) -> AppResult<Json<CreatorBooksResponse>> {
    state.services.auth.require_role(claims.sub, Role::Viewer).await?;

    let books = state.services.books.list_by_creator(&uid).await?;
    Ok(Json(CreatorBooksResponse {
        message: format!("Books of {}", uid),
        books,
    }))
}

/// Get a single book by ID
#[utoipa::path(
    get,
    path = "/books/singlebook/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details, null when absent", body = BookResponse),
        (status = 401, description = "Not authorized", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_single_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<BookResponse>> {
    state.services.auth.require_role(claims.sub, Role::Creator).await?;

    let book = state.services.books.get(id).await?;
    Ok(Json(BookResponse {
        message: format!("Book {}", id),
        book,
    }))
}

/// Update a book
#[utoipa::path(
    patch,
    path = "/books/update/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Book ID")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Post-update book, null when absent", body = BookResponse),
        (status = 401, description = "Not authorized", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBook>,
) -> AppResult<Json<BookResponse>> {
    state.services.auth.require_role(claims.sub, Role::Creator).await?;

    let book = state.services.books.update(id, payload).await?;
    Ok(Json(BookResponse {
        message: "Book updated".to_string(),
        book,
    }))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/delete/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Removed book, null when already absent", body = BookResponse),
        (status = 401, description = "Not authorized", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<BookResponse>> {
    state.services.auth.require_role(claims.sub, Role::Creator).await?;

    let book = state.services.books.delete(id).await?;
    Ok(Json(BookResponse {
        message: "Book deleted".to_string(),
        book,
    }))
}
