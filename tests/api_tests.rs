//! API integration tests
//!
//! Run against a live server with a clean database:
//! cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};
use uuid::Uuid;

const BASE_URL: &str = "http://localhost:8000";

fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.com", prefix, Uuid::new_v4())
}

/// Sign up a fresh user with the given role tags and log them in.
/// Returns the bearer token and the user's identity key.
async fn signup_and_login(client: &Client, roles: &[&str]) -> (String, String) {
    let email = unique_email("user");

    let response = client
        .post(format!("{}/auth/v1/signup", BASE_URL))
        .json(&json!({
            "Name": "Test User",
            "Email": email,
            "Password": "secret",
            "Role": roles
        }))
        .send()
        .await
        .expect("Failed to send signup request");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/auth/v1/login", BASE_URL))
        .json(&json!({
            "Email": email,
            "Password": "secret"
        }))
        .send()
        .await
        .expect("Failed to send login request");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse login response");
    let token = body["Token"].as_str().expect("No token in response").to_string();
    let user_id = body["User"]["ID"].as_str().expect("No user ID in response").to_string();
    (token, user_id)
}

async fn create_book(client: &Client, token: &str) -> Value {
    let response = client
        .post(format!("{}/books", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "Title": "Test Book",
            "Author": "Test Author",
            "Category": "Fiction"
        }))
        .send()
        .await
        .expect("Failed to send create request");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse create response");
    body["Book"].clone()
}

#[tokio::test]
#[ignore]
async fn test_welcome() {
    let client = Client::new();

    let response = client
        .get(format!("{}/", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body = response.text().await.expect("Failed to read response");
    assert_eq!(body, "Welcome to library app server !");
}

#[tokio::test]
#[ignore]
async fn test_signup_and_login() {
    let client = Client::new();
    let (token, user_id) = signup_and_login(&client, &["CREATOR", "VIEWER"]).await;
    assert!(!token.is_empty());
    assert!(!user_id.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_duplicate_signup_conflict() {
    let client = Client::new();
    let email = unique_email("dup");
    let payload = json!({
        "Name": "Test User",
        "Email": email,
        "Password": "secret",
        "Role": ["VIEWER"]
    });

    let response = client
        .post(format!("{}/auth/v1/signup", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/auth/v1/signup", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["Message"], "Email already registered");
}

#[tokio::test]
#[ignore]
async fn test_signup_missing_field() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/v1/signup", BASE_URL))
        .json(&json!({
            "Name": "Test User",
            "Email": unique_email("incomplete"),
            "Role": ["VIEWER"]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_login_wrong_password() {
    let client = Client::new();
    let email = unique_email("wrongpw");

    let response = client
        .post(format!("{}/auth/v1/signup", BASE_URL))
        .json(&json!({
            "Name": "Test User",
            "Email": email,
            "Password": "secret",
            "Role": []
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/auth/v1/login", BASE_URL))
        .json(&json!({
            "Email": email,
            "Password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["Message"], "Invalid Password");
}

#[tokio::test]
#[ignore]
async fn test_login_unknown_email() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/v1/login", BASE_URL))
        .json(&json!({
            "Email": unique_email("nobody"),
            "Password": "secret"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["Message"], "Email address not registered, please signup.");
}

#[tokio::test]
#[ignore]
async fn test_unauthenticated_access() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_tampered_token_rejected() {
    let client = Client::new();
    let (token, _) = signup_and_login(&client, &["VIEW_ALL"]).await;

    let mut tampered = token.clone();
    tampered.pop();
    tampered.push(if token.ends_with('A') { 'B' } else { 'A' });

    let response = client
        .get(format!("{}/books", BASE_URL))
        .header("Authorization", format!("Bearer {}", tampered))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_mutations_denied_without_creator_role() {
    let client = Client::new();
    let (token, _) = signup_and_login(&client, &["VIEWER", "VIEW_ALL"]).await;

    // Create
    let response = client
        .post(format!("{}/books", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "Title": "Test Book",
            "Author": "Test Author",
            "Category": "Fiction"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 401);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["Message"], "Not authorized");

    // Update
    let response = client
        .patch(format!("{}/books/update/{}", BASE_URL, Uuid::new_v4()))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "Title": "New Title" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 401);

    // Delete
    let response = client
        .delete(format!("{}/books/delete/{}", BASE_URL, Uuid::new_v4()))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_create_forces_creator_id() {
    let client = Client::new();
    let (token, user_id) = signup_and_login(&client, &["CREATOR"]).await;

    let response = client
        .post(format!("{}/books", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "Title": "Test Book",
            "Author": "Test Author",
            "Category": "Fiction",
            "CreatorID": "someone-else"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["Book"]["CreatorID"], user_id.as_str());
}

#[tokio::test]
#[ignore]
async fn test_create_missing_author() {
    let client = Client::new();
    let (token, _) = signup_and_login(&client, &["CREATOR"]).await;

    let response = client
        .post(format!("{}/books", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "Title": "Test Book",
            "Category": "Fiction"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_double_delete_stays_200() {
    let client = Client::new();
    let (token, _) = signup_and_login(&client, &["CREATOR"]).await;
    let book = create_book(&client, &token).await;
    let book_id = book["ID"].as_str().expect("No book ID");

    let response = client
        .delete(format!("{}/books/delete/{}", BASE_URL, book_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["Book"].is_object());

    let response = client
        .delete(format!("{}/books/delete/{}", BASE_URL, book_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["Book"].is_null());
}

#[tokio::test]
#[ignore]
async fn test_missing_book_is_null_not_404() {
    let client = Client::new();
    let (token, _) = signup_and_login(&client, &["CREATOR"]).await;

    let response = client
        .get(format!("{}/books/singlebook/{}", BASE_URL, Uuid::new_v4()))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["Book"].is_null());
}

#[tokio::test]
#[ignore]
async fn test_update_book() {
    let client = Client::new();
    let (token, _) = signup_and_login(&client, &["CREATOR"]).await;
    let book = create_book(&client, &token).await;
    let book_id = book["ID"].as_str().expect("No book ID");

    let response = client
        .patch(format!("{}/books/update/{}", BASE_URL, book_id))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "Title": "Updated Title" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["Message"], "Book updated");
    assert_eq!(body["Book"]["Title"], "Updated Title");
    // Untouched fields survive the patch
    assert_eq!(body["Book"]["Author"], "Test Author");
}

#[tokio::test]
#[ignore]
async fn test_creator_listing_empty_for_unknown_uid() {
    let client = Client::new();
    let (token, _) = signup_and_login(&client, &["VIEWER"]).await;

    let response = client
        .get(format!("{}/books/{}", BASE_URL, Uuid::new_v4()))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["Books"], json!([]));
}

#[tokio::test]
#[ignore]
async fn test_creator_listing_requires_viewer_role() {
    let client = Client::new();
    let (token, user_id) = signup_and_login(&client, &["CREATOR", "VIEW_ALL"]).await;

    let response = client
        .get(format!("{}/books/{}", BASE_URL, user_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_time_window_flags() {
    let client = Client::new();
    let (token, _) = signup_and_login(&client, &["CREATOR", "VIEW_ALL"]).await;
    let book = create_book(&client, &token).await;
    let book_id = book["ID"].as_str().expect("No book ID");

    let contains_book = |body: &Value| {
        body["Books"]
            .as_array()
            .expect("Books is not an array")
            .iter()
            .any(|b| b["ID"] == book_id)
    };

    // A freshly created book is within the 10-minute window
    let response = client
        .get(format!("{}/books?New=1", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(contains_book(&body));

    // And absent from the old side of the cutoff
    let response = client
        .get(format!("{}/books?Old=1", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(!contains_book(&body));

    // With both flags set only the Old filter is observed
    let response = client
        .get(format!("{}/books?New=1&Old=1", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(!contains_book(&body));

    // Cleanup
    let _ = client
        .delete(format!("{}/books/delete/{}", BASE_URL, book_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_list_all_requires_view_all_role() {
    let client = Client::new();
    let (token, _) = signup_and_login(&client, &["VIEWER", "CREATOR"]).await;

    let response = client
        .get(format!("{}/books", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}
