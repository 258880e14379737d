//! API integration tests
//!
//! Run against a live server with a clean database:
//! `PORT=8080 cargo run` then `cargo test -- --ignored`.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api";

fn unique_email(prefix: &str) -> String {
    format!("{}+{}@example.com", prefix, uuid_like())
}

fn uuid_like() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    format!("{:x}", nanos)
}

/// Register a user and open a session, returning the bearer token.
async fn get_auth_token(client: &Client) -> String {
    let email = unique_email("tester");

    let response = client
        .post(format!("{}/users", BASE_URL))
        .json(&json!({
            "name": "Test",
            "surname": "Librarian",
            "email": email,
            "password": "secret123"
        }))
        .send()
        .await
        .expect("Failed to create user");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/sessions", BASE_URL))
        .json(&json!({
            "email": email,
            "password": "secret123"
        }))
        .send()
        .await
        .expect("Failed to create session");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse session");
    body["access_token"]
        .as_str()
        .expect("No access_token in response")
        .to_string()
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_protected_route_requires_token() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["errors"], json!(["no token was provided"]));
}

#[tokio::test]
#[ignore]
async fn test_garbage_token_is_unauthorized() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books", BASE_URL))
        .header("Authorization", "Bearer not-a-token")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["errors"], json!(["unauthorized"]));
}

#[tokio::test]
#[ignore]
async fn test_session_with_bad_credentials() {
    let client = Client::new();

    let response = client
        .post(format!("{}/sessions", BASE_URL))
        .json(&json!({
            "email": "nobody@example.com",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["errors"],
        json!(["user/password combination does not match"])
    );
}

#[tokio::test]
#[ignore]
async fn test_invalid_user_payload_reports_one_message_per_field() {
    let client = Client::new();

    // name too short, email invalid, password too short, surname missing
    let response = client
        .post(format!("{}/users", BASE_URL))
        .json(&json!({
            "name": "x",
            "email": "not-an-email",
            "password": "abc"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    let errors = body["errors"].as_array().expect("errors array");
    assert_eq!(errors.len(), 4);
}

#[tokio::test]
#[ignore]
async fn test_duplicate_email_is_rejected() {
    let client = Client::new();
    let email = unique_email("dup");

    let payload = json!({
        "name": "First",
        "surname": "Caller",
        "email": email,
        "password": "secret123"
    });

    let response = client
        .post(format!("{}/users", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    // Created user never exposes the password
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.get("password").is_none());

    let response = client
        .post(format!("{}/users", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["errors"], json!(["email is already in use"]));
}

#[tokio::test]
#[ignore]
async fn test_get_user_with_bad_id_format() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .get(format!("{}/users/not-a-uuid", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["errors"], json!(["the user id must be a valid UUID"]));
}

#[tokio::test]
#[ignore]
async fn test_category_duplicate_is_case_insensitive() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let name = format!("Fiction-{}", uuid_like());

    let response = client
        .post(format!("{}/categories", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/categories", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "name": name.to_uppercase() }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["errors"], json!(["category already exists"]));
}

/// Creates an author, a publisher and a category, returning their ids.
async fn create_book_fixtures(client: &Client, token: &str) -> (String, String, String) {
    let author = client
        .post(format!("{}/users", BASE_URL))
        .json(&json!({
            "name": "Frank",
            "surname": "Herbert",
            "email": unique_email("author"),
            "password": "secret123"
        }))
        .send()
        .await
        .expect("Failed to create author");
    assert_eq!(author.status(), 201);
    let author: Value = author.json().await.expect("author body");

    let publisher = client
        .post(format!("{}/publishers", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "name": format!("Chilton-{}", uuid_like()),
            "address": "1 Main Street",
            "cellphone": "555-0100"
        }))
        .send()
        .await
        .expect("Failed to create publisher");
    assert_eq!(publisher.status(), 201);
    let publisher: Value = publisher.json().await.expect("publisher body");

    let category = client
        .post(format!("{}/categories", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "name": format!("SF-{}", uuid_like()) }))
        .send()
        .await
        .expect("Failed to create category");
    assert_eq!(category.status(), 201);
    let category: Value = category.json().await.expect("category body");

    (
        author["id"].as_str().expect("author id").to_string(),
        publisher["id"].as_str().expect("publisher id").to_string(),
        category["id"].as_str().expect("category id").to_string(),
    )
}

fn thirteen_digit_isbn() -> String {
    let mut digits = uuid_like()
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect::<String>();
    while digits.len() < 13 {
        digits.push('9');
    }
    digits.truncate(13);
    digits
}

#[tokio::test]
#[ignore]
async fn test_book_lifecycle_with_include_flags() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let (author_id, publisher_id, category_id) = create_book_fixtures(&client, &token).await;
    let isbn = thirteen_digit_isbn();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "title": "Dune",
            "summary": "Desert planet",
            "year": 1965,
            "pages": 412,
            "isbn": isbn,
            "author_id": author_id,
            "publisher_id": publisher_id,
            "category_id": category_id
        }))
        .send()
        .await
        .expect("Failed to create book");
    assert_eq!(response.status(), 201);

    let book: Value = response.json().await.expect("book body");
    let book_id = book["id"].as_str().expect("book id").to_string();
    // Create responses embed the relations, author without a password
    assert!(book["author"].is_object());
    assert!(book["author"].get("password").is_none());

    // Plain get: no relations embedded
    let response = client
        .get(format!("{}/books/{}", BASE_URL, book_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to get book");
    assert_eq!(response.status(), 200);
    let fetched: Value = response.json().await.expect("book body");
    assert!(fetched.get("author").is_none());

    // include_author=1 embeds the author, still without a password
    let response = client
        .get(format!(
            "{}/books/{}?include_author=1",
            BASE_URL, book_id
        ))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to get book");
    let fetched: Value = response.json().await.expect("book body");
    assert!(fetched["author"].is_object());
    assert!(fetched["author"].get("password").is_none());
    assert!(fetched.get("publisher").is_none());

    // Updating the book with its own ISBN must not read as a duplicate
    let response = client
        .put(format!("{}/books/{}", BASE_URL, book_id))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "title": "Dune (revised)",
            "summary": "Desert planet",
            "year": 1965,
            "pages": 412,
            "isbn": isbn,
            "author_id": author_id,
            "publisher_id": publisher_id,
            "category_id": category_id
        }))
        .send()
        .await
        .expect("Failed to update book");
    assert_eq!(response.status(), 200);

    // Cleanup
    let response = client
        .delete(format!("{}/books/{}", BASE_URL, book_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to delete book");
    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_book_create_reports_first_failing_reference_only() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let (_, publisher_id, category_id) = create_book_fixtures(&client, &token).await;

    // The author id is a well-formed UUID that matches no user; the author
    // check fires before the publisher and category checks.
    let response = client
        .post(format!("{}/books", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "title": "Ghost Book",
            "summary": "No references",
            "year": 2000,
            "pages": 100,
            "isbn": thirteen_digit_isbn(),
            "author_id": "00000000-0000-4000-8000-000000000000",
            "publisher_id": publisher_id,
            "category_id": category_id
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["errors"], json!(["author not found"]));
}

#[tokio::test]
#[ignore]
async fn test_publisher_with_books_cannot_be_deleted() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let (author_id, publisher_id, category_id) = create_book_fixtures(&client, &token).await;

    let response = client
        .post(format!("{}/books", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "title": "Anchor",
            "summary": "Keeps the publisher alive",
            "year": 2001,
            "pages": 222,
            "isbn": thirteen_digit_isbn(),
            "author_id": author_id,
            "publisher_id": publisher_id,
            "category_id": category_id
        }))
        .send()
        .await
        .expect("Failed to create book");
    assert_eq!(response.status(), 201);

    let response = client
        .delete(format!("{}/publishers/{}", BASE_URL, publisher_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["errors"],
        json!(["you cannot delete a publisher that has books associated with it"])
    );

    // The publisher is still there
    let response = client
        .get(format!("{}/publishers", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to list publishers");
    let publishers: Value = response.json().await.expect("publishers body");
    assert!(publishers
        .as_array()
        .expect("array")
        .iter()
        .any(|p| p["id"] == json!(publisher_id)));
}

#[tokio::test]
#[ignore]
async fn test_unknown_log_id_is_not_found() {
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/logs/00000000-0000-4000-8000-000000000000",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["errors"], json!(["log not found"]));
}
