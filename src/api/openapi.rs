//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, categories, health, logs, publishers, sessions, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Folio API",
        version = "0.3.0",
        description = "Library Catalog REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api", description = "API")
    ),
    paths(
        // Health
        health::health_check,
        // Sessions
        sessions::create_session,
        // Users
        users::create_user,
        users::list_users,
        users::get_user,
        users::update_user,
        users::delete_user,
        // Categories
        categories::list_categories,
        categories::create_category,
        categories::delete_category,
        // Publishers
        publishers::list_publishers,
        publishers::create_publisher,
        publishers::delete_publisher,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Logs
        logs::get_log,
    ),
    components(
        schemas(
            // Sessions
            crate::models::session::CreateSession,
            crate::models::session::SessionResponse,
            // Users
            crate::models::user::User,
            crate::models::user::CreateUser,
            crate::models::user::UpdateUser,
            // Categories
            crate::models::category::Category,
            crate::models::category::CreateCategory,
            // Publishers
            crate::models::publisher::Publisher,
            crate::models::publisher::CreatePublisher,
            // Books
            crate::models::book::Book,
            crate::models::book::BookAuthor,
            crate::models::book::BookPayload,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorEnvelope,
        )
    ),
    tags(
        (name = "health", description = "Health check"),
        (name = "sessions", description = "Authentication sessions"),
        (name = "users", description = "User management"),
        (name = "categories", description = "Category management"),
        (name = "publishers", description = "Publisher management"),
        (name = "books", description = "Book catalog"),
        (name = "logs", description = "Internal error log retrieval")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
