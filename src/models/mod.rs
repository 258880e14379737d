//! Data models for Folio

pub mod book;
pub mod category;
pub mod publisher;
pub mod session;
pub mod user;

// Re-export commonly used types
pub use book::{Book, BookAuthor, BookPayload};
pub use category::Category;
pub use publisher::Publisher;
pub use session::Claims;
pub use user::User;
