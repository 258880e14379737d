//! Business logic services

pub mod books;
pub mod categories;
pub mod error_log;
pub mod publishers;
pub mod sessions;
pub mod users;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub sessions: sessions::SessionsService,
    pub users: users::UsersService,
    pub categories: categories::CategoriesService,
    pub publishers: publishers::PublishersService,
    pub books: books::BooksService,
    pub error_log: error_log::ErrorLog,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            sessions: sessions::SessionsService::new(repository.clone(), auth_config),
            users: users::UsersService::new(repository.clone()),
            categories: categories::CategoriesService::new(repository.clone()),
            publishers: publishers::PublishersService::new(repository.clone()),
            books: books::BooksService::new(repository),
            error_log: error_log::ErrorLog::with_capacity(1024),
        }
    }
}
