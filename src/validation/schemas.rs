//! Per-endpoint schema registry
//!
//! One immutable schema per input source, built on first use and shared for
//! the life of the process. Message strings are part of the API contract.

use once_cell::sync::Lazy;
use serde_json::Value;
use uuid::Uuid;

use super::{validate_value, Field, Rule, Schema};
use crate::error::AppError;

pub static CREATE_SESSION: Lazy<Schema> = Lazy::new(|| {
    Schema::new()
        .field(
            Field::new("email")
                .required("provide a valid email")
                .email("provide a valid email"),
        )
        .field(
            Field::new("password")
                .required("provide a valid format for the password")
                .string("provide a valid format for the password"),
        )
});

pub static CREATE_USER: Lazy<Schema> = Lazy::new(|| {
    Schema::new()
        .field(
            Field::new("name")
                .required("the user name must have at least 2 characters")
                .min_length(2, "the user name must have at least 2 characters")
                .max_length(32, "the user name must have less than 32 characters"),
        )
        .field(
            Field::new("surname")
                .required("the surname must have at least 2 characters")
                .min_length(2, "the surname must have at least 2 characters")
                .max_length(40, "the surname must have less than 40 characters"),
        )
        .field(
            Field::new("email")
                .required("the user email must be a valid email address")
                .email("the user email must be a valid email address"),
        )
        .field(
            Field::new("password")
                .required("the user password must have at least 6 characters")
                .min_length(6, "the user password must have at least 6 characters"),
        )
});

/// Same shape as [`CREATE_USER`] without the password: credentials are not
/// updatable through the user resource.
pub static UPDATE_USER: Lazy<Schema> = Lazy::new(|| {
    Schema::new()
        .field(
            Field::new("name")
                .required("the user name must have at least 2 characters")
                .min_length(2, "the user name must have at least 2 characters")
                .max_length(32, "the user name must have less than 32 characters"),
        )
        .field(
            Field::new("surname")
                .required("the surname must have at least 2 characters")
                .min_length(2, "the surname must have at least 2 characters")
                .max_length(40, "the surname must have less than 40 characters"),
        )
        .field(
            Field::new("email")
                .required("the user email must be a valid email address")
                .email("the user email must be a valid email address"),
        )
});

pub static CREATE_CATEGORY: Lazy<Schema> = Lazy::new(|| {
    Schema::new().field(
        Field::new("name")
            .required("the category name must have at least 2 characters")
            .min_length(2, "the category name must have at least 2 characters")
            .max_length(32, "the category name must have less than 32 characters"),
    )
});

pub static CREATE_PUBLISHER: Lazy<Schema> = Lazy::new(|| {
    Schema::new()
        .field(
            Field::new("name")
                .required("the publisher name must have at least 2 characters")
                .min_length(2, "the publisher name must have at least 2 characters")
                .max_length(32, "the publisher name must have less than 32 characters"),
        )
        .field(
            Field::new("address")
                .required("the address is required")
                .min_length(1, "the address is required")
                .max_length(255, "the address must have less than 255 characters"),
        )
        .field(
            Field::new("cellphone")
                .required("the cellphone is required")
                .min_length(1, "the cellphone is required")
                .max_length(24, "the cellphone must have less than 24 characters"),
        )
});

/// Book create and update accept the same full payload.
pub static BOOK_PAYLOAD: Lazy<Schema> = Lazy::new(|| {
    Schema::new()
        .field(
            Field::new("title")
                .required("the book title must have at least 1 character")
                .min_length(1, "the book title must have at least 1 character")
                .max_length(56, "the book title must have less than 56 characters"),
        )
        .field(
            Field::new("summary")
                .required("the book summary must have at least 1 character")
                .min_length(1, "the book summary must have at least 1 character")
                .max_length(255, "the book summary must have less than 255 characters"),
        )
        .field(
            Field::new("year")
                .required("the year must be an integer")
                .integer("the year must be an integer")
                .min(1000, "the year must be at least 1000")
                .max_current_year("the year cannot be in the future"),
        )
        .field(
            Field::new("pages")
                .required("the number of pages must be an integer")
                .integer("the number of pages must be an integer")
                .min(1, "the book must have at least 1 page"),
        )
        .field(
            Field::new("isbn")
                .required("the ISBN must be exactly 13 characters")
                .length(13, "the ISBN must be exactly 13 characters")
                .matches(r"^\d{13}$", "the ISBN must consist of exactly 13 digits"),
        )
        .field(
            Field::new("author_id")
                .required("the author id must be a valid UUID")
                .uuid_v4("the author id must be a valid UUID"),
        )
        .field(
            Field::new("publisher_id")
                .required("the publisher id must be a valid UUID")
                .uuid_v4("the publisher id must be a valid UUID"),
        )
        .field(
            Field::new("category_id")
                .required("the category id must be a valid UUID")
                .uuid_v4("the category id must be a valid UUID"),
        )
});

/// Validates a UUID-v4 path parameter, reporting `message` on any failure.
pub fn uuid_param(raw: &str, message: &'static str) -> Result<Uuid, AppError> {
    let rules = [Rule::UuidV4(message)];
    validate_value(&rules, &Value::String(raw.to_string()))
        .map_err(|msg| AppError::Validation(vec![msg]))?;

    Uuid::try_parse(raw).map_err(|_| AppError::Validation(vec![message.to_string()]))
}
