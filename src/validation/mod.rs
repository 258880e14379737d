//! Request validation pipeline
//!
//! Declarative schemas describe the expected shape of one input source
//! (a JSON body or a bare path parameter). Each field carries an ordered
//! rule chain; evaluation stops at the first violated rule *per field* but
//! every field is evaluated, so a single call can report one message per
//! invalid field. Schemas are built once at startup and are immutable; see
//! [`schemas`] for the per-endpoint registry.

pub mod schemas;

use chrono::{Datelike, Utc};
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use uuid::Uuid;
use validator::ValidateEmail;

use crate::error::AppError;

/// A single constraint with its human-readable message.
#[derive(Debug)]
pub enum Rule {
    /// Value must be a JSON string
    String(&'static str),
    /// Minimum length in characters
    MinLength(usize, &'static str),
    /// Maximum length in characters
    MaxLength(usize, &'static str),
    /// Exact length in characters
    ExactLength(usize, &'static str),
    /// Full regex match
    Matches(Regex, &'static str),
    /// RFC-compliant email address
    Email(&'static str),
    /// UUID version 4
    UuidV4(&'static str),
    /// Value must be an integer number
    Integer(&'static str),
    /// Minimum numeric value, inclusive
    Min(i64, &'static str),
    /// Maximum numeric value, inclusive
    Max(i64, &'static str),
    /// Maximum numeric value is the current calendar year
    MaxCurrentYear(&'static str),
}

impl Rule {
    /// Returns the rule's message when `value` violates it.
    fn check(&self, value: &Value) -> Option<&'static str> {
        match self {
            Rule::String(msg) => (!value.is_string()).then_some(*msg),
            Rule::MinLength(min, msg) => match value.as_str() {
                Some(s) if s.chars().count() >= *min => None,
                _ => Some(*msg),
            },
            Rule::MaxLength(max, msg) => match value.as_str() {
                Some(s) if s.chars().count() <= *max => None,
                _ => Some(*msg),
            },
            Rule::ExactLength(len, msg) => match value.as_str() {
                Some(s) if s.chars().count() == *len => None,
                _ => Some(*msg),
            },
            Rule::Matches(pattern, msg) => match value.as_str() {
                Some(s) if pattern.is_match(s) => None,
                _ => Some(*msg),
            },
            Rule::Email(msg) => match value.as_str() {
                Some(s) if s.validate_email() => None,
                _ => Some(*msg),
            },
            Rule::UuidV4(msg) => match value.as_str() {
                Some(s) => match Uuid::try_parse(s) {
                    Ok(id) if id.get_version_num() == 4 => None,
                    _ => Some(*msg),
                },
                None => Some(*msg),
            },
            Rule::Integer(msg) => value.as_i64().is_none().then_some(*msg),
            Rule::Min(min, msg) => match value.as_i64() {
                Some(n) if n >= *min => None,
                _ => Some(*msg),
            },
            Rule::Max(max, msg) => match value.as_i64() {
                Some(n) if n <= *max => None,
                _ => Some(*msg),
            },
            Rule::MaxCurrentYear(msg) => {
                let current_year = i64::from(Utc::now().year());
                match value.as_i64() {
                    Some(n) if n <= current_year => None,
                    _ => Some(*msg),
                }
            }
        }
    }
}

/// One declared field: a name, a required-message and an ordered rule chain.
#[derive(Debug)]
pub struct Field {
    name: &'static str,
    required: Option<&'static str>,
    rules: Vec<Rule>,
}

impl Field {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            required: None,
            rules: Vec::new(),
        }
    }

    /// Marks the field required; `message` is reported when it is absent.
    pub fn required(mut self, message: &'static str) -> Self {
        self.required = Some(message);
        self
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn string(self, message: &'static str) -> Self {
        self.rule(Rule::String(message))
    }

    pub fn min_length(self, min: usize, message: &'static str) -> Self {
        self.rule(Rule::MinLength(min, message))
    }

    pub fn max_length(self, max: usize, message: &'static str) -> Self {
        self.rule(Rule::MaxLength(max, message))
    }

    pub fn length(self, len: usize, message: &'static str) -> Self {
        self.rule(Rule::ExactLength(len, message))
    }

    pub fn matches(self, pattern: &str, message: &'static str) -> Self {
        let pattern = Regex::new(pattern).expect("valid pattern");
        self.rule(Rule::Matches(pattern, message))
    }

    pub fn email(self, message: &'static str) -> Self {
        self.rule(Rule::Email(message))
    }

    pub fn uuid_v4(self, message: &'static str) -> Self {
        self.rule(Rule::UuidV4(message))
    }

    pub fn integer(self, message: &'static str) -> Self {
        self.rule(Rule::Integer(message))
    }

    pub fn min(self, min: i64, message: &'static str) -> Self {
        self.rule(Rule::Min(min, message))
    }

    pub fn max(self, max: i64, message: &'static str) -> Self {
        self.rule(Rule::Max(max, message))
    }

    pub fn max_current_year(self, message: &'static str) -> Self {
        self.rule(Rule::MaxCurrentYear(message))
    }

    /// First violated rule's message, in declaration order.
    fn check(&self, value: &Value) -> Option<&'static str> {
        self.rules.iter().find_map(|rule| rule.check(value))
    }
}

/// Outcome of validating one input source. Never both.
#[derive(Debug)]
pub enum ValidationResult {
    /// Normalized value: declared fields only, unknown keys stripped.
    Valid(Value),
    /// One message per invalid field, in field declaration order.
    Invalid(Vec<String>),
}

/// Declarative shape of one input source.
#[derive(Debug)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Validates `input` against the schema.
    ///
    /// Pure function of (schema, input): no coercion beyond stripping
    /// undeclared keys, no trimming, no case normalization.
    pub fn validate(&self, input: &Value) -> ValidationResult {
        // A non-object body simply has no fields present.
        let empty = Map::new();
        let object = input.as_object().unwrap_or(&empty);

        let mut errors = Vec::new();
        let mut normalized = Map::new();

        for field in &self.fields {
            match object.get(field.name) {
                None | Some(Value::Null) => {
                    if let Some(message) = field.required {
                        errors.push(message.to_string());
                    }
                }
                Some(value) => match field.check(value) {
                    Some(message) => errors.push(message.to_string()),
                    None => {
                        normalized.insert(field.name.to_string(), value.clone());
                    }
                },
            }
        }

        if errors.is_empty() {
            ValidationResult::Valid(Value::Object(normalized))
        } else {
            ValidationResult::Invalid(errors)
        }
    }

    /// Validates `input` and deserializes the normalized value into `T`.
    pub fn parse<T: DeserializeOwned>(&self, input: &Value) -> Result<T, AppError> {
        match self.validate(input) {
            ValidationResult::Valid(value) => serde_json::from_value(value)
                .map_err(|e| AppError::Internal(format!("validated payload did not deserialize: {}", e))),
            ValidationResult::Invalid(errors) => Err(AppError::Validation(errors)),
        }
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}

/// Validates a bare scalar (a path parameter) against an ordered rule
/// chain. First violated rule wins.
pub fn validate_value(rules: &[Rule], value: &Value) -> Result<(), String> {
    match rules.iter().find_map(|rule| rule.check(value)) {
        Some(message) => Err(message.to_string()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn book_like_schema() -> Schema {
        Schema::new()
            .field(
                Field::new("title")
                    .required("title required")
                    .min_length(1, "title too short")
                    .max_length(8, "title too long"),
            )
            .field(
                Field::new("year")
                    .required("year required")
                    .integer("year must be an integer")
                    .min(1000, "year too small")
                    .max_current_year("year in the future"),
            )
            .field(
                Field::new("isbn")
                    .required("isbn required")
                    .length(13, "isbn must be 13 chars")
                    .matches(r"^\d{13}$", "isbn must be digits"),
            )
    }

    #[test]
    fn valid_payload_passes_and_strips_unknown_keys() {
        let schema = book_like_schema();
        let input = json!({
            "title": "Dune",
            "year": 1965,
            "isbn": "9780441172719",
            "extraneous": true,
        });

        match schema.validate(&input) {
            ValidationResult::Valid(value) => {
                assert_eq!(value["title"], "Dune");
                assert_eq!(value["year"], 1965);
                assert!(value.get("extraneous").is_none());
            }
            ValidationResult::Invalid(errors) => panic!("unexpected errors: {:?}", errors),
        }
    }

    #[test]
    fn one_message_per_invalid_field() {
        let schema = book_like_schema();
        // isbn violates both the length and the digit rules; only the first
        // declared rule may be reported.
        let input = json!({
            "title": "",
            "year": 800,
            "isbn": "abc",
        });

        match schema.validate(&input) {
            ValidationResult::Invalid(errors) => {
                assert_eq!(
                    errors,
                    vec!["title too short", "year too small", "isbn must be 13 chars"]
                );
            }
            ValidationResult::Valid(_) => panic!("expected failure"),
        }
    }

    #[test]
    fn missing_required_fields_report_required_messages() {
        let schema = book_like_schema();

        match schema.validate(&json!({})) {
            ValidationResult::Invalid(errors) => {
                assert_eq!(
                    errors,
                    vec!["title required", "year required", "isbn required"]
                );
            }
            ValidationResult::Valid(_) => panic!("expected failure"),
        }
    }

    #[test]
    fn null_counts_as_absent() {
        let schema = Schema::new().field(
            Field::new("name")
                .required("name required")
                .min_length(2, "too short"),
        );

        match schema.validate(&json!({ "name": null })) {
            ValidationResult::Invalid(errors) => assert_eq!(errors, vec!["name required"]),
            ValidationResult::Valid(_) => panic!("expected failure"),
        }
    }

    #[test]
    fn wrong_json_type_fails_first_type_sensitive_rule() {
        let schema = book_like_schema();
        let input = json!({
            "title": 7,
            "year": "1984",
            "isbn": "9780441172719",
        });

        match schema.validate(&input) {
            ValidationResult::Invalid(errors) => {
                assert_eq!(errors, vec!["title too short", "year must be an integer"]);
            }
            ValidationResult::Valid(_) => panic!("expected failure"),
        }
    }

    #[test]
    fn non_integer_number_is_rejected() {
        let schema = Schema::new().field(
            Field::new("pages")
                .required("pages required")
                .integer("pages must be an integer")
                .min(1, "at least one page"),
        );

        match schema.validate(&json!({ "pages": 12.5 })) {
            ValidationResult::Invalid(errors) => {
                assert_eq!(errors, vec!["pages must be an integer"]);
            }
            ValidationResult::Valid(_) => panic!("expected failure"),
        }
    }

    #[test]
    fn current_year_is_accepted_next_year_is_not() {
        let schema = Schema::new().field(
            Field::new("year")
                .required("year required")
                .integer("int")
                .max_current_year("in the future"),
        );

        let current = i64::from(Utc::now().year());
        assert!(matches!(
            schema.validate(&json!({ "year": current })),
            ValidationResult::Valid(_)
        ));
        match schema.validate(&json!({ "year": current + 1 })) {
            ValidationResult::Invalid(errors) => assert_eq!(errors, vec!["in the future"]),
            ValidationResult::Valid(_) => panic!("expected failure"),
        }
    }

    #[test]
    fn email_rule_accepts_valid_rejects_invalid() {
        let rules = [Rule::Email("bad email")];
        assert!(validate_value(&rules, &json!("a@b.com")).is_ok());
        assert_eq!(
            validate_value(&rules, &json!("not-an-email")),
            Err("bad email".to_string())
        );
    }

    #[test]
    fn uuid_rule_requires_version_4() {
        let rules = [Rule::UuidV4("bad uuid")];
        assert!(validate_value(&rules, &json!(Uuid::new_v4().to_string())).is_ok());
        // A v1-shaped UUID parses but is not version 4.
        assert!(validate_value(&rules, &json!("c232ab00-9414-11ec-b3c8-9f68deced846")).is_err());
        assert!(validate_value(&rules, &json!("not-a-uuid")).is_err());
    }

    #[test]
    fn non_object_input_fails_all_required_fields() {
        let schema = book_like_schema();
        match schema.validate(&json!("just a string")) {
            ValidationResult::Invalid(errors) => assert_eq!(errors.len(), 3),
            ValidationResult::Valid(_) => panic!("expected failure"),
        }
    }

    #[test]
    fn parse_maps_violations_to_validation_error() {
        #[derive(Debug, serde::Deserialize)]
        struct Payload {
            #[allow(dead_code)]
            title: String,
        }

        let schema = Schema::new().field(
            Field::new("title")
                .required("title required")
                .min_length(1, "too short"),
        );

        let err = schema.parse::<Payload>(&json!({})).unwrap_err();
        match err {
            AppError::Validation(errors) => assert_eq!(errors, vec!["title required"]),
            other => panic!("unexpected error: {:?}", other),
        }

        let parsed: Payload = schema.parse(&json!({ "title": "ok" })).unwrap();
        assert_eq!(parsed.title, "ok");
    }
}
