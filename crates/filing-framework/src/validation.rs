//! # Validation
//!
//! Validation failures are data, not errors: a [`Validator`] returns an
//! [`Errors`] collection and the service reports it with
//! [`ResponseStatus::ValidationError`](crate::ResponseStatus::ValidationError).
//! `Err` from a validator is reserved for data-access failures while it looks
//! up related resources.

use crate::error::DataException;
use crate::request::{RequestContext, Transaction};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationType {
    #[serde(rename = "json-path")]
    JsonPath,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorType {
    #[serde(rename = "ch:validation")]
    Validation,
}

/// One validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Message key, e.g. `incorrect_total`.
    pub error: String,
    /// Where in the submitted document, e.g. `$.debtors.current_period.total`.
    pub location: String,
    pub location_type: LocationType,
    #[serde(rename = "type")]
    pub error_type: ErrorType,
}

impl ValidationError {
    pub fn new(error: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            location: location.into(),
            location_type: LocationType::JsonPath,
            error_type: ErrorType::Validation,
        }
    }
}

/// Ordered collection of validation failures. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Errors(Vec<ValidationError>);

impl Errors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    /// Shorthand for the common json-path validation error.
    pub fn add_error(&mut self, error: impl Into<String>, location: impl Into<String>) {
        self.add(ValidationError::new(error, location));
    }

    pub fn has_errors(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn count(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, error: &str, location: &str) -> bool {
        self.0
            .iter()
            .any(|e| e.error == error && e.location == location)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }
}

/// Checks a REST object before it is written.
#[async_trait]
pub trait Validator<R>: Send + Sync {
    async fn validate(
        &self,
        rest: &R,
        transaction: &Transaction,
        company_accounts_id: &str,
        request: &RequestContext,
    ) -> Result<Errors, DataException>;
}
