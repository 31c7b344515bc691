//! Service outcomes.

use crate::validation::Errors;

/// Outcome of a service operation that did not fail with a data exception.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    Created,
    Updated,
    Found,
    NotFound,
    DuplicateKeyError,
    ValidationError,
    /// Delete refused: the resource still lists child items.
    ChildrenExist,
}

/// Status plus, depending on the status, the resource or the validation errors.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseObject<R> {
    status: ResponseStatus,
    data: Option<R>,
    errors: Option<Errors>,
}

impl<R> ResponseObject<R> {
    pub fn new(status: ResponseStatus) -> Self {
        Self {
            status,
            data: None,
            errors: None,
        }
    }

    pub fn with_data(status: ResponseStatus, data: R) -> Self {
        Self {
            status,
            data: Some(data),
            errors: None,
        }
    }

    pub fn validation_error(errors: Errors) -> Self {
        Self {
            status: ResponseStatus::ValidationError,
            data: None,
            errors: Some(errors),
        }
    }

    pub fn status(&self) -> ResponseStatus {
        self.status
    }

    pub fn data(&self) -> Option<&R> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<R> {
        self.data
    }

    pub fn errors(&self) -> Option<&Errors> {
        self.errors.as_ref()
    }
}
