//! # Mock Collections & Testing Guide
//!
//! `MockCollection` stands in for a [`CollectionActor`](crate::CollectionActor).
//! It hands out ordinary [`Repository`] handles, so the code under test is the
//! production code, but every request is answered from a queue of expectations.
//!
//! ## When to use Mocks vs Real Collections
//!
//! | Feature | MockCollection | CollectionActor |
//! |---------|----------------|-----------------|
//! | **State** | None (scripted answers) | Real documents |
//! | **Error Injection** | Easy (`return_err`) | Only duplicate keys |
//! | **Call assertions** | `request_count`, `written`, `verify` | Inspect stored state |
//! | **Use Case** | Service logic, failure paths | End-to-end flows |
//!
//! ## Example
//!
//! ```rust
//! use filing_framework::mock::MockCollection;
//! use filing_framework::StoreError;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! struct StocksFields { stocks: Option<i64> }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockCollection::new();
//!     mock.expect_exists_by_id("key-1").return_ok(false);
//!     mock.expect_find_by_id("key-2")
//!         .return_err(StoreError::Closed("stocks".into()));
//!
//!     let repository = mock.repository::<StocksFields>();
//!     assert!(!repository.exists_by_id("key-1").await.unwrap());
//!     assert!(repository.find_by_id("key-2").await.is_err());
//!
//!     assert_eq!(mock.request_count(), 2);
//!     mock.verify();
//! }
//! ```
//!
//! A request that does not match the next expectation is recorded as
//! unexpected and its response channel is dropped, so the caller sees
//! [`StoreError::Dropped`]. [`MockCollection::verify`] panics if anything was
//! unexpected or if expectations remain.

use crate::client::Repository;
use crate::entity::ResourceEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

enum Expectation {
    Insert {
        response: Result<(), StoreError>,
    },
    Save {
        response: Result<(), StoreError>,
    },
    FindById {
        id: String,
        response: Result<Option<Value>, StoreError>,
    },
    ExistsById {
        id: String,
        response: Result<bool, StoreError>,
    },
    DeleteById {
        id: String,
        response: Result<(), StoreError>,
    },
}

#[derive(Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    written: Vec<Value>,
    unexpected: Vec<String>,
    requests: usize,
}

type SharedState = Arc<Mutex<MockState>>;

/// A scripted collection for tests.
pub struct MockCollection {
    sender: mpsc::Sender<StoreRequest>,
    state: SharedState,
    _handle: tokio::task::JoinHandle<()>,
}

impl Default for MockCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCollection {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest>(100);
        let state: SharedState = Arc::new(Mutex::new(MockState::default()));
        let task_state = state.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut state = task_state.lock().unwrap();
                state.requests += 1;
                let expectation = state.expectations.pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::Insert {
                            document,
                            respond_to,
                            ..
                        },
                        Some(Expectation::Insert { response }),
                    )
                    | (
                        StoreRequest::Save {
                            document,
                            respond_to,
                            ..
                        },
                        Some(Expectation::Save { response }),
                    ) => {
                        if response.is_ok() {
                            state.written.push(document);
                        }
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::FindById { id, respond_to },
                        Some(Expectation::FindById {
                            id: expected,
                            response,
                        }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::ExistsById { id, respond_to },
                        Some(Expectation::ExistsById {
                            id: expected,
                            response,
                        }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::DeleteById { id, respond_to },
                        Some(Expectation::DeleteById {
                            id: expected,
                            response,
                        }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (request, expectation) => {
                        let description = format!("{} {}", request.operation(), request.id());
                        if let Some(expectation) = expectation {
                            state.expectations.push_front(expectation);
                        }
                        state.unexpected.push(description);
                    }
                }
            }
        });

        Self {
            sender,
            state,
            _handle: handle,
        }
    }

    /// A repository whose requests are answered by this mock.
    pub fn repository<F>(&self) -> Repository<F> {
        Repository::new("mock", self.sender.clone())
    }

    pub fn expect_insert(&mut self) -> WriteExpectationBuilder {
        WriteExpectationBuilder {
            kind: WriteKind::Insert,
            state: self.state.clone(),
        }
    }

    pub fn expect_save(&mut self) -> WriteExpectationBuilder {
        WriteExpectationBuilder {
            kind: WriteKind::Save,
            state: self.state.clone(),
        }
    }

    pub fn expect_delete_by_id(&mut self, id: impl Into<String>) -> WriteExpectationBuilder {
        WriteExpectationBuilder {
            kind: WriteKind::Delete(id.into()),
            state: self.state.clone(),
        }
    }

    pub fn expect_find_by_id(&mut self, id: impl Into<String>) -> FindExpectationBuilder {
        FindExpectationBuilder {
            id: id.into(),
            state: self.state.clone(),
        }
    }

    pub fn expect_exists_by_id(&mut self, id: impl Into<String>) -> ExistsExpectationBuilder {
        ExistsExpectationBuilder {
            id: id.into(),
            state: self.state.clone(),
        }
    }

    /// Number of requests received, expected or not.
    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests
    }

    /// Documents accepted by successful inserts and saves, in order.
    pub fn written<F: DeserializeOwned>(&self) -> Vec<ResourceEntity<F>> {
        let state = self.state.lock().unwrap();
        state
            .written
            .iter()
            .map(|document| {
                serde_json::from_value(document.clone()).expect("written document should deserialize")
            })
            .collect()
    }

    /// Panics unless every expectation was consumed and nothing unexpected arrived.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.unexpected.is_empty() {
            panic!("Unexpected requests: {:?}", state.unexpected);
        }
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }
}

enum WriteKind {
    Insert,
    Save,
    Delete(String),
}

/// Builder for `insert`, `save` and `delete_by_id` expectations.
pub struct WriteExpectationBuilder {
    kind: WriteKind,
    state: SharedState,
}

impl WriteExpectationBuilder {
    pub fn return_ok(self) {
        self.push(Ok(()));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<(), StoreError>) {
        let expectation = match self.kind {
            WriteKind::Insert => Expectation::Insert { response },
            WriteKind::Save => Expectation::Save { response },
            WriteKind::Delete(id) => Expectation::DeleteById { id, response },
        };
        self.state.lock().unwrap().expectations.push_back(expectation);
    }
}

/// Builder for `find_by_id` expectations.
pub struct FindExpectationBuilder {
    id: String,
    state: SharedState,
}

impl FindExpectationBuilder {
    pub fn return_document<F: Serialize>(self, entity: &ResourceEntity<F>) {
        let document = serde_json::to_value(entity).expect("entity should serialize");
        self.push(Ok(Some(document)));
    }

    pub fn return_none(self) {
        self.push(Ok(None));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Option<Value>, StoreError>) {
        self.state
            .lock()
            .unwrap()
            .expectations
            .push_back(Expectation::FindById {
                id: self.id,
                response,
            });
    }
}

/// Builder for `exists_by_id` expectations.
pub struct ExistsExpectationBuilder {
    id: String,
    state: SharedState,
}

impl ExistsExpectationBuilder {
    pub fn return_ok(self, exists: bool) {
        self.push(Ok(exists));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<bool, StoreError>) {
        self.state
            .lock()
            .unwrap()
            .expectations
            .push_back(Expectation::ExistsById {
                id: self.id,
                response,
            });
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a repository and the receiver its requests arrive on.
///
/// Lower level than [`MockCollection`]: the test reads each request and
/// answers it by hand, which is useful for asserting exact payloads.
pub fn create_mock_repository<F>(
    buffer_size: usize,
) -> (Repository<F>, mpsc::Receiver<StoreRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (Repository::new("mock", sender), receiver)
}

/// Helper to verify that the next message is an Insert request.
pub async fn expect_insert(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(
    String,
    Value,
    tokio::sync::oneshot::Sender<Result<(), StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Insert {
            id,
            document,
            respond_to,
        }) => Some((id, document, respond_to)),
        _ => None,
    }
}
