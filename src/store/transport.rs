//! Transport seam between the store client and the network
//!
//! The client speaks in [`StoreRequest`]s against the expense resource and
//! reads back a status and a body. Anything that can carry those (HTTP, or an
//! in-memory fake in tests) implements [`Transport`].

use serde_json::Value;

use crate::error::ExpenseResult;
use crate::models::ExpenseId;

/// HTTP verbs used by the expense store contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// One request against the base resource or one of its items
#[derive(Debug, Clone, PartialEq)]
pub struct StoreRequest {
    pub method: Method,
    /// Item id; `None` addresses the base resource
    pub id: Option<ExpenseId>,
    pub body: Option<Value>,
}

impl StoreRequest {
    /// `GET {base}`
    pub fn list() -> Self {
        Self {
            method: Method::Get,
            id: None,
            body: None,
        }
    }

    /// `POST {base}` with a JSON body
    pub fn create(body: Value) -> Self {
        Self {
            method: Method::Post,
            id: None,
            body: Some(body),
        }
    }

    /// `PUT {base}/{id}` with a JSON body
    pub fn replace(id: ExpenseId, body: Value) -> Self {
        Self {
            method: Method::Put,
            id: Some(id),
            body: Some(body),
        }
    }

    /// `DELETE {base}/{id}`
    pub fn delete(id: ExpenseId) -> Self {
        Self {
            method: Method::Delete,
            id: Some(id),
            body: None,
        }
    }
}

/// Status and raw body returned by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreResponse {
    pub status: u16,
    pub body: String,
}

impl StoreResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// The store contract only recognises 200 as success
    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

/// Carries store requests to the remote store
///
/// Implementations must report transport failures (unreachable host,
/// timeout, unreadable body) as `ExpenseError::StoreUnavailable`.
pub trait Transport {
    fn execute(&self, request: StoreRequest) -> ExpenseResult<StoreResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: StoreRequest) -> ExpenseResult<StoreResponse> {
        (**self).execute(request)
    }
}
