//! In-memory stand-in for the remote expense store, for tests

use std::cell::RefCell;

use serde_json::{json, Value};

use super::transport::{Method, StoreRequest, StoreResponse, Transport};
use crate::error::ExpenseResult;
use crate::models::ExpenseId;

#[derive(Debug, Default)]
struct State {
    records: Vec<Value>,
    next_id: u64,
    requests: usize,
}

/// Behaves like the store's HTTP contract: numeric ids, 404 for unknown items
#[derive(Debug, Default)]
pub(crate) struct FakeStore {
    state: RefCell<State>,
    fail_status: Option<u16>,
    list_body: Option<String>,
    acknowledge_updates: bool,
}

impl FakeStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Answer every request with this status and an error body
    pub(crate) fn failing_with(mut self, status: u16) -> Self {
        self.fail_status = Some(status);
        self
    }

    /// Answer `GET` with a fixed body
    pub(crate) fn with_list_body(mut self, body: &str) -> Self {
        self.list_body = Some(body.to_string());
        self
    }

    /// Answer `PUT` with a message instead of the record
    pub(crate) fn acknowledge_updates(mut self) -> Self {
        self.acknowledge_updates = true;
        self
    }

    pub(crate) fn request_count(&self) -> usize {
        self.state.borrow().requests
    }

    fn position(state: &State, id: &ExpenseId) -> Option<usize> {
        state
            .records
            .iter()
            .position(|r| r["id"].as_u64().map(|n| n.to_string()).as_deref() == Some(id.as_str()))
    }
}

impl Transport for FakeStore {
    fn execute(&self, request: StoreRequest) -> ExpenseResult<StoreResponse> {
        let mut state = self.state.borrow_mut();
        state.requests += 1;

        if let Some(status) = self.fail_status {
            return Ok(StoreResponse::new(status, r#"{"detail": "failure"}"#));
        }

        let not_found = StoreResponse::new(404, r#"{"detail": "Expense not found"}"#);

        let response = match (request.method, request.id, request.body) {
            (Method::Get, None, _) => match &self.list_body {
                Some(body) => StoreResponse::new(200, body.clone()),
                None => StoreResponse::new(200, Value::Array(state.records.clone()).to_string()),
            },
            (Method::Post, None, Some(mut body)) => {
                state.next_id += 1;
                body["id"] = json!(state.next_id);
                state.records.push(body.clone());
                StoreResponse::new(200, body.to_string())
            }
            (Method::Put, Some(id), Some(mut body)) => match Self::position(&state, &id) {
                Some(index) => {
                    body["id"] = state.records[index]["id"].clone();
                    state.records[index] = body.clone();
                    if self.acknowledge_updates {
                        StoreResponse::new(200, r#"{"message": "Expense updated"}"#)
                    } else {
                        StoreResponse::new(200, body.to_string())
                    }
                }
                None => not_found,
            },
            (Method::Delete, Some(id), _) => match Self::position(&state, &id) {
                Some(index) => {
                    state.records.remove(index);
                    StoreResponse::new(200, r#"{"message": "Expense deleted"}"#)
                }
                None => not_found,
            },
            _ => StoreResponse::new(405, r#"{"detail": "Method Not Allowed"}"#),
        };

        Ok(response)
    }
}
