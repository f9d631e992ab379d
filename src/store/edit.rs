//! Editing an existing expense
//!
//! A front end that lets the user pick a record and change it holds an
//! [`EditIntent`] for as long as the edit form is open, rather than keeping
//! the record id in some shared session state.

use super::client::ExpenseStoreClient;
use super::transport::Transport;
use crate::error::ExpenseResult;
use crate::models::{ExpenseId, ExpenseInput, ExpenseRecord};

/// The user's intent to edit one stored expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditIntent {
    record_id: ExpenseId,
}

impl EditIntent {
    pub fn new(record_id: ExpenseId) -> Self {
        Self { record_id }
    }

    pub fn record_id(&self) -> &ExpenseId {
        &self.record_id
    }

    /// Current values of the record, to pre-fill the edit form
    pub fn prefill<T: Transport>(&self, client: &ExpenseStoreClient<T>) -> ExpenseResult<ExpenseInput> {
        Ok(client.get(&self.record_id)?.to_input())
    }

    /// Send the edited fields as a full replacement
    pub fn submit<T: Transport>(
        self,
        client: &ExpenseStoreClient<T>,
        input: ExpenseInput,
    ) -> ExpenseResult<ExpenseRecord> {
        client.update(&self.record_id, input)
    }
}
