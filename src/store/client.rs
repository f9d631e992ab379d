//! Expense store client
//!
//! The only boundary between this crate and the remote store. Each operation
//! is a single round trip; the store's answer is taken as ground truth and
//! nothing is cached between calls.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::http::HttpTransport;
use super::transport::{StoreRequest, StoreResponse, Transport};
use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseId, ExpenseInput, ExpenseRecord};
use crate::query;

/// Client for the remote expense store
#[derive(Debug, Clone)]
pub struct ExpenseStoreClient<T = HttpTransport> {
    transport: T,
}

impl ExpenseStoreClient<HttpTransport> {
    /// Build an HTTP client from user settings
    pub fn from_settings(settings: &Settings) -> ExpenseResult<Self> {
        settings.validate()?;
        let transport = HttpTransport::new(&settings.api_url, settings.timeout())?;
        Ok(Self::new(transport))
    }
}

impl<T: Transport> ExpenseStoreClient<T> {
    /// Create a client over any transport
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Fetch every expense in the store
    pub fn list_all(&self) -> ExpenseResult<Vec<ExpenseRecord>> {
        debug!("listing expenses");
        let response = self.send(StoreRequest::list(), "list expenses", None)?;
        let items: Vec<Value> = decode(&response, "list expenses")?;

        let mut records = Vec::with_capacity(items.len());
        for item in items {
            let id = item.get("id").cloned().unwrap_or(Value::Null);
            match serde_json::from_value::<ExpenseRecord>(item) {
                Ok(record) => records.push(record),
                Err(e) => warn!(%id, error = %e, "skipping unreadable expense"),
            }
        }
        debug!(count = records.len(), "listed expenses");
        Ok(records)
    }

    /// Fetch the expenses recorded on one date
    ///
    /// The store has no date filter, so this fetches everything and filters.
    pub fn list_for_date(&self, date: NaiveDate) -> ExpenseResult<Vec<ExpenseRecord>> {
        let records = self.list_all()?;
        Ok(query::filter_by_date(&records, date))
    }

    /// Fetch a single expense by id
    pub fn get(&self, id: &ExpenseId) -> ExpenseResult<ExpenseRecord> {
        self.list_all()?
            .into_iter()
            .find(|record| record.id == *id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.as_str()))
    }

    /// Create an expense; the store assigns its id
    pub fn create(&self, input: ExpenseInput) -> ExpenseResult<ExpenseRecord> {
        let body = payload_json(&input)?;
        let response = self.send(StoreRequest::create(body), "create expense", None)?;
        let record: ExpenseRecord = decode(&response, "create expense")?;
        info!(id = %record.id, date = %record.date, "created expense");
        Ok(record)
    }

    /// Replace every field of an existing expense except its id
    pub fn update(&self, id: &ExpenseId, input: ExpenseInput) -> ExpenseResult<ExpenseRecord> {
        let body = payload_json(&input)?;
        let response = self.send(
            StoreRequest::replace(id.clone(), body),
            "update expense",
            Some(id),
        )?;

        // Some stores acknowledge with a message instead of the record
        let record = match serde_json::from_str::<ExpenseRecord>(&response.body) {
            Ok(record) => record,
            Err(_) => input
                .into_record(id.clone())
                .map_err(|e| ExpenseError::Validation(e.to_string()))?,
        };
        info!(%id, "updated expense");
        Ok(record)
    }

    /// Delete an expense; deleting it again reports `NotFound`
    pub fn delete(&self, id: &ExpenseId) -> ExpenseResult<()> {
        self.send(StoreRequest::delete(id.clone()), "delete expense", Some(id))?;
        info!(%id, "deleted expense");
        Ok(())
    }

    fn send(
        &self,
        request: StoreRequest,
        operation: &str,
        id: Option<&ExpenseId>,
    ) -> ExpenseResult<StoreResponse> {
        let response = self.transport.execute(request).map_err(|e| {
            warn!(operation, error = %e, "store request failed");
            e
        })?;

        if response.is_success() {
            return Ok(response);
        }

        warn!(operation, status = response.status, "store rejected request");
        match id {
            Some(id) if response.is_not_found() => {
                Err(ExpenseError::expense_not_found(id.as_str()))
            }
            _ => Err(ExpenseError::StoreUnavailable(format!(
                "{} failed with HTTP status {}",
                operation, response.status
            ))),
        }
    }
}

fn payload_json(input: &ExpenseInput) -> ExpenseResult<serde_json::Value> {
    let payload = input
        .payload()
        .map_err(|e| ExpenseError::Validation(e.to_string()))?;
    Ok(serde_json::to_value(payload)?)
}

fn decode<D: DeserializeOwned>(response: &StoreResponse, operation: &str) -> ExpenseResult<D> {
    serde_json::from_str(&response.body).map_err(|e| {
        warn!(operation, error = %e, "unreadable store response");
        ExpenseError::StoreUnavailable(format!("{}: unreadable response: {}", operation, e))
    })
}
