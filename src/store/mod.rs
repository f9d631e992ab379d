//! Remote expense store access
//!
//! [`ExpenseStoreClient`] exposes list/create/update/delete against the
//! store's HTTP contract and translates every transport outcome into
//! [`crate::error::ExpenseError`]. The network sits behind [`Transport`].

pub mod client;
pub mod edit;
pub mod http;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use client::ExpenseStoreClient;
pub use edit::EditIntent;
pub use http::{HttpTransport, DEFAULT_TIMEOUT};
pub use transport::{Method, StoreRequest, StoreResponse, Transport};
