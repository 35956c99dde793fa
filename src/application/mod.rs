//! Application layer: the dispatch point and the batch driver built on it.
//!
//! `Dispatcher` invokes a gateway's `process` routine; `Checkout` feeds it
//! requests, merging stored gateway settings into each one.

pub mod checkout;
pub mod dispatcher;
