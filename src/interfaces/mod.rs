//! Adapters between external formats and the domain: CSV settings and
//! outcomes, JSON payment batches.

pub mod csv;
pub mod json;
