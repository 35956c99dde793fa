//! Domain layer: gateway variants, their capabilities, and the ports the
//! application layer depends on.

pub mod attributes;
pub mod capability;
pub mod gateway;
pub mod payment;
pub mod ports;
pub mod settings;
