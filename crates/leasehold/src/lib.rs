//! Entity store and REST surface for a multi-tenant property-management back end.

pub mod config;
pub mod domain;
pub mod error;
pub mod http;
pub mod seed;
pub mod stats;
pub mod store;
pub mod telemetry;
