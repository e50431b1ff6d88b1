//! Cross-platform dashboard logic: aggregation, filtering, formatting,
//! serialization. Everything here is UI-framework-free and unit-tested.

pub mod demo;
pub mod export;
pub mod filter;
pub mod format;
pub mod kpi;
pub mod notify;
pub mod platform;
pub mod table;
