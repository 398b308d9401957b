//! Data models for extracted utility-bill data.

pub mod config;
pub mod record;

pub use config::UbillConfig;
pub use record::PageRecord;
