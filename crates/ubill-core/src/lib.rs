//! Core library for utility-bill data extraction.
//!
//! This crate provides:
//! - PDF line extraction (layout-preserving text, page by page)
//! - Heuristic field recognizers (month, year, facility name, total energy)
//! - A session that assembles one [`PageRecord`] per page, with an
//!   operator-prompt fallback for fields the heuristics cannot resolve

pub mod error;
pub mod models;
pub mod pdf;
pub mod bill;

pub use error::{UbillError, PdfError, ExtractionError, Result};
pub use models::record::PageRecord;
pub use models::config::UbillConfig;
pub use pdf::{LineSource, PageContent, PdfExtractor};
pub use bill::{Field, Session, ExtractionMode};
pub use bill::prompt::{ValuePrompt, NoPrompt};
pub use bill::rules::{find_month, find_year, find_name, find_total_energy};
