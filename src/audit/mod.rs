//! Audit logging system for playmoney
//!
//! Records every create, update and delete of income, categories and
//! expenses with before/after values in an append-only JSONL file.
//!
//! # Example
//!
//! ```rust,ignore
//! use playmoney::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let entry = AuditEntry::create(
//!     EntityType::Category,
//!     category.id.to_string(),
//!     Some(category.name.clone()),
//!     &category,
//! );
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
