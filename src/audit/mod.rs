//! Audit logging for FinBEE
//!
//! Every create, update and delete of an income or expense is appended to
//! `audit.log` as one JSON line.
//!
//! Entries record the owning user, so `finbee audit` only shows the active
//! user's history. [`Auditable`] ties a record type to its [`EntityType`].
//!
//! # Example
//!
//! ```rust,ignore
//! use finbee::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::created(&expense))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, Auditable, EntityType, Operation};
pub use logger::AuditLogger;
