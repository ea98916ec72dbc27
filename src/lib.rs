//! Batch validator for switching-operation tickets.
//!
//! Ingests a batch of heterogeneous operation-ticket records (as produced by
//! an external work-management platform) and reports every violation of three
//! independent correctness classes, without mutating or re-querying the
//! source data:
//!
//! ```text
//! parse_batch(json) → Vec<Ticket> → validate_time(&tickets)         → Vec<ValidationError>
//!                                 → validate_plan_binding(&tickets) → Vec<ValidationError>
//!                                 → validate_content(&tickets)      → Vec<ValidationError>
//! ```
//!
//! The three rules are independently callable; [`validate_all`] composes them
//! into one [`ValidationReport`]. Rules are pure functions over their input:
//! no I/O, no shared state, safe to call concurrently.
//!
//! # Quick Start
//!
//! ```rust
//! let batch = serde_json::json!([{
//!     "serialNoStart": 2500058,
//!     "serialNoEnd": 2500058,
//!     "functionLocationName": "35kV North Ridge substation",
//!     "takeOrderTime": 1754000220000u64,
//!     "generateDate": 1754000507000u64,
//!     "operationStartTime": 1754000580000u64,
//!     "operationEndTime": 1754000880000u64,
//!     "reportTime": 1754001000000u64,
//!     "operatorUnames": "J. Alvarez",
//!     "guardianUnames": "M. Chen",
//!     "watchUname": "T. Okafor",
//!     "operationTask": "Place line 312 protection fully in service",
//!     "workPlanNos": "SCWH0401250623001803",
//! }]);
//! let tickets: Vec<oticket::Ticket> = serde_json::from_value(batch).unwrap();
//!
//! let report = oticket::validate_all(&tickets, None);
//! assert!(report.is_valid());
//! ```

pub mod error;
pub mod normalize;
pub mod parse;
pub mod project;
pub mod types;
pub mod validate;

pub use error::*;
pub use types::*;

// Re-export entry-point functions at the crate root for convenience.
pub use parse::parse_batch;
pub use validate::{validate_all, validate_content, validate_plan_binding, validate_time};
