//! review-me: a one-time "please leave a review" prompt for admin dashboards
//!
//! An integration builds a [`ReviewGate`] on every admin page render. The
//! gate:
//! - checks the host and runtime versions and that a notice system exists
//! - records the first time it ever ran for that integration
//! - once `days_after` (plus one) days have passed, registers a review
//!   notice with the host's notice system
//!
//! ## Architecture
//!
//! - **Gate**: compatibility checks, eligibility, message building
//! - **Host services**: version queries, option storage, clock, inline error
//!   output and the notice registrar, all injected as trait objects
//! - **Storage**: in-memory or SQLite option store holding one timestamp per
//!   integration
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use review_me_core::{ErrorBuffer, HostServices, NoticeQueue, ReviewGate, SqliteStore, StaticPlatform};
//! use serde_json::json;
//!
//! # fn main() -> review_me_core::errors::Result<()> {
//! let store = SqliteStore::open(SqliteStore::default_path()?)?;
//! let notices = Arc::new(NoticeQueue::new());
//! let services = HostServices::new(
//!     Arc::new(StaticPlatform::new("6.4.3", "8.2.1")),
//!     Arc::new(store),
//!     Arc::new(ErrorBuffer::new()),
//! )
//! .with_notices(notices.clone());
//!
//! let gate = ReviewGate::from_value(
//!     json!({ "type": "plugin", "slug": "my-plugin" }),
//!     "my-plugin/my-plugin.rs",
//!     services,
//! )?;
//! println!("{:?} {}", gate.status(), notices.to_json()?);
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod config;
pub mod errors;
pub mod gate;
pub mod host;
pub mod key;
pub mod link;
pub mod notice;
pub mod sanitize;
pub mod store;
pub mod version;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ItemType, Requirements, ReviewConfig, Scope};
pub use errors::{Result, ReviewError};
pub use gate::{GateStatus, ReviewGate};
pub use host::{ErrorBuffer, ErrorSink, HostServices, Platform, StaticPlatform};
pub use key::IdentifierKey;
pub use notice::{Notice, NoticeOptions, NoticeQueue, NoticeRegistrar, NoticeStyle};
pub use store::{MemoryStore, OptionStore, SqliteStore};
