//! Fact catalog and preference store for a Russian-language facts service.
//!
//! The crate has three moving parts:
//!
//! - [`source::ContentSource`]: the curated, read-only fact pools.
//! - [`catalog::FactCatalog`]: the durable topic→facts store, seeded from
//!   the content source and grown by user contributions and by-topic draws.
//! - [`prefs::PreferenceStore`]: per-user favorite topics and usage stats.
//!
//! Both stores persist as whole pretty-printed JSON files, rewritten under
//! a coarse per-store lock on every mutation. Opening a store never fails:
//! unreadable files are logged and degrade to an empty in-memory state.
//!
//! # Quick Start
//!
//! ```ignore
//! use facts_core::{ContentSource, FactCatalog};
//!
//! fn main() -> Result<(), facts_core::PersistError> {
//!     let catalog = FactCatalog::open("data/russian_facts.json", ContentSource::builtin());
//!     if let Some(fact) = catalog.fact_for_topic("животные")? {
//!         println!("{fact}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod persist;
pub mod prefs;
pub mod source;
pub mod testing;
pub mod validate;

// Primary public API
pub use catalog::FactCatalog;
pub use persist::PersistError;
pub use prefs::{PreferenceStore, StatsSnapshot};
pub use source::ContentSource;
pub use validate::ValidationError;
