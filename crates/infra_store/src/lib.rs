//! In-Memory Storage Adapter
//!
//! This crate provides the storage backend for the subscription pool,
//! implementing the storage ports declared by the domain crates.
//!
//! # Architecture
//!
//! The crate follows the ports-and-adapters pattern. [`StoreState`] is a
//! plain value type holding every table and implements the domain port
//! traits directly; [`MemoryStore`] wraps it in an async lock and exposes
//! two entry points:
//!
//! - [`MemoryStore::read`] runs a closure against a consistent snapshot
//! - [`MemoryStore::transact`] runs a closure as one atomic unit of work:
//!   either every mutation commits or none does
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_store::MemoryStore;
//! use domain_billing::process_payments;
//!
//! let store = MemoryStore::new();
//! let report = store
//!     .transact(|state| process_payments(state, transaction_id))
//!     .await?;
//! ```

pub mod state;
pub mod store;

pub use state::StoreState;
pub use store::MemoryStore;
