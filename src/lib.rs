//! # Nada Sentinel
//!
//! Safe stand-ins for absent values that never collide with data a caller might store.
//!
//! - [`Sentinel`]: one unique marker per *flavor*, created lazily and shared process-wide.
//! - [`Nada`]: a single "nothing" value that absorbs every operation, so a failed
//!   computation can propagate down a chain without checks at each step.
//!
//! ## Quick Start
//!
//! ```rust
//! use nada_sentinel::{get_or_create, Nada};
//!
//! // Sentinels: equal flavors, same marker
//! let missing = get_or_create("my_crate::missing");
//! assert_eq!(missing, get_or_create("my_crate::missing"));
//!
//! // Nada: everything collapses back to the singleton
//! let failed = Nada::new();
//! let result = (failed + 1) * 2;
//! assert!(Nada::ptr_eq(&result, &failed));
//! assert_eq!(result.nada_get(0), 0);
//! ```
//!
//! ## Features
//!
//! - **Thread-safe**: first use of a flavor (or of `Nada`) is race-free
//! - **Identity equality**: sentinels are equal only to themselves
//! - **Isolated registries**: [`define_sentinels!`] creates registries that share nothing
//! - **Tracing support**: registry events reach `tracing` and an optional callback
//!
//! ## Main Functions
//!
//! - [`get_or_create`] - Get the sentinel for a flavor, creating it on first use
//! - [`lookup`] - Get an existing sentinel without creating one
//! - [`contains`] - Check whether a flavor has a sentinel
//! - [`flavor_count`] - Count sentinels for one flavor type
//! - [`set_trace_callback`] - Observe registry operations

mod error;
mod macros;
mod nada;
mod sentinel;
mod sentinel_event;
mod sentinel_registry;
mod slice;

pub use error::Error;
pub use nada::{Method, Nada, Recovered};
pub use sentinel::{
    clear_trace_callback, contains, flavor_count, get_or_create, lookup, set_trace_callback,
    Flavor, GlobalSentinels, Sentinel,
};
pub use sentinel_event::SentinelEvent;
pub use sentinel_registry::{SentinelRegistry, SentinelStorage, TraceFn, TraceSlot};
pub use slice::Slice;
