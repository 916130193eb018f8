//! Flavored sentinel markers and the process-wide sentinel registry.
//!
//! A sentinel stands in for an absent value without borrowing `None`, `()` or any other
//! value a caller might legitimately store. Each flavor maps to exactly one marker for
//! the lifetime of the process, and markers compare by identity only.
//!
//! # Examples
//!
//! ```
//! use nada_sentinel::{get_or_create, Sentinel};
//!
//! let missing = get_or_create("my_crate::missing");
//! assert_eq!(missing, Sentinel::new("my_crate::missing"));
//! assert_ne!(missing, Sentinel::new("my_crate::other"));
//! ```

use std::{
    collections::HashMap,
    fmt,
    hash::{Hash, Hasher},
    ptr,
    sync::{
        atomic::{AtomicU64, Ordering},
        LazyLock, Mutex, RwLock,
    },
};

use crate::sentinel_registry::{SentinelRegistry, SentinelStorage, TraceSlot};
use crate::{Error, SentinelEvent};

/// Bound shared by every flavor type.
///
/// Any hashable, comparable, thread-safe `'static` value can be a flavor. A type that
/// is not hashable is rejected at compile time.
pub trait Flavor: Hash + Eq + Send + Sync + 'static {}

impl<T: Hash + Eq + Send + Sync + 'static> Flavor for T {}

/// Serial ids handed to new markers. Zero is never used.
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

struct Marker<K> {
    flavor: K,
    id: u64,
}

/// A unique marker identified by its flavor.
///
/// `Sentinel` is a cheap `Copy` handle. Two sentinels are equal only when they are the
/// same marker, which happens exactly when they were requested from the same registry
/// with equal flavors.
pub struct Sentinel<K: 'static> {
    marker: &'static Marker<K>,
}

impl<K: Flavor> Sentinel<K> {
    /// Return the sentinel for `flavor` from the process-wide registry.
    ///
    /// Shorthand for [`get_or_create`].
    pub fn new(flavor: K) -> Self {
        get_or_create(flavor)
    }

    /// Mint a fresh marker. Only registries call this, under their write lock.
    pub(crate) fn mint(flavor: K) -> Self {
        let marker = Box::new(Marker {
            flavor,
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
        });
        Sentinel {
            marker: Box::leak(marker),
        }
    }
}

impl<K: 'static> Sentinel<K> {
    /// The flavor this sentinel was created for.
    pub fn flavor(&self) -> &'static K {
        &self.marker.flavor
    }

    /// Serial id of the marker, unique across every registry in the process.
    pub fn id(&self) -> u64 {
        self.marker.id
    }

    /// Identity comparison; the same test `==` performs.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        ptr::eq(this.marker, other.marker)
    }
}

impl<K: 'static> Clone for Sentinel<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: 'static> Copy for Sentinel<K> {}

impl<K: 'static> PartialEq for Sentinel<K> {
    fn eq(&self, other: &Self) -> bool {
        Sentinel::ptr_eq(self, other)
    }
}

impl<K: 'static> Eq for Sentinel<K> {}

impl<K: 'static> Hash for Sentinel<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.marker.id.hash(state);
    }
}

impl<K: fmt::Debug + 'static> fmt::Debug for Sentinel<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sentinel({:?})", self.marker.flavor)
    }
}

impl<K: fmt::Debug + 'static> fmt::Display for Sentinel<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// -------------------------------------------------------------------------------------------------
// Process-wide registry
// -------------------------------------------------------------------------------------------------

static GLOBAL_STORAGE: SentinelStorage = LazyLock::new(|| RwLock::new(HashMap::new()));

static GLOBAL_TRACE: TraceSlot = LazyLock::new(|| Mutex::new(None));

/// The process-wide sentinel registry behind the free functions of this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalSentinels;

impl SentinelRegistry for GlobalSentinels {
    fn storage() -> &'static SentinelStorage {
        &GLOBAL_STORAGE
    }

    fn trace() -> &'static TraceSlot {
        &GLOBAL_TRACE
    }
}

const GLOBAL: GlobalSentinels = GlobalSentinels;

/// Returns the sentinel for `flavor`, creating it on first request.
///
/// Safe to call from many threads at once: concurrent first requests for the same
/// flavor all receive the same marker.
///
/// # Examples
///
/// ```
/// use nada_sentinel::get_or_create;
///
/// let a = get_or_create(42u32);
/// let b = get_or_create(42u32);
/// let c = get_or_create(1u32);
///
/// assert_eq!(a, b);
/// assert_ne!(a, c);
/// ```
pub fn get_or_create<K: Flavor>(flavor: K) -> Sentinel<K> {
    GLOBAL.get_or_create(flavor)
}

/// Looks up the sentinel for `flavor` without creating it.
///
/// # Errors
///
/// Returns [`Error::FlavorNotFound`] if no sentinel exists for `flavor` yet.
///
/// # Examples
///
/// ```
/// use nada_sentinel::{get_or_create, lookup};
///
/// assert!(lookup(&"lookup-doc").is_err());
/// let s = get_or_create("lookup-doc");
/// assert_eq!(lookup(&"lookup-doc").unwrap(), s);
/// ```
pub fn lookup<K: Flavor>(flavor: &K) -> Result<Sentinel<K>, Error> {
    GLOBAL.lookup(flavor)
}

/// Checks whether a sentinel exists for `flavor`.
pub fn contains<K: Flavor>(flavor: &K) -> bool {
    GLOBAL.contains(flavor)
}

/// Number of sentinels created so far for flavors of type `K`.
pub fn flavor_count<K: Flavor>() -> usize {
    GLOBAL.flavor_count::<K>()
}

/// Sets a tracing callback invoked on every interaction with the process-wide registry.
///
/// # Example
/// ```rust
/// use nada_sentinel::{clear_trace_callback, set_trace_callback};
///
/// set_trace_callback(|event| println!("[sentinel-trace] {}", event));
/// clear_trace_callback();
/// ```
pub fn set_trace_callback(callback: impl Fn(&SentinelEvent) + Send + Sync + 'static) {
    GLOBAL.set_trace_callback(callback)
}

/// Clears the tracing callback of the process-wide registry.
pub fn clear_trace_callback() {
    GLOBAL.clear_trace_callback()
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
