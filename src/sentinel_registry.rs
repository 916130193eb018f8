//! Core trait defining sentinel registry behavior.
//!
//! This module provides the `SentinelRegistry` trait with default implementations for
//! race-free creation, read-only lookup, and tracing of flavored sentinels.
//!
//! The registry is keyed twice: first by the flavor's `TypeId`, then by the flavor value.
//! Each distinct flavor gets exactly one marker, minted on first request and kept for the
//! lifetime of the process.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex, RwLock};

use crate::sentinel::{Flavor, Sentinel};
use crate::{Error, SentinelEvent};

/// Signature of a user-supplied trace callback.
pub type TraceFn = dyn Fn(&SentinelEvent) + Send + Sync + 'static;

/// Type alias for the trace callback storage.
///
/// Note: This type is also spelled out in the `define_sentinels!` macro.
/// Keep both definitions in sync.
pub type TraceSlot = LazyLock<Mutex<Option<Arc<TraceFn>>>>;

/// Type-erased storage: one flavor table per flavor type.
pub type SentinelStorage = LazyLock<RwLock<HashMap<TypeId, Box<dyn Any + Send + Sync>>>>;

/// Per-type table. Keys borrow the flavor owned by the leaked marker.
type FlavorTable<K> = HashMap<&'static K, Sentinel<K>>;

/// Core trait defining sentinel registry behavior.
///
/// Provides default implementations for all registry operations, requiring only
/// two accessor methods (`storage` and `trace`) to be implemented by the implementor.
pub trait SentinelRegistry {
    // -------------------------------------------------------------------------------------------------
    // Tracing
    // -------------------------------------------------------------------------------------------------

    /// Access the trace callback static.
    fn trace() -> &'static TraceSlot;

    /// Set a tracing callback for registry operations.
    ///
    /// The callback will be invoked for every registry operation (create, hit, lookup).
    ///
    /// # Lock Poisoning Recovery
    ///
    /// If the trace lock is poisoned, this method recovers by extracting the inner value.
    ///
    /// # Reentrancy
    ///
    /// No registry lock is held while the callback runs. It may create or look up
    /// sentinels and may replace or clear the callback of the same registry; a
    /// replacement takes effect from the next event on. Creating a sentinel from the
    /// callback emits another event, so the callback must not do so unconditionally.
    fn set_trace_callback(&self, callback: impl Fn(&SentinelEvent) + Send + Sync + 'static) {
        let mut guard = Self::trace().lock().unwrap_or_else(|p| p.into_inner());
        *guard = Some(Arc::new(callback));
    }

    /// Clear the tracing callback.
    ///
    /// After calling this, events only reach `tracing` subscribers.
    fn clear_trace_callback(&self) {
        let mut guard = Self::trace().lock().unwrap_or_else(|p| p.into_inner());
        *guard = None;
    }

    /// Emit a registry event to `tracing` and to the current callback, if any.
    ///
    /// The callback is cloned out of the trace lock before it runs.
    fn emit_event(&self, event: &SentinelEvent) {
        tracing::trace!(target: "nada_sentinel", %event, "sentinel registry event");

        let callback = Self::trace()
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clone();
        if let Some(callback) = callback {
            callback(event);
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Registry
    // -------------------------------------------------------------------------------------------------

    /// Access the storage static.
    fn storage() -> &'static SentinelStorage;

    /// Return the sentinel for `flavor`, minting it on first request.
    ///
    /// Repeated calls with equal flavors return the same marker; unequal flavors get
    /// distinct markers. Creation is double-checked: a shared-lock lookup first, then
    /// a second lookup under the exclusive lock before inserting, so concurrent first
    /// use never mints two markers for one flavor.
    ///
    /// # Lock Poisoning Recovery
    ///
    /// Poisoned locks are recovered. The table is append-only, so a panic can never
    /// leave it half-updated.
    fn get_or_create<K: Flavor>(&self, flavor: K) -> Sentinel<K> {
        if let Some(existing) = find::<K>(Self::storage(), &flavor) {
            self.emit_event(&SentinelEvent::Hit {
                type_name: type_name::<K>(),
                id: existing.id(),
            });
            return existing;
        }

        let (sentinel, created) = {
            let mut storage = Self::storage().write().unwrap_or_else(|p| p.into_inner());
            let slot = storage
                .entry(TypeId::of::<K>())
                .or_insert_with(|| Box::new(FlavorTable::<K>::new()));

            if let Some(table) = slot.downcast_mut::<FlavorTable<K>>() {
                match table.get(&flavor).copied() {
                    Some(existing) => (existing, false),
                    None => {
                        let sentinel = Sentinel::mint(flavor);
                        table.insert(sentinel.flavor(), sentinel);
                        (sentinel, true)
                    }
                }
            } else {
                // Slots are keyed by `TypeId::of::<K>()`; a foreign table is replaced
                let sentinel = Sentinel::mint(flavor);
                let mut table = FlavorTable::<K>::new();
                table.insert(sentinel.flavor(), sentinel);
                *slot = Box::new(table);
                (sentinel, true)
            }
        };

        let event = if created {
            SentinelEvent::Create {
                type_name: type_name::<K>(),
                id: sentinel.id(),
            }
        } else {
            SentinelEvent::Hit {
                type_name: type_name::<K>(),
                id: sentinel.id(),
            }
        };
        self.emit_event(&event);

        sentinel
    }

    /// Look up the sentinel for `flavor` without creating it.
    ///
    /// # Errors
    ///
    /// - [`Error::FlavorNotFound`] if no sentinel has been created for `flavor`
    fn lookup<K: Flavor>(&self, flavor: &K) -> Result<Sentinel<K>, Error> {
        let found = find::<K>(Self::storage(), flavor);

        self.emit_event(&SentinelEvent::Lookup {
            type_name: type_name::<K>(),
            found: found.is_some(),
        });

        found.ok_or(Error::FlavorNotFound {
            type_name: type_name::<K>(),
        })
    }

    /// Check whether a sentinel exists for `flavor`.
    fn contains<K: Flavor>(&self, flavor: &K) -> bool {
        self.lookup(flavor).is_ok()
    }

    /// Number of sentinels created so far for flavors of type `K`.
    fn flavor_count<K: Flavor>(&self) -> usize {
        Self::storage()
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .get(&TypeId::of::<K>())
            .and_then(|slot| slot.downcast_ref::<FlavorTable<K>>())
            .map_or(0, HashMap::len)
    }
}

/// Shared-lock lookup used by both the fast path and `lookup`.
fn find<K: Flavor>(storage: &'static SentinelStorage, flavor: &K) -> Option<Sentinel<K>> {
    storage
        .read()
        .unwrap_or_else(|p| p.into_inner())
        .get(&TypeId::of::<K>())
        .and_then(|slot| slot.downcast_ref::<FlavorTable<K>>())
        .and_then(|table| table.get(flavor).copied())
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
