//! Macros for creating isolated sentinel registries.

/// Creates an isolated sentinel registry with a single macro invocation.
///
/// The macro generates a module containing:
/// - Storage static (hidden)
/// - Trace callback static (hidden)
/// - An `Api` struct that implements `SentinelRegistry`
/// - Free functions mirroring the process-wide ones
///
/// Sentinels from different registries never compare equal, even for equal flavors.
///
/// # Examples
///
/// ```rust
/// use nada_sentinel::define_sentinels;
///
/// define_sentinels!(parser);
///
/// let eof = parser::get_or_create("eof");
/// assert_eq!(eof, parser::get_or_create("eof"));
/// assert!(parser::contains(&"eof"));
/// assert_ne!(eof, nada_sentinel::get_or_create("eof"));
/// ```
///
/// # Trait-Based Usage
///
/// ```rust
/// use nada_sentinel::{define_sentinels, SentinelRegistry};
///
/// define_sentinels!(config);
///
/// let unset = config::API.get_or_create("unset");
/// assert_eq!(config::API.flavor_count::<&str>(), 1);
/// # let _ = unset;
/// ```
#[macro_export]
macro_rules! define_sentinels {
    ($name:ident) => {
        pub mod $name {
            use std::any::{Any, TypeId};
            use std::collections::HashMap;
            use std::sync::{Arc, LazyLock, Mutex, RwLock};

            // Flavor tables for this registry (module-private)
            static STORAGE: LazyLock<RwLock<HashMap<TypeId, Box<dyn Any + Send + Sync>>>> =
                LazyLock::new(|| RwLock::new(HashMap::new()));

            // Trace callback storage (module-private)
            static TRACE: LazyLock<Mutex<Option<Arc<dyn Fn(&$crate::SentinelEvent) + Send + Sync>>>> =
                LazyLock::new(|| Mutex::new(None));

            /// Zero-sized type that implements the registry API.
            pub struct Api;

            impl $crate::SentinelRegistry for Api {
                fn storage() -> &'static $crate::SentinelStorage {
                    &STORAGE
                }

                fn trace() -> &'static $crate::TraceSlot {
                    &TRACE
                }
            }

            /// Constant for trait-based access to this registry.
            pub const API: Api = Api;

            /// Return the sentinel for `flavor`, creating it on first request.
            pub fn get_or_create<K: $crate::Flavor>(flavor: K) -> $crate::Sentinel<K> {
                use $crate::SentinelRegistry;
                API.get_or_create(flavor)
            }

            /// Look up the sentinel for `flavor` without creating it.
            pub fn lookup<K: $crate::Flavor>(
                flavor: &K,
            ) -> Result<$crate::Sentinel<K>, $crate::Error> {
                use $crate::SentinelRegistry;
                API.lookup(flavor)
            }

            /// Check whether a sentinel exists for `flavor`.
            pub fn contains<K: $crate::Flavor>(flavor: &K) -> bool {
                use $crate::SentinelRegistry;
                API.contains(flavor)
            }

            /// Number of sentinels created so far for flavors of type `K`.
            pub fn flavor_count<K: $crate::Flavor>() -> usize {
                use $crate::SentinelRegistry;
                API.flavor_count::<K>()
            }

            /// Set a tracing callback for this registry.
            pub fn set_trace_callback(callback: impl Fn(&$crate::SentinelEvent) + Send + Sync + 'static) {
                use $crate::SentinelRegistry;
                API.set_trace_callback(callback)
            }

            /// Clear the tracing callback.
            pub fn clear_trace_callback() {
                use $crate::SentinelRegistry;
                API.clear_trace_callback()
            }
        }
    };
}
