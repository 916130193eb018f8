/// Events emitted by a sentinel registry during operations.
///
/// These events are passed to the tracing callback set via `set_trace_callback`
/// and are mirrored as `tracing` events at `TRACE` level.
///
/// # Examples
///
/// ```rust
/// use nada_sentinel::SentinelEvent;
///
/// let event = SentinelEvent::Create { type_name: "&str", id: 1 };
/// println!("{:?}", event);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentinelEvent {
    /// A new sentinel was minted for a flavor seen for the first time.
    Create {
        /// The type name of the flavor (e.g., "&str", "u32")
        type_name: &'static str,
        /// Serial id of the new marker
        id: u64,
    },

    /// `get_or_create` returned an already existing sentinel.
    Hit {
        /// The type name of the flavor
        type_name: &'static str,
        /// Serial id of the existing marker
        id: u64,
    },

    /// A read-only lookup or existence check was performed.
    Lookup {
        /// The type name of the flavor
        type_name: &'static str,
        /// Whether a sentinel exists for the flavor
        found: bool,
    },
}

impl std::fmt::Display for SentinelEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentinelEvent::Create { type_name, id } => {
                write!(f, "create {{ type_name: {}, id: {} }}", type_name, id)
            }
            SentinelEvent::Hit { type_name, id } => {
                write!(f, "hit {{ type_name: {}, id: {} }}", type_name, id)
            }
            SentinelEvent::Lookup { type_name, found } => {
                write!(f, "lookup {{ type_name: {}, found: {} }}", type_name, found)
            }
        }
    }
}
