//! The absorbing `Nada` singleton.
//!
//! `Nada` represents a failed computation that keeps flowing down the happy path
//! instead of stopping it. Every operation on it hands the singleton back:
//!
//! - arithmetic with any operand, on either side
//! - indexing with any index or [`Slice`]
//! - calls with any arguments, and calls to any named method via [`Nada::attr`]
//!
//! It behaves as an empty container (zero length, nothing to iterate, falsy), and it
//! compares false against everything, itself included, so two failed results are
//! never mistaken for equal. Use [`Nada::ptr_eq`] for identity.
//!
//! The only way back to ordinary values is [`Nada::nada_get`].
//!
//! ```
//! use nada_sentinel::Nada;
//!
//! let failed = Nada::new();
//! let chained = failed.attr("foo").call((1,)).attr("bar").call_with((), [("x", 2)]);
//!
//! assert!(Nada::ptr_eq(&chained, &failed));
//! assert!(!(failed == failed));
//! assert_eq!(chained.nada_get(42), 42);
//! ```

use std::{
    any::Any,
    borrow::Cow,
    cmp::Ordering,
    fmt,
    hash::{BuildHasher, Hash, Hasher, RandomState},
    iter,
    ops::{Add, Div, Index, IndexMut, Mul, Neg, Not, Rem, Sub},
    ptr,
    sync::OnceLock,
};

use crate::sentinel::{get_or_create, Sentinel};
use crate::{Error, Slice};

/// Flavor of the marker `nada_get_or_nada` treats as "no alternate given".
const MARKER_FLAVOR: &str = "Nada";

/// Built inside `OnceLock::get_or_init`, so it must not reach the registry: a trace
/// callback that constructs `Nada` would re-enter the initializer.
struct Instance {
    hash: u64,
}

impl Instance {
    fn new() -> Self {
        let hash = RandomState::new().hash_one("Nada()");
        tracing::debug!(target: "nada_sentinel", hash, "Nada singleton initialized");
        Instance { hash }
    }
}

static INSTANCE: OnceLock<Instance> = OnceLock::new();

/// Handle to the process-wide "nothing" singleton.
///
/// Every `Nada` value points at the same instance; copying a handle never creates
/// another one.
#[derive(Clone, Copy)]
pub struct Nada {
    instance: &'static Instance,
}

impl Nada {
    /// Return the singleton, creating it on first use.
    pub fn new() -> Self {
        Nada {
            instance: INSTANCE.get_or_init(Instance::new),
        }
    }

    /// Identity test. Always true for two `Nada` handles.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        ptr::eq(this.instance, other.instance)
    }

    /// The internal marker sentinel that stands for "no alternate value".
    ///
    /// This is the `"Nada"`-flavored sentinel of the process-wide registry, so it is
    /// created there on first request like any other.
    pub fn marker() -> Sentinel<&'static str> {
        get_or_create(MARKER_FLAVOR)
    }

    /// The fixed hash chosen when the singleton was created.
    pub fn hash_value(&self) -> u64 {
        self.instance.hash
    }

    /// Truthiness. Always false.
    pub const fn is_truthy(&self) -> bool {
        false
    }

    /// Length as a container. Always 0.
    pub const fn len(&self) -> usize {
        0
    }

    /// Always true.
    pub const fn is_empty(&self) -> bool {
        true
    }

    /// An empty iterator. Every call yields a fresh one, so iteration is restartable.
    pub fn iter<T>(&self) -> iter::Empty<T> {
        iter::empty()
    }

    /// Call the singleton with any positional arguments.
    pub fn call<A>(&self, _args: A) -> Nada {
        *self
    }

    /// Call the singleton with positional and keyword arguments.
    pub fn call_with<A, W>(&self, _args: A, _kwargs: W) -> Nada {
        *self
    }

    /// Resolve any method name to a callable that returns the singleton.
    pub fn attr(&self, name: impl Into<Cow<'static, str>>) -> Method {
        Method {
            name: name.into(),
            target: *self,
        }
    }

    /// Shorthand for `attr(name).call(args)`.
    pub fn invoke<A>(&self, name: &str, args: A) -> Nada {
        self.attr(name.to_owned()).call(args)
    }

    /// Never runs `f`.
    pub fn map<F>(&self, _f: F) -> Nada {
        *self
    }

    /// Read any index. Same as `nada[index]` but by value.
    pub fn get_item<I>(&self, _index: I) -> Nada {
        *self
    }

    /// Write any value at any index. Nothing changes.
    pub fn set_item<I, V>(&self, _index: I, _value: V) {}

    /// Assign `items` to `slice`. Nothing changes.
    ///
    /// # Errors
    ///
    /// - [`Error::SizeMismatch`] if `slice` is extended and `items` has a different length
    /// - [`Error::ZeroStep`] if `slice` has a step of 0
    pub fn set_slice<I>(&self, slice: impl Into<Slice>, items: I) -> Result<(), Error>
    where
        I: IntoIterator,
    {
        let slice = slice.into();
        if slice.is_extended() {
            slice.check_assign(items.into_iter().count())?;
        }
        Ok(())
    }

    /// Leave the absorbing chain: return the alternate value.
    pub fn nada_get<T>(&self, alt: T) -> T {
        alt
    }

    /// Like [`Nada::nada_get`], but an alternate that is [`Nada::marker`] or `Nada`
    /// itself means "no alternate" and yields the singleton.
    pub fn nada_get_or_nada<T: Any>(&self, alt: T) -> Recovered<T> {
        let erased: &dyn Any = &alt;
        let is_marker = erased
            .downcast_ref::<Sentinel<&'static str>>()
            .is_some_and(|sentinel| {
                *sentinel.flavor() == MARKER_FLAVOR && *sentinel == Nada::marker()
            });

        if is_marker || erased.is::<Nada>() {
            Recovered::Nada(*self)
        } else {
            Recovered::Value(alt)
        }
    }

    /// Always `None`.
    pub fn into_option<T>(self) -> Option<T> {
        None
    }
}

impl Default for Nada {
    fn default() -> Self {
        Nada::new()
    }
}

impl fmt::Debug for Nada {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Nada()")
    }
}

impl fmt::Display for Nada {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Nada()")
    }
}

impl Hash for Nada {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.instance.hash);
    }
}

impl From<Nada> for bool {
    fn from(_: Nada) -> bool {
        false
    }
}

impl Not for Nada {
    type Output = bool;

    fn not(self) -> bool {
        true
    }
}

impl IntoIterator for Nada {
    type Item = Nada;
    type IntoIter = iter::Empty<Nada>;

    fn into_iter(self) -> Self::IntoIter {
        iter::empty()
    }
}

impl IntoIterator for &Nada {
    type Item = Nada;
    type IntoIter = iter::Empty<Nada>;

    fn into_iter(self) -> Self::IntoIter {
        iter::empty()
    }
}

impl<I> Index<I> for Nada {
    type Output = Nada;

    fn index(&self, _index: I) -> &Nada {
        self
    }
}

impl<I> IndexMut<I> for Nada {
    fn index_mut(&mut self, _index: I) -> &mut Nada {
        self
    }
}

// -------------------------------------------------------------------------------------------------
// Comparisons: false against everything, including itself
// -------------------------------------------------------------------------------------------------

#[allow(clippy::partialeq_ne_impl)]
impl<T: ?Sized> PartialEq<T> for Nada {
    fn eq(&self, _other: &T) -> bool {
        false
    }

    fn ne(&self, _other: &T) -> bool {
        false
    }
}

impl<T: ?Sized> PartialOrd<T> for Nada {
    fn partial_cmp(&self, _other: &T) -> Option<Ordering> {
        None
    }
}

// -------------------------------------------------------------------------------------------------
// Arithmetic: the singleton absorbs any operand
// -------------------------------------------------------------------------------------------------

macro_rules! absorb_binary {
    ($($trait:ident::$method:ident),* $(,)?) => {
        $(
            impl<T> $trait<T> for Nada {
                type Output = Nada;

                fn $method(self, _rhs: T) -> Nada {
                    self
                }
            }
        )*
    };
}

absorb_binary!(Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem);

impl Neg for Nada {
    type Output = Nada;

    fn neg(self) -> Nada {
        self
    }
}

/// Reflected comparisons (`5 == nada`) for foreign left-hand types.
macro_rules! reflect_compare {
    ($($ty:ty),* $(,)?) => {
        $(
            #[allow(clippy::partialeq_ne_impl)]
            impl PartialEq<Nada> for $ty {
                fn eq(&self, _other: &Nada) -> bool {
                    false
                }

                fn ne(&self, _other: &Nada) -> bool {
                    false
                }
            }

            impl PartialOrd<Nada> for $ty {
                fn partial_cmp(&self, _other: &Nada) -> Option<Ordering> {
                    None
                }
            }
        )*
    };
}

/// Reflected arithmetic (`99 + nada`) for foreign left-hand types.
macro_rules! reflect_arith {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Add<Nada> for $ty {
                type Output = Nada;
                fn add(self, rhs: Nada) -> Nada {
                    rhs
                }
            }

            impl Sub<Nada> for $ty {
                type Output = Nada;
                fn sub(self, rhs: Nada) -> Nada {
                    rhs
                }
            }

            impl Mul<Nada> for $ty {
                type Output = Nada;
                fn mul(self, rhs: Nada) -> Nada {
                    rhs
                }
            }

            impl Div<Nada> for $ty {
                type Output = Nada;
                fn div(self, rhs: Nada) -> Nada {
                    rhs
                }
            }

            impl Rem<Nada> for $ty {
                type Output = Nada;
                fn rem(self, rhs: Nada) -> Nada {
                    rhs
                }
            }
        )*
    };
}

reflect_compare!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String, &str,
);

// No `String + Nada`: a second `Add` impl on `String` breaks `s + &other` coercion
// in every crate of the build.
reflect_arith!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

// -------------------------------------------------------------------------------------------------
// Method-missing and recovery helpers
// -------------------------------------------------------------------------------------------------

/// A callable produced by [`Nada::attr`] for an arbitrary method name.
#[derive(Debug, Clone)]
pub struct Method {
    name: Cow<'static, str>,
    target: Nada,
}

impl Method {
    /// The method name this callable was resolved from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Call with positional arguments. Returns the singleton.
    pub fn call<A>(&self, _args: A) -> Nada {
        self.target
    }

    /// Call with positional and keyword arguments. Returns the singleton.
    pub fn call_with<A, W>(&self, _args: A, _kwargs: W) -> Nada {
        self.target
    }
}

/// Outcome of [`Nada::nada_get_or_nada`].
#[derive(Debug, Clone, Copy)]
pub enum Recovered<T> {
    /// A real alternate value was supplied.
    Value(T),
    /// The default marker was supplied; the chain stays absorbed.
    Nada(Nada),
}

impl<T> Recovered<T> {
    /// True when the chain stayed absorbed.
    pub fn is_nada(&self) -> bool {
        matches!(self, Recovered::Nada(_))
    }

    /// The alternate value, or `None` when the chain stayed absorbed.
    pub fn into_option(self) -> Option<T> {
        match self {
            Recovered::Value(value) => Some(value),
            Recovered::Nada(_) => None,
        }
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
