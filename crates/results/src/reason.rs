//! Typed failure reasons.
//!
//! A [`FailureReason`] answers the question "why did this operation fail?".
//! Each domain defines its own reason types, carrying whatever context that
//! domain needs (a message, an offending identifier, an error code). The
//! outcome containers never look inside a reason; they only hold it.
//!
//! Reasons are held behind a [`Reason`] handle: a shared, immutable pointer
//! that supports type inspection ([`Reason::is`], [`Reason::downcast_ref`])
//! and identity comparison ([`Reason::ptr_eq`]).

use std::any::{self, Any};
use std::fmt;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Capability
// ---------------------------------------------------------------------------

/// Marker capability for any type that describes why an operation failed.
///
/// Implementors are plain immutable values. `Display` provides the
/// human-readable description; `Debug` is used in assertion messages.
///
/// Most reason types are declared with [`failure_reason!`](crate::failure_reason),
/// but a manual implementation is a one-liner:
///
/// ```
/// use std::fmt;
/// use results::FailureReason;
///
/// #[derive(Debug)]
/// struct QuotaExhausted {
///     remaining: u32,
/// }
///
/// impl fmt::Display for QuotaExhausted {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "quota exhausted ({} remaining)", self.remaining)
///     }
/// }
///
/// impl FailureReason for QuotaExhausted {}
/// ```
pub trait FailureReason: AsAny + fmt::Debug + fmt::Display + Send + Sync {
    /// Returns the fully-qualified type name of the concrete reason.
    fn reason_name(&self) -> &'static str {
        any::type_name::<Self>()
    }
}

/// Type-erasure bridge used by [`Reason`] for downcasting.
#[doc(hidden)]
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ---------------------------------------------------------------------------
// Shared handle
// ---------------------------------------------------------------------------

/// A shared, immutable handle to a [`FailureReason`].
///
/// Cloning a [`Reason`] shares the same underlying instance; it never copies
/// the reason itself. Two handles cloned from each other are [`Reason::ptr_eq`].
#[derive(Clone)]
pub struct Reason(Arc<dyn FailureReason>);

impl Reason {
    /// Wraps a concrete reason in a new handle.
    pub fn new<R: FailureReason>(reason: R) -> Self {
        Self(Arc::new(reason))
    }

    /// Wraps an already-shared reason without re-allocating.
    pub fn from_arc(reason: Arc<dyn FailureReason>) -> Self {
        Self(reason)
    }

    /// Returns `true` if the held reason is of type `R`.
    pub fn is<R: FailureReason>(&self) -> bool {
        self.as_any_ref().is::<R>()
    }

    /// Returns the held reason as `R`, or `None` if it is another type.
    pub fn downcast_ref<R: FailureReason>(&self) -> Option<&R> {
        self.as_any_ref().downcast_ref::<R>()
    }

    /// Returns `true` if both handles point at the same reason instance.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        // Compare data pointers only; vtable pointers may differ across codegen units.
        std::ptr::addr_eq(Arc::as_ptr(&a.0), Arc::as_ptr(&b.0))
    }

    /// Returns the type name of the held reason.
    pub fn reason_name(&self) -> &'static str {
        self.0.reason_name()
    }

    /// Borrows the held reason as a trait object.
    pub fn as_dyn(&self) -> &dyn FailureReason {
        &*self.0
    }

    fn as_any_ref(&self) -> &dyn Any {
        AsAny::as_any(&*self.0)
    }
}

impl<R: FailureReason> From<R> for Reason {
    fn from(reason: R) -> Self {
        Self::new(reason)
    }
}

impl From<Arc<dyn FailureReason>> for Reason {
    fn from(reason: Arc<dyn FailureReason>) -> Self {
        Self::from_arc(reason)
    }
}

impl fmt::Debug for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

// ---------------------------------------------------------------------------
// Macro for declaring reason types.
// Generates: struct (unit or named fields) with forwarded attributes,
// Debug/Clone/PartialEq, Display from the message template, and the
// FailureReason impl.
// ---------------------------------------------------------------------------

/// Declares a failure reason type.
///
/// The message template is a `format!` string; named fields are in scope by
/// name. Every reason derives `Debug`, `Clone` and `PartialEq`; unit reasons
/// also derive `Copy`, `Default`, `Eq` and `Hash`, so they work with the
/// `fail_default` constructors. Attributes placed after `#[message]` are
/// forwarded onto the struct, which is how a reason with fields opts into
/// `Default` or `Eq`:
///
/// ```
/// use results::ValueOutcome;
///
/// results::failure_reason! {
///     /// The account has used more than its allowance.
///     #[message = "over quota by {excess}"]
///     #[derive(Default, Eq, Hash)]
///     pub struct OverQuota {
///         pub excess: u32,
///     }
/// }
///
/// let outcome = ValueOutcome::<u32>::fail_default::<OverQuota>();
/// assert!(outcome.failure_reason().is_some_and(|r| r.is::<OverQuota>()));
/// ```
///
/// ```
/// results::failure_reason! {
///     /// The requested order does not exist.
///     #[message = "order not found"]
///     pub struct OrderNotFound;
/// }
///
/// results::failure_reason! {
///     /// The order is in a state that forbids the requested transition.
///     #[message = "order {order_id} cannot move from {from} to {to}"]
///     pub struct IllegalTransition {
///         pub order_id: u64,
///         pub from: String,
///         pub to: String,
///     }
/// }
///
/// let reason = IllegalTransition { order_id: 7, from: "shipped".into(), to: "draft".into() };
/// assert_eq!(reason.to_string(), "order 7 cannot move from shipped to draft");
/// assert_eq!(OrderNotFound.to_string(), "order not found");
/// ```
#[macro_export]
macro_rules! failure_reason {
    (
        $(#[doc = $doc:literal])*
        #[message = $msg:literal]
        $(#[$attr:meta])*
        $vis:vis struct $name:ident;
    ) => {
        $(#[doc = $doc])*
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($msg)
            }
        }

        impl $crate::FailureReason for $name {}
    };
    (
        $(#[doc = $doc:literal])*
        #[message = $msg:literal]
        $(#[$attr:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fattr:meta])*
                $fvis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[doc = $doc])*
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            $(
                $(#[$fattr])*
                $fvis $field: $ty,
            )*
        }

        impl ::std::fmt::Display for $name {
            #[allow(unused_variables)]
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let Self { $($field),* } = self;
                write!(f, $msg)
            }
        }

        impl $crate::FailureReason for $name {}
    };
}
