//! Staged outcome construction.
//!
//! [`PendingOutcome<T>`] fixes the value type of an outcome before the
//! operation knows whether it will succeed:
//!
//! ```
//! use results::{of_type, ValueOutcome};
//!
//! results::failure_reason! {
//!     #[message = "no stock for {sku}"]
//!     pub struct OutOfStock {
//!         pub sku: String,
//!     }
//! }
//!
//! fn reserve(sku: &str, available: u32) -> ValueOutcome<u32> {
//!     let outcome = of_type::<u32>();
//!     if available == 0 {
//!         return outcome.fail(OutOfStock { sku: sku.to_string() });
//!     }
//!     outcome.success(available - 1)
//! }
//!
//! assert!(reserve("a-1", 0).is_failed());
//! assert_eq!(reserve("a-1", 3).value(), Some(&2));
//! ```
//!
//! The token holds no state. Each terminal call is an independent
//! construction: calling both, or one twice, yields unrelated outcomes.

use std::fmt;
use std::marker::PhantomData;

use crate::outcome::ValueOutcome;
use crate::reason::Reason;

/// A stateless token for an outcome whose value type is already known.
#[must_use = "a pending outcome does nothing until `success` or `fail` is called"]
pub struct PendingOutcome<T> {
    // fn() -> T keeps the token Send + Sync + Copy regardless of T.
    _value: PhantomData<fn() -> T>,
}

impl<T> PendingOutcome<T> {
    /// Creates a token for an outcome of type `ValueOutcome<T>`.
    pub const fn new() -> Self {
        Self { _value: PhantomData }
    }

    /// Resolves to a successful outcome holding `value`.
    pub fn success(self, value: T) -> ValueOutcome<T> {
        ValueOutcome::success(value)
    }

    /// Resolves to a failed outcome holding `reason`.
    pub fn fail(self, reason: impl Into<Reason>) -> ValueOutcome<T> {
        ValueOutcome::fail(reason)
    }
}

// Manual impls: derives would require T to implement each trait.
impl<T> Clone for PendingOutcome<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PendingOutcome<T> {}

impl<T> Default for PendingOutcome<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for PendingOutcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PendingOutcome<{}>", std::any::type_name::<T>())
    }
}
