//! Option slots
//!
//! A slot is a distinct type standing for exactly one option. Its identity is
//! the option's identity; its single payload is the configured value.
//!
//! ```text
//! struct RouteName(String);      // slot type  -> identity (TypeId)
//! RouteName("home".into())       // option value -> payload "home"
//! ```

use core::any::{Any, TypeId};
use core::fmt;
use core::marker::PhantomData;
use core::ops::Deref;

// =============================================================================
// Payload bound
// =============================================================================

/// Bound on slot payloads.
///
/// With the `json` feature the payload must also be `Serialize`, so that set
/// options can be exported to a JSON map.
#[cfg(feature = "json")]
pub trait Payload: Any + serde::Serialize {}
#[cfg(feature = "json")]
impl<T: Any + serde::Serialize> Payload for T {}

/// Bound on slot payloads.
#[cfg(not(feature = "json"))]
pub trait Payload: Any {}
#[cfg(not(feature = "json"))]
impl<T: Any> Payload for T {}

// =============================================================================
// OptionSlot
// =============================================================================

/// A slot type: one option, one payload.
///
/// Usually derived:
///
/// ```
/// use tola_opts::OptionSlot;
///
/// #[derive(OptionSlot)]
/// struct RouteName(String);
///
/// let name = RouteName::new("home".to_string());
/// assert_eq!(name.value(), "home");
/// assert_eq!(RouteName::name(), "RouteName");
/// ```
pub trait OptionSlot: Sized + 'static {
    /// The configured value carried by this slot.
    type Value: Payload;

    /// Wrap a payload.
    fn new(value: Self::Value) -> Self;

    /// Borrow the payload.
    fn value(&self) -> &Self::Value;

    /// Unwrap the payload.
    fn into_value(self) -> Self::Value;

    /// Display name of the slot type, without module path. Used in diagnostics.
    fn name() -> &'static str {
        short_type_name(core::any::type_name::<Self>())
    }
}

/// `a::b::Name<c::D>` -> `Name<c::D>`
fn short_type_name(full: &'static str) -> &'static str {
    let head = full.split('<').next().unwrap_or(full);
    match head.rfind("::") {
        Some(at) => &full[at + 2..],
        None => full,
    }
}

// =============================================================================
// DynOption: type-erased option value
// =============================================================================

/// Object-safe view of an option value.
///
/// Implemented for every [`OptionSlot`]; this is what an options list holds
/// (see [`options!`](crate::options)) and what spec fields are accessed through.
pub trait DynOption: Any {
    /// Identity of the concrete slot type.
    fn slot_type(&self) -> TypeId;

    /// Display name of the concrete slot type.
    fn slot_name(&self) -> &'static str;

    /// The unwrapped payload.
    fn payload(&self) -> &dyn Any;

    /// The unwrapped payload as JSON.
    #[cfg(feature = "json")]
    fn to_json(&self) -> serde_json::Result<serde_json::Value>;

    /// The whole option value, for downcasting to its slot type.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Overwrite `self` with `option` if both are the same slot type.
    ///
    /// Returns `false` and leaves `self` untouched otherwise.
    fn replace_with(&mut self, option: Box<dyn DynOption>) -> bool;
}

impl<O: OptionSlot> DynOption for O {
    fn slot_type(&self) -> TypeId {
        TypeId::of::<O>()
    }

    fn slot_name(&self) -> &'static str {
        O::name()
    }

    fn payload(&self) -> &dyn Any {
        self.value()
    }

    #[cfg(feature = "json")]
    fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self.value())
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn replace_with(&mut self, option: Box<dyn DynOption>) -> bool {
        match option.into_any().downcast::<O>() {
            Ok(option) => {
                *self = *option;
                true
            }
            Err(_) => false,
        }
    }
}

impl fmt::Debug for dyn DynOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DynOption").field(&self.slot_name()).finish()
    }
}

// =============================================================================
// Slot<Tag, T>: generic slot
// =============================================================================

/// Generic slot: the `Tag` type gives the identity, `T` is the payload.
///
/// Useful when a marker type already exists, or to avoid a derive:
///
/// ```
/// use tola_opts::{OptionSlot, Slot};
///
/// enum TimeoutTag {}
/// type Timeout = Slot<TimeoutTag, u64>;
///
/// let timeout = Timeout::new(30);
/// assert_eq!(*timeout, 30);
/// assert_eq!(Timeout::name(), "TimeoutTag");
/// ```
pub struct Slot<Tag, T> {
    value: T,
    _tag: PhantomData<fn() -> Tag>,
}

impl<Tag: 'static, T: Payload> OptionSlot for Slot<Tag, T> {
    type Value = T;

    fn new(value: T) -> Self {
        Slot { value, _tag: PhantomData }
    }

    fn value(&self) -> &T {
        &self.value
    }

    fn into_value(self) -> T {
        self.value
    }

    fn name() -> &'static str {
        short_type_name(core::any::type_name::<Tag>())
    }
}

impl<Tag, T> Deref for Slot<Tag, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

// Manual impls: the tag is a marker and needs none of these traits.
impl<Tag, T: Default> Default for Slot<Tag, T> {
    fn default() -> Self {
        Slot { value: T::default(), _tag: PhantomData }
    }
}

impl<Tag, T: Clone> Clone for Slot<Tag, T> {
    fn clone(&self) -> Self {
        Slot { value: self.value.clone(), _tag: PhantomData }
    }
}

impl<Tag, T: PartialEq> PartialEq for Slot<Tag, T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<Tag, T: fmt::Debug> fmt::Debug for Slot<Tag, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Slot").field(&self.value).finish()
    }
}

impl<Tag, T> From<T> for Slot<Tag, T> {
    fn from(value: T) -> Self {
        Slot { value, _tag: PhantomData }
    }
}
