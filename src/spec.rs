//! Spec types and their static field tables
//!
//! `#[derive(OptionSpec)]` turns a struct whose fields are slots into a
//! declarative table: one [`FieldDescriptor`] per field, in declaration order.
//! The table is a `const`, shared by every binder of the same spec type.
//!
//! ```text
//! struct ServerSpec {                 FIELDS = [
//!     #[opt(js = "host")]               { name: "host", slot: Host, tags: [js=host] },
//!     host: Host,            ==>        { name: "port", slot: Port, tags: [] },
//!     port: Port,                     ]
//! }
//! ```

use core::any::TypeId;
use core::fmt;

use crate::slot::DynOption;

/// Static description of one spec field.
pub struct FieldDescriptor<S: 'static> {
    /// Declared field name.
    pub name: &'static str,
    /// Identity of the field's slot type.
    pub slot_type: fn() -> TypeId,
    /// Declared slot type, as written.
    pub slot_name: &'static str,
    /// Export aliases: `(namespace, alias)`.
    pub tags: &'static [(&'static str, &'static str)],
    /// Borrow the field's current option value.
    pub get: fn(&S) -> &dyn DynOption,
    /// Borrow the field mutably, for assignment.
    pub get_mut: fn(&mut S) -> &mut dyn DynOption,
}

impl<S: 'static> FieldDescriptor<S> {
    /// Alias under `namespace`, if one is declared and non-empty.
    pub fn tag(&self, namespace: &str) -> Option<&'static str> {
        if namespace.is_empty() {
            return None;
        }
        self.tags
            .iter()
            .find(|(ns, _)| *ns == namespace)
            .map(|(_, alias)| *alias)
            .filter(|alias| !alias.is_empty())
    }

    /// Key this field exports under: the alias when present, the field name otherwise.
    pub fn export_key(&self, namespace: &str) -> &'static str {
        self.tag(namespace).unwrap_or(self.name)
    }
}

impl<S: 'static> fmt::Debug for FieldDescriptor<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("slot", &self.slot_name)
            .field("tags", &self.tags)
            .finish()
    }
}

/// A spec: a struct whose every field is a distinct [`OptionSlot`](crate::OptionSlot).
///
/// Derive it rather than implementing it by hand:
///
/// ```
/// use tola_opts::{OptionSlot, OptionSpec};
///
/// #[derive(OptionSlot, Default)]
/// struct Host(String);
///
/// #[derive(OptionSlot, Default)]
/// struct Port(u16);
///
/// #[derive(OptionSpec, Default)]
/// struct ServerSpec {
///     #[opt(js = "hostName")]
///     host: Host,
///     port: Port,
/// }
///
/// let host = ServerSpec::field("host").unwrap();
/// assert_eq!(host.export_key("js"), "hostName");
/// assert_eq!(ServerSpec::field("port").unwrap().export_key("js"), "port");
/// ```
pub trait OptionSpec: Sized + 'static {
    /// Declared name of the spec type.
    const NAME: &'static str;

    /// One descriptor per field, in declaration order.
    const FIELDS: &'static [FieldDescriptor<Self>];

    /// Look up a field by its declared name.
    fn field(name: &str) -> Option<&'static FieldDescriptor<Self>> {
        Self::FIELDS.iter().find(|field| field.name == name)
    }
}
