//! The options binder
//!
//! Matches option values to spec fields by slot type, copies them in, and
//! remembers which fields were explicitly set.
//!
//! ```text
//! options![Name("abc"), Num(42)]
//!     |            |
//!     | TypeId     | TypeId          lookup: TypeId -> field index
//!     v            v
//! spec.name     spec.num             assigned: [true, true, false]
//! ```
//!
//! A binder is single-threaded: `assign` takes `&mut self`, reads take `&self`.

use core::any::{Any, TypeId};
use core::ops::{Deref, DerefMut};
use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::error::{OptionsError, Result};
use crate::slot::{DynOption, OptionSlot};
use crate::spec::{FieldDescriptor, OptionSpec};

/// Bound spec: borrowed from the caller or owned by the binder.
enum SpecRef<'a, S> {
    Borrowed(&'a mut S),
    Owned(S),
}

impl<S> Deref for SpecRef<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        match self {
            SpecRef::Borrowed(spec) => spec,
            SpecRef::Owned(spec) => spec,
        }
    }
}

impl<S> DerefMut for SpecRef<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        match self {
            SpecRef::Borrowed(spec) => spec,
            SpecRef::Owned(spec) => spec,
        }
    }
}

/// Binds option values to a spec and tracks which fields were set.
///
/// # Example
///
/// ```
/// use tola_opts::{options, OptionSlot, OptionSpec, OptionsBinder};
///
/// #[derive(OptionSlot, Default)]
/// struct Name(String);
///
/// #[derive(OptionSlot, Default)]
/// struct Retries(u32);
///
/// #[derive(OptionSpec, Default)]
/// struct JobSpec {
///     #[opt(js = "jobName")]
///     name: Name,
///     retries: Retries,
/// }
///
/// let mut spec = JobSpec::default();
/// let mut binder = OptionsBinder::new(&mut spec)?;
/// binder.assign(options![Name("nightly".into())])?;
///
/// assert!(binder.is_set("name"));
/// assert!(!binder.is_set("retries"));
/// assert_eq!(binder.spec().name.0, "nightly");
///
/// #[cfg(feature = "json")]
/// let map = binder.export_to_map_with_tag("js")?;
/// #[cfg(feature = "json")]
/// assert_eq!(map["jobName"], "nightly");
/// #[cfg(feature = "json")]
/// assert!(!map.contains_key("retries"));
/// # Ok::<(), tola_opts::OptionsError>(())
/// ```
pub struct OptionsBinder<'a, S: OptionSpec> {
    spec: SpecRef<'a, S>,
    // Built once, never modified.
    lookup: HashMap<TypeId, usize>,
    // Indexed like `S::FIELDS`. Monotonic.
    assigned: Vec<bool>,
}

impl<'a, S: OptionSpec> OptionsBinder<'a, S> {
    /// Bind to a caller-owned spec.
    ///
    /// Fails with [`OptionsError::DuplicateSlot`] if two fields share a slot type.
    pub fn new(spec: &'a mut S) -> Result<Self> {
        Self::bind(SpecRef::Borrowed(spec))
    }

    fn bind(spec: SpecRef<'a, S>) -> Result<Self> {
        let mut lookup = HashMap::with_capacity(S::FIELDS.len());
        for (index, field) in S::FIELDS.iter().enumerate() {
            if let Some(first) = lookup.insert((field.slot_type)(), index) {
                return Err(OptionsError::DuplicateSlot {
                    spec: S::NAME,
                    slot: field.slot_name,
                    first: S::FIELDS[first].name,
                    second: field.name,
                });
            }
        }
        debug!(spec = S::NAME, fields = S::FIELDS.len(), "options spec bound");
        Ok(OptionsBinder {
            spec,
            lookup,
            assigned: vec![false; S::FIELDS.len()],
        })
    }

    /// Apply options in order.
    ///
    /// Each option replaces the field of the same slot type and marks it set.
    /// Not transactional: if an option is rejected, the options before it
    /// stay applied.
    pub fn assign<I>(&mut self, options: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = Box<dyn DynOption>>,
    {
        for option in options {
            self.apply(option)?;
        }
        Ok(self)
    }

    /// Apply a single, statically typed option.
    pub fn set<O: OptionSlot>(&mut self, option: O) -> Result<&mut Self> {
        self.apply(Box::new(option))?;
        Ok(self)
    }

    /// By-value form of [`set`](Self::set), for building a binder in one expression.
    pub fn with<O: OptionSlot>(mut self, option: O) -> Result<Self> {
        self.apply(Box::new(option))?;
        Ok(self)
    }

    fn apply(&mut self, option: Box<dyn DynOption>) -> Result<()> {
        let option_name = option.slot_name();
        let unknown = || OptionsError::UnknownOption {
            spec: S::NAME,
            option: option_name,
        };

        let Some(&index) = self.lookup.get(&option.slot_type()) else {
            warn!(spec = S::NAME, option = option_name, "no field takes this option");
            return Err(unknown());
        };

        let field = &S::FIELDS[index];
        if !(field.get_mut)(&mut self.spec).replace_with(option) {
            warn!(
                spec = S::NAME,
                field = field.name,
                option = option_name,
                "field rejected option"
            );
            return Err(unknown());
        }

        self.assigned[index] = true;
        trace!(spec = S::NAME, field = field.name, option = option_name, "option set");
        Ok(())
    }

    /// The bound spec, live.
    pub fn spec(&self) -> &S {
        &self.spec
    }

    /// Give back the spec if the binder owns it.
    pub fn into_spec(self) -> Option<S> {
        match self.spec {
            SpecRef::Owned(spec) => Some(spec),
            SpecRef::Borrowed(_) => None,
        }
    }

    /// Whether the field named `field` was explicitly assigned.
    ///
    /// `false` for names that are not fields of the spec.
    pub fn is_set(&self, field: &str) -> bool {
        S::FIELDS
            .iter()
            .position(|descriptor| descriptor.name == field)
            .is_some_and(|index| self.assigned[index])
    }

    /// Whether the field holding slot `O` was explicitly assigned.
    pub fn is_slot_set<O: OptionSlot>(&self) -> bool {
        self.lookup
            .get(&TypeId::of::<O>())
            .is_some_and(|&index| self.assigned[index])
    }

    /// Names of the assigned fields, in declaration order.
    pub fn set_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.set_options().map(|(field, _)| field.name)
    }

    fn set_options(&self) -> impl Iterator<Item = (&'static FieldDescriptor<S>, &dyn DynOption)> + '_ {
        S::FIELDS
            .iter()
            .zip(&self.assigned)
            .filter(|(_, assigned)| **assigned)
            .map(|(field, _)| (field, (field.get)(&self.spec)))
    }

    /// Assigned payloads keyed by export key, without serialization.
    ///
    /// Keys follow the same rules as [`export_to_map_with_tag`](Self::export_to_map_with_tag).
    pub fn export_refs_with_tag(&self, namespace: &str) -> Vec<(&'static str, &dyn Any)> {
        self.set_options()
            .map(|(field, option)| (field.export_key(namespace), option.payload()))
            .collect()
    }
}

#[cfg(feature = "json")]
impl<S: OptionSpec> OptionsBinder<'_, S> {
    /// Export assigned options keyed by field name.
    pub fn export_to_map(&self) -> Result<serde_json::Map<String, serde_json::Value>> {
        self.export_to_map_with_tag("")
    }

    /// Export assigned options, keyed by their alias under `namespace`.
    ///
    /// Fields without a (non-empty) alias fall back to their declared name.
    /// Unset fields are left out. Values are the unwrapped payloads.
    pub fn export_to_map_with_tag(
        &self,
        namespace: &str,
    ) -> Result<serde_json::Map<String, serde_json::Value>> {
        let mut map = serde_json::Map::new();
        for (field, option) in self.set_options() {
            let value = option
                .to_json()
                .map_err(|source| OptionsError::Export { field: field.name, source })?;
            map.insert(field.export_key(namespace).to_owned(), value);
        }
        Ok(map)
    }
}

impl<S: OptionSpec> OptionsBinder<'static, S> {
    /// Bind to a spec owned by the binder.
    pub fn owned(spec: S) -> Result<Self> {
        Self::bind(SpecRef::Owned(spec))
    }

    /// Bind to a default-constructed spec owned by the binder.
    pub fn with_default() -> Result<Self>
    where
        S: Default,
    {
        Self::owned(S::default())
    }
}
