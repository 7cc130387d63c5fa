//! Syntax sugar macros
//!
//! - `options![a, b, c]` - heterogeneous option list for `OptionsBinder::assign`

/// Build a list of option values of different slot types.
///
/// Expands to a `Vec<Box<dyn DynOption>>`, the argument type of
/// [`OptionsBinder::assign`](crate::OptionsBinder::assign).
///
/// ```
/// use tola_opts::{options, DynOption, OptionSlot};
///
/// #[derive(OptionSlot)]
/// struct Verbose(bool);
///
/// #[derive(OptionSlot)]
/// struct Level(u8);
///
/// let opts = options![Verbose(true), Level(3)];
/// assert_eq!(opts.len(), 2);
/// assert_eq!(opts[1].slot_name(), "Level");
///
/// let none = options![];
/// assert!(none.is_empty());
/// ```
#[macro_export]
macro_rules! options {
    () => {
        ::std::vec::Vec::<::std::boxed::Box<dyn $crate::DynOption>>::new()
    };
    ($($option:expr),+ $(,)?) => {
        ::std::vec![
            $(::std::boxed::Box::new($option) as ::std::boxed::Box<dyn $crate::DynOption>),+
        ]
    };
}
