//! Errors raised at bind and export time

use std::any::TypeId;
#[cfg(feature = "json")]
use std::collections::BTreeMap;
#[cfg(feature = "json")]
use std::error::Error as _;

use tola_opts::prelude::*;
use tola_opts::FieldDescriptor;

#[derive(OptionSlot, Default)]
struct Level(u8);

// Same slot under another name: the derive cannot see through it
type Threshold = Level;

#[derive(OptionSpec, Default)]
struct AliasedSpec {
    level: Level,
    threshold: Threshold,
}

#[test]
fn test_duplicate_slot_rejected_at_bind() {
    let err = OptionsBinder::<AliasedSpec>::with_default().err().unwrap();

    match &err {
        OptionsError::DuplicateSlot { spec, slot, first, second } => {
            assert_eq!(*spec, "AliasedSpec");
            assert_eq!(*slot, "Threshold");
            assert_eq!(*first, "level");
            assert_eq!(*second, "threshold");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(
        err.to_string(),
        "spec `AliasedSpec` uses slot `Threshold` for both `level` and `threshold`"
    );
}

#[derive(OptionSlot, Default)]
struct Left(u8);

#[derive(OptionSlot, Default)]
struct Right(u8);

// Hand-written table whose `right` field claims to take `Left`
#[derive(Default)]
struct Mismatched {
    right: Right,
}

impl OptionSpec for Mismatched {
    const NAME: &'static str = "Mismatched";
    const FIELDS: &'static [FieldDescriptor<Self>] = &[FieldDescriptor {
        name: "right",
        slot_type: TypeId::of::<Left>,
        slot_name: "Left",
        tags: &[],
        get: |spec| &spec.right,
        get_mut: |spec| &mut spec.right,
    }];
}

#[test]
fn test_field_refusing_option_is_unknown() {
    let mut binder = OptionsBinder::<Mismatched>::with_default().unwrap();
    let err = binder.assign(options![Left(1)]).err().unwrap();

    match err {
        OptionsError::UnknownOption { spec, option } => {
            assert_eq!(spec, "Mismatched");
            assert_eq!(option, "Left");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!binder.is_set("right"));
    assert!(!binder.is_slot_set::<Left>());
    assert_eq!(binder.set_fields().count(), 0);
    assert_eq!(binder.spec().right.0, 0);
}

// JSON object keys must be strings
#[cfg(feature = "json")]
#[derive(OptionSlot, Default)]
struct Matrix(BTreeMap<Vec<u8>, u8>);

#[cfg(feature = "json")]
#[derive(OptionSlot, Default)]
struct Label(String);

#[cfg(feature = "json")]
#[derive(OptionSpec, Default)]
struct MatrixSpec {
    label: Label,
    matrix: Matrix,
}

#[cfg(feature = "json")]
#[test]
fn test_export_failure_names_field() {
    let mut cells = BTreeMap::new();
    cells.insert(vec![0, 1], 7);

    let binder = OptionsBinder::<MatrixSpec>::with_default()
        .unwrap()
        .with(Label("ok".into()))
        .unwrap()
        .with(Matrix(cells))
        .unwrap();

    let err = binder.export_to_map().err().unwrap();
    assert!(matches!(err, OptionsError::Export { field: "matrix", .. }));
    assert_eq!(err.to_string(), "failed to export option `matrix`");
    assert!(err.source().is_some());

    // Serialization-free export still works
    assert_eq!(binder.export_refs_with_tag("").len(), 2);
}

#[test]
fn test_empty_spec() {
    #[derive(OptionSpec, Default)]
    struct Empty {}

    let mut binder = OptionsBinder::<Empty>::with_default().unwrap();
    assert!(binder.assign(options![Level(1)]).is_err());
    assert!(binder.assign(options![]).is_ok());
    assert!(binder.export_refs_with_tag("").is_empty());
}
