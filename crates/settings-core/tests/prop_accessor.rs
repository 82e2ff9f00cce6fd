/// Property-based tests for `Settings`.
///
/// Uses `proptest` to generate arbitrary value trees and key paths, checking
/// that exact-type extraction always succeeds, every other extraction fails
/// with the navigation path in its message, and navigation itself never fails.
use proptest::prelude::*;
use settings_core::{Settings, Value, ValueKind};

// ============================================================================
// Strategies
// ============================================================================

fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z_][a-z0-9_]{0,8}").unwrap()
}

/// Any non-container value, including `Absent`.
fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        ".{0,12}".prop_map(Value::String),
        prop::collection::vec(any::<u8>(), 0..12).prop_map(Value::Bytes),
        any::<isize>().prop_map(Value::Int),
        any::<i64>().prop_map(Value::Int64),
        any::<usize>().prop_map(Value::Uint),
        any::<u64>().prop_map(Value::Uint64),
        // NaN never equals itself, which would break the equality checks below.
        any::<f64>()
            .prop_filter("not NaN", |f| !f.is_nan())
            .prop_map(Value::Float64),
        any::<bool>().prop_map(Value::Bool),
        Just(Value::Absent),
    ]
}

/// Nested trees up to a few levels deep.
fn arb_tree() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
            prop::collection::btree_map(arb_key(), inner, 0..6).prop_map(Value::Mapping),
        ]
    })
}

fn arb_path() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_key(), 0..5)
}

/// Walk `path` by hand, the way `Settings::get` is expected to.
fn lookup<'a>(mut value: &'a Value, path: &[String]) -> Option<&'a Value> {
    for key in path {
        match value {
            Value::Mapping(map) => value = map.get(key)?,
            _ => return None,
        }
    }
    Some(value)
}

fn descend<'a>(settings: Settings<'a>, path: &[String]) -> Settings<'a> {
    path.iter().fold(settings, |s, key| s.get(key))
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn extraction_succeeds_only_for_exact_type(value in arb_scalar()) {
        let settings = Settings::new(&value);
        let kind = value.kind();

        prop_assert_eq!(settings.string().is_ok(), kind == ValueKind::String);
        prop_assert_eq!(
            settings.bytes().is_ok(),
            kind == ValueKind::String || kind == ValueKind::Bytes
        );
        prop_assert_eq!(settings.int().is_ok(), kind == ValueKind::Int);
        prop_assert_eq!(settings.int64().is_ok(), kind == ValueKind::Int64);
        prop_assert_eq!(settings.uint().is_ok(), kind == ValueKind::Uint);
        prop_assert_eq!(settings.uint64().is_ok(), kind == ValueKind::Uint64);
        prop_assert_eq!(settings.float64().is_ok(), kind == ValueKind::Float64);
    }

    #[test]
    fn exact_type_extracts_stored_value(value in arb_scalar()) {
        let settings = Settings::new(&value);
        match &value {
            Value::String(s) => {
                prop_assert_eq!(settings.string().unwrap(), s.as_str());
                prop_assert_eq!(settings.bytes().unwrap(), s.as_bytes());
            }
            Value::Bytes(b) => prop_assert_eq!(settings.bytes().unwrap(), b.as_slice()),
            Value::Int(n) => prop_assert_eq!(settings.int().unwrap(), *n),
            Value::Int64(n) => prop_assert_eq!(settings.int64().unwrap(), *n),
            Value::Uint(n) => prop_assert_eq!(settings.uint().unwrap(), *n),
            Value::Uint64(n) => prop_assert_eq!(settings.uint64().unwrap(), *n),
            Value::Float64(f) => prop_assert_eq!(settings.float64().unwrap().to_bits(), f.to_bits()),
            Value::Bool(_) | Value::List(_) | Value::Mapping(_) | Value::Absent => {}
        }
    }

    #[test]
    fn get_agrees_with_manual_lookup(tree in arb_tree(), path in arb_path()) {
        let settings = descend(Settings::new(&tree), &path);
        let expected = lookup(&tree, &path).unwrap_or(&Value::Absent);
        prop_assert_eq!(settings.value(), expected);
        prop_assert_eq!(settings.path().keys(), path.as_slice());
    }

    #[test]
    fn errors_name_the_full_path(tree in arb_tree(), path in arb_path()) {
        let settings = descend(Settings::new(&tree), &path);
        if let Err(err) = settings.uint64() {
            let expected = format!("invalid setting at path: [{}]", path.join(" "));
            prop_assert_eq!(err.to_string(), expected);
            prop_assert_eq!(err.path(), settings.path());
        }
    }

    #[test]
    fn reads_are_idempotent(tree in arb_tree(), path in arb_path()) {
        let before = tree.clone();
        let settings = descend(Settings::new(&tree), &path);
        prop_assert_eq!(settings.value(), settings.value());
        prop_assert_eq!(settings.string(), settings.string());
        prop_assert_eq!(settings.int64(), settings.int64());
        prop_assert_eq!(&tree, &before);
    }

    #[test]
    fn string_and_bytes_views_agree(s in ".{0,24}") {
        let text = Value::from(s.as_str());
        let raw = Value::from(s.as_bytes());
        prop_assert_eq!(
            Settings::new(&text).bytes().unwrap(),
            Settings::new(&raw).bytes().unwrap()
        );
    }
}
