//! Property tests for literal handling and bounds enforcement.

use proptest::prelude::*;
use u_autoconfig::registry::{
    ComponentDescriptor, ComponentRegistry, ConstructorSpec, ParameterSpec,
};
use u_autoconfig::{Autoconfig, AutoconfigError};

#[derive(Debug, PartialEq)]
struct Bounded(i32);

#[derive(Debug, PartialEq)]
struct Unbounded(i32);

fn engine() -> Autoconfig {
    let mut registry = ComponentRegistry::new();
    registry
        .register(
            ComponentDescriptor::new::<Bounded>("Bounded").with_constructor(ConstructorSpec::new(
                vec![ParameterSpec::int("sumThis").with_bounds(-10.0, 10.0)],
                |args| Ok(Bounded(args.int("sumThis")?)),
            )),
        )
        .unwrap();
    registry
        .register(ComponentDescriptor::new::<Unbounded>("Unbounded").with_constructor(
            ConstructorSpec::new(vec![ParameterSpec::int("x")], |args| {
                Ok(Unbounded(args.int("x")?))
            }),
        ))
        .unwrap();
    Autoconfig::new(registry)
}

fn element() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<i32>().prop_map(|i| i.to_string()),
        "[a-z]{0,8}".prop_map(|s| format!("\"{s}\"")),
        Just("true".to_string()),
        Just("null".to_string()),
        Just("Unbounded(x=1)".to_string()),
    ]
}

proptest! {
    #[test]
    fn bounds_are_inclusive(v in -1000i32..1000) {
        let result = engine().parse_str_as::<Bounded>(&format!("Bounded(sumThis={v})"));
        if (-10..=10).contains(&v) {
            prop_assert_eq!(result.unwrap(), Bounded(v));
        } else {
            let err = result.unwrap_err();
            let is_range_error = matches!(err.unlocated(), AutoconfigError::ParameterRange { .. });
            prop_assert!(is_range_error, "{}", err);
        }
    }

    #[test]
    fn every_i32_literal_parses(v in any::<i32>()) {
        let built = engine().parse_str_as::<Unbounded>(&format!("Unbounded(x={v})")).unwrap();
        prop_assert_eq!(built, Unbounded(v));
    }

    #[test]
    fn out_of_range_integers_are_literal_errors(v in (i64::from(i32::MAX) + 1)..i64::MAX) {
        let err = engine().parse_str(&format!("Unbounded(x={v})")).unwrap_err();
        let is_literal_error = matches!(
            err.unlocated(),
            AutoconfigError::LiteralParse { kind: "integer", .. }
        );
        prop_assert!(is_literal_error, "{}", err);
    }

    #[test]
    fn arrays_always_rejected(elements in proptest::collection::vec(element(), 0..6)) {
        let source = format!("Unbounded(x=[{}])", elements.join(", "));
        let err = engine().parse_str(&source).unwrap_err();
        let is_unsupported = matches!(
            err.unlocated(),
            AutoconfigError::UnsupportedLiteral { elements: n } if *n == elements.len()
        );
        prop_assert!(is_unsupported, "{}", err);
    }
}
