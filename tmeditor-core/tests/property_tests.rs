//! Property tests over generated expressions

use proptest::prelude::*;
use tmeditor_core::classifier::{
    is_external_signal, is_function, is_object_requirement, is_operator,
};
use tmeditor_core::*;

fn arb_object() -> impl Strategy<Value = String> {
    (
        prop::sample::select(ObjectType::ALL.to_vec()),
        prop::sample::select(vec!["", ".eq."]),
        0u32..200,
        any::<bool>(),
        prop::option::of(-2i32..=2),
    )
        .prop_map(|(object_type, comparison, threshold, half, offset)| {
            let mut token = format!("{object_type}{comparison}{threshold}");
            if half {
                token.push_str("p5");
            }
            if let Some(offset) = offset {
                token.push_str(&format!("{offset:+}"));
            }
            token
        })
}

fn arb_external() -> impl Strategy<Value = String> {
    ("[A-Za-z][A-Za-z0-9_]{0,8}", prop::option::of(-2i32..=2)).prop_map(|(name, offset)| match offset {
        Some(offset) => format!("EXT_{name}{offset:+}"),
        None => format!("EXT_{name}"),
    })
}

fn arb_function() -> impl Strategy<Value = String> {
    (
        prop::sample::select(FunctionType::ALL.to_vec()),
        prop::collection::vec(arb_object(), 1..4),
    )
        .prop_map(|(function_type, operands)| format!("{function_type}{{{}}}", operands.join(",")))
}

fn arb_expression() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![arb_object(), arb_external(), arb_function()];
    leaf.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (
                inner.clone(),
                prop::sample::select(vec!["AND", "OR", "XOR"]),
                inner.clone()
            )
                .prop_map(|(lhs, gate, rhs)| format!("{lhs} {gate} {rhs}")),
            inner.clone().prop_map(|operand| format!("NOT {operand}")),
            inner.prop_map(|operand| format!("({operand})")),
        ]
    })
}

proptest! {
    #[test]
    fn tokenization_is_idempotent(expression in arb_expression()) {
        let first = tokenize(&expression).unwrap();
        let second = tokenize(&expression).unwrap();
        prop_assert!(first.iter().all(|token| token != "(" && token != ")"));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_token_has_exactly_one_kind(expression in arb_expression()) {
        for token in tokenize(&expression).unwrap() {
            let kinds = [
                is_operator(&token),
                is_object_requirement(&token),
                is_external_signal(&token),
                is_function(&token),
            ];
            prop_assert_eq!(kinds.iter().filter(|kind| **kind).count(), 1, "token {}", token);
            prop_assert!(classify(&token).is_some());
        }
    }

    #[test]
    fn extracted_objects_are_unique(expression in arb_expression()) {
        let objects = extract_objects(&expression).unwrap();
        for (i, object) in objects.iter().enumerate() {
            prop_assert!(objects[i + 1..].iter().all(|other| other.name() != object.name()));
        }
    }

    #[test]
    fn threshold_codec_is_stable(value in 0.0f64..1e6) {
        let encoded = encode_threshold(value);
        prop_assert!(!encoded.contains('.'));
        prop_assert_eq!(decode_threshold(&encoded).unwrap(), value);
    }
}
