//! Property-based tests using proptest.
//!
//! These cover the encoding and signing invariants that a happy-path test
//! can mask: canonicalization determinism, the space-as-`+` rule, and
//! tamper detection on the verification path.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::BTreeMap;

use masking::Secret;
use proptest::prelude::*;
use vnpay_gateway::{
    callback::{self, VerificationOutcome},
    canonical::CanonicalFieldSet,
    consts::{self, fields},
    crypto,
};

/// Random field maps with keys that can never collide with the signature
/// field.
fn arb_fields() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map("[a-zA-Z_]{1,16}", "[ -~]{0,24}", 0..8).prop_map(|mut map| {
        map.remove(fields::SECURE_HASH);
        map.remove(fields::SECURE_HASH_TYPE);
        map
    })
}

/// Like [`arb_fields`] but guaranteeing at least one non-empty value.
fn arb_signable_fields() -> impl Strategy<Value = BTreeMap<String, String>> {
    (arb_fields(), "[a-zA-Z_]{1,12}", "[ -~]{1,24}").prop_map(|(mut map, key, value)| {
        map.insert(format!("vnp_{key}"), value);
        map
    })
}

fn arb_secret() -> impl Strategy<Value = String> {
    "[A-Z0-9]{8,32}"
}

proptest! {
    #[test]
    fn canonicalization_ignores_insertion_order(map in arb_fields()) {
        let forward: Vec<(String, String)> = map.clone().into_iter().collect();
        let mut backward = forward.clone();
        backward.reverse();
        let mut rotated = forward.clone();
        rotated.rotate_left(forward.len() / 2);

        let reference = CanonicalFieldSet::from_fields(forward).canonical_string();
        prop_assert_eq!(&reference, &CanonicalFieldSet::from_fields(backward).canonical_string());
        prop_assert_eq!(&reference, &CanonicalFieldSet::from_fields(rotated).canonical_string());
    }

    #[test]
    fn canonical_string_never_contains_percent_twenty(
        mut map in arb_fields(),
        value in "[a-z ]{1,20}",
    ) {
        map.insert("vnp_OrderInfo".to_owned(), value);
        let canonical = CanonicalFieldSet::from_fields(&map).canonical_string();
        prop_assert!(!canonical.contains("%20"));
    }

    #[test]
    fn literal_plus_stays_distinct_from_space(value in "[a-z+ ]{1,20}") {
        let with_plus = CanonicalFieldSet::from_fields(vec![("k", value.as_str())])
            .canonical_string();
        let with_space = CanonicalFieldSet::from_fields(vec![("k", value.replace('+', " "))])
            .canonical_string();
        if value.contains('+') {
            prop_assert_ne!(with_plus, with_space);
        } else {
            prop_assert_eq!(with_plus, with_space);
        }
    }

    #[test]
    fn sign_then_verify_round_trips(map in arb_signable_fields(), secret in arb_secret()) {
        let canonical = CanonicalFieldSet::from_fields(&map).canonical_string();
        let signature = crypto::sign_hex(secret.as_bytes(), &canonical).unwrap();

        let mut delivered = map.clone();
        delivered.insert(fields::SECURE_HASH.to_owned(), signature);

        let outcome = callback::verify(&delivered, &Secret::new(secret)).unwrap();
        let accepted = matches!(outcome, VerificationOutcome::Accepted { .. });
        prop_assert!(accepted);
    }

    #[test]
    fn single_character_tamper_is_detected(
        map in arb_signable_fields(),
        secret in arb_secret(),
        pick in any::<prop::sample::Index>(),
    ) {
        let canonical = CanonicalFieldSet::from_fields(&map).canonical_string();
        let signature = crypto::sign_hex(secret.as_bytes(), &canonical).unwrap();

        // Mutate one character of one non-empty field value, keeping the
        // old signature.
        let non_empty: Vec<String> = map
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, _)| key.clone())
            .collect();
        let target = non_empty[pick.index(non_empty.len())].clone();
        let mut tampered = map.clone();
        let value = tampered.get_mut(&target).unwrap();
        let first = value.chars().next().unwrap();
        let replacement = if first == 'a' { 'b' } else { 'a' };
        *value = format!("{replacement}{}", &value[first.len_utf8()..]);
        prop_assume!(map.get(&target) != tampered.get(&target));

        let mut delivered = tampered;
        delivered.insert(fields::SECURE_HASH.to_owned(), signature);

        let outcome = callback::verify(&delivered, &Secret::new(secret)).unwrap();
        let rejected = matches!(outcome, VerificationOutcome::Rejected { .. });
        prop_assert!(rejected);
    }

    #[test]
    fn amount_in_bounds_scales_by_one_hundred(
        whole in consts::AMOUNT_MIN..consts::AMOUNT_MAX,
    ) {
        let normalized = vnpay_gateway::normalize(whole as f64).unwrap();
        prop_assert_eq!(
            normalized.get_amount_as_i64(),
            whole * consts::MINOR_UNIT_SCALE
        );
    }

    #[test]
    fn amount_out_of_bounds_is_rejected(whole in prop_oneof![
        (-1_000_000i64..consts::AMOUNT_MIN),
        (consts::AMOUNT_MAX..2_000_000_000i64),
    ]) {
        prop_assert!(vnpay_gateway::normalize(whole as f64).is_err());
    }
}
