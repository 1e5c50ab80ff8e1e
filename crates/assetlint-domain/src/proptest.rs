//! Property-based tests for the domain crate.
//!
//! Invariants covered:
//! - validation never panics and reports a reason exactly when invalid
//! - a suggestion always validates itself
//! - PascalCase conversion is idempotent
//! - findings ordering does not depend on input order

use crate::engine::evaluate;
use crate::model::{AssetKind, NamingRequest};
use crate::rules::{Rule, is_pascal_case, strip_known_prefix, suggest, to_pascal_case, validate};
use crate::test_support::{asset, config, model};
use assetlint_types::Severity;
use proptest::prelude::*;

fn arb_kind() -> impl Strategy<Value = AssetKind> {
    prop::sample::select(AssetKind::ALL.to_vec())
}

fn arb_extension() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            ".cs", ".unity", ".prefab", ".mat", ".png", ".psd", ".tga", ".shader",
            ".shadergraph", ".vfx", ".anim", ".controller", ".wav", ".mixer", ".asset", ".txt",
            "",
        ])
        .prop_map(str::to_string),
        "\\.[a-z]{1,5}",
    ]
}

fn arb_name() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z0-9 _-]{0,24}",
        "(tex_|spr_|mat_|sfx_|SO_|scn_)[A-Za-z0-9_]{0,12}",
        any::<String>(),
    ]
}

fn arb_folder() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "/",
        "/Assets/",
        "/Assets/UI/Sprites/",
        "/Assets/Data/ScriptableObjects/",
        "/Assets/Art/",
    ])
    .prop_map(str::to_string)
}

fn arb_request() -> impl Strategy<Value = NamingRequest> {
    (arb_name(), arb_extension(), arb_kind(), arb_folder())
        .prop_map(|(name, ext, kind, folder)| NamingRequest::new(name, &ext, kind, folder))
}

proptest! {
    #[test]
    fn verdict_reason_matches_validity(req in arb_request()) {
        let verdict = validate(&req);
        prop_assert_eq!(verdict.is_valid, verdict.violation_reason.is_empty());
        if verdict.is_valid {
            prop_assert!(verdict.suggested_name.is_none());
        } else {
            prop_assert!(verdict.rule.is_some());
        }
    }

    #[test]
    fn suggestion_validates_itself(req in arb_request()) {
        if let Some(name) = suggest(&req) {
            let again = validate(&req.with_base_name(name.clone()));
            prop_assert!(again.is_valid, "suggestion {:?} for {:?} is not valid", name, req);
            prop_assert_eq!(suggest(&req.with_base_name(name)), None);
        }
    }

    #[test]
    fn suggest_agrees_with_validate(req in arb_request()) {
        prop_assert_eq!(suggest(&req), validate(&req).suggested_name);
    }

    #[test]
    fn unmatched_requests_are_valid(name in "[a-z]{1,12}", ext in "\\.(txt|json|md|xml)") {
        let req = NamingRequest::new(name, &ext, AssetKind::Unknown, "/Assets/");
        let verdict = validate(&req);
        prop_assert!(verdict.is_valid);
        prop_assert_eq!(verdict.rule, None);
    }

    #[test]
    fn pascal_case_is_idempotent(s in "[A-Za-z0-9 _-]{0,32}") {
        let once = to_pascal_case(&s);
        prop_assert_eq!(to_pascal_case(&once), once.clone());
        if once.chars().next().is_some_and(char::is_uppercase) {
            prop_assert!(is_pascal_case(&once));
        }
    }

    #[test]
    fn prefix_rules_keep_the_core(core in "[A-Z][a-z]{1,10}") {
        let req = NamingRequest::new(core.clone(), ".png", AssetKind::Texture, "/Assets/");
        prop_assert_eq!(suggest(&req), Some(format!("tex_{core}")));
        let prefixed = format!("tex_{core}");
        prop_assert_eq!(strip_known_prefix(&prefixed), core.as_str());
    }

    #[test]
    fn rule_lookup_round_trips(idx in 0usize..Rule::ALL.len()) {
        let rule = Rule::ALL[idx];
        prop_assert_eq!(Rule::from_check_id(rule.check_id()), Some(rule));
    }

    #[test]
    fn findings_order_is_independent_of_input_order(
        names in prop::collection::vec("[a-z]{1,8}", 1..12),
        seed in any::<u64>(),
    ) {
        let assets: Vec<_> = names
            .iter()
            .enumerate()
            .map(|(i, n)| asset(&format!("Assets/{i}/{n}.png"), AssetKind::Texture))
            .collect();

        let mut shuffled = assets.clone();
        let len = shuffled.len();
        shuffled.rotate_left((seed as usize) % len);
        shuffled.reverse();

        let cfg = config(Severity::Warning);
        let a = evaluate(&model(assets), &cfg);
        let b = evaluate(&model(shuffled), &cfg);
        prop_assert_eq!(a.findings, b.findings);
    }
}
