//! Fuzz target for the naming rule engine.
//!
//! Goal: `validate` and `suggest` must **never panic**, and every suggestion they produce
//! must itself validate.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_naming_rules
//! ```

#![no_main]

use arbitrary::Arbitrary;
use assetlint::{AssetKind, NamingRequest, suggest, validate};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct NamingInput {
    base_name: String,
    extension: String,
    kind_index: u8,
    containing_path: String,
}

fuzz_target!(|input: NamingInput| {
    if input.base_name.len() > 256 || input.extension.len() > 32 || input.containing_path.len() > 512 {
        return;
    }

    let kind = AssetKind::ALL[usize::from(input.kind_index) % AssetKind::ALL.len()];
    let request = NamingRequest::new(
        input.base_name,
        &input.extension,
        kind,
        input.containing_path,
    );

    let verdict = validate(&request);
    assert_eq!(verdict.is_valid, verdict.violation_reason.is_empty());
    assert_eq!(suggest(&request), verdict.suggested_name);

    if let Some(name) = verdict.suggested_name {
        let fixed = validate(&request.with_base_name(name));
        assert!(fixed.is_valid, "suggestion does not validate: {fixed:?}");
    }
});
