//! Fuzz target for `assetlint.toml` parsing and resolution.
//!
//! Goal: arbitrary config text may be rejected, but parsing and resolving must **never panic**.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(cfg) = assetlint_settings::parse_config_toml(text) {
        let _ = assetlint_settings::resolve_config(cfg, assetlint_settings::Overrides::default());
    }
});
