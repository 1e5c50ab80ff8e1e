//! Naming-convention rules for game-engine assets.
//!
//! ```
//! use assetlint::{AssetKind, NamingRequest, suggest, validate};
//!
//! let request = NamingRequest::new("player_controller", ".cs", AssetKind::Script, "/Assets/Scripts/");
//! let verdict = validate(&request);
//! assert!(!verdict.is_valid);
//! assert_eq!(suggest(&request).as_deref(), Some("PlayerController"));
//! ```

#![forbid(unsafe_code)]

pub use assetlint_domain::model::{AssetEntry, AssetModel};
pub use assetlint_domain::policy::{CheckPolicy, EffectiveConfig, FailOn, Scope};
pub use assetlint_domain::report::{AssetResult, DomainReport, SeverityCounts};
pub use assetlint_domain::{
    AssetKind, NamingRequest, NamingVerdict, Rule, evaluate, is_pascal_case, suggest,
    to_pascal_case, validate,
};
pub use assetlint_types::{AssetPath, Finding, Severity, Verdict};
