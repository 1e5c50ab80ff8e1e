//! Developer tasks (schema generation, conformance, explain coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .or_else(|_| std::env::current_dir())
        .unwrap_or_else(|_| PathBuf::from("."));

    // If we're in the xtask directory, go up one level
    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or(manifest_dir)
    } else {
        manifest_dir
    }
}

/// Get the schemas directory path.
fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(assetlint_types::AssetlintReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(assetlint_settings::AssetlintConfigV1)
}

fn generate_issues_schema() -> schemars::Schema {
    schema_for!(assetlint_types::IssueStore)
}

/// List of schemas to generate.
fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "assetlint.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "assetlint.config.v1.json",
            generate: generate_config_schema,
        },
        SchemaSpec {
            filename: "assetlint.issues.v1.json",
            generate: generate_issues_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Run the assetlint binary on tests/fixtures and validate reports");
    eprintln!("  explain-coverage  Validate all check IDs and codes have explanations");
}

/// Token pattern for check ids and codes: lowercase, digits, `_`, with `.` separating segments.
fn is_valid_token(s: &str) -> bool {
    !s.is_empty()
        && s.split('.').all(|segment| {
            let mut chars = segment.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
                && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        })
}

/// Check that a path is clean: no absolute paths, no `../`, forward slashes only.
fn is_clean_path(path: &str) -> bool {
    !(path.starts_with('/')
        || path.starts_with('\\')
        || path.contains("..")
        || path.contains('\\')
        // Reject Windows-style drive letters like C:
        || (path.len() >= 2 && path.as_bytes()[1] == b':'))
}

/// Hygiene problems in one report value.
fn report_hygiene_errors(name: &str, value: &serde_json::Value) -> Vec<String> {
    let mut errors = Vec::new();
    let Some(findings) = value.get("findings").and_then(|v| v.as_array()) else {
        errors.push(format!("{name}: findings is not an array"));
        return errors;
    };

    for (i, finding) in findings.iter().enumerate() {
        for key in ["check_id", "code"] {
            let token = finding.get(key).and_then(|v| v.as_str()).unwrap_or_default();
            if !is_valid_token(token) {
                errors.push(format!("{name}: finding[{i}].{key} '{token}' is not a valid token"));
            }
        }
        if let Some(path_str) = finding
            .get("location")
            .and_then(|loc| loc.get("path"))
            .and_then(|v| v.as_str())
            && !is_clean_path(path_str)
        {
            errors.push(format!(
                "{name}: finding[{i}].location.path '{path_str}' is not clean (no absolute, no ../, forward slashes only)"
            ));
        }
    }
    errors
}

fn compile_report_schema() -> anyhow::Result<jsonschema::Validator> {
    let path = schemas_dir().join("assetlint.report.v1.json");
    if !path.exists() {
        bail!(
            "{} not found.\n\nRun `cargo xtask emit-schemas` first.",
            path.display()
        );
    }
    let content =
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    let value: serde_json::Value =
        serde_json::from_str(&content).context("Failed to parse report schema as JSON")?;
    jsonschema::draft202012::new(&value)
        .map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))
}

/// Run the assetlint binary on each fixture project and validate the written reports.
///
/// This checks:
/// 1. Schema validation against schemas/assetlint.report.v1.json
/// 2. Path hygiene: no absolute paths, no `../`, forward slashes only
/// 3. Token hygiene: check ids and codes are lowercase dotted tokens
fn conform() -> anyhow::Result<()> {
    let compiled = compile_report_schema()?;
    println!("✓ assetlint.report.v1.json schema compiles");

    let bin = project_root().join("target").join("debug").join("assetlint");
    #[cfg(target_os = "windows")]
    let bin = bin.with_extension("exe");
    if !bin.exists() {
        bail!(
            "assetlint binary not found at {}.\n\
            Run `cargo build -p assetlint-cli` first.",
            bin.display()
        );
    }

    let fixtures_dir = project_root().join("tests").join("fixtures");
    let mut errors = Vec::new();

    for entry in fs::read_dir(&fixtures_dir).context("Failed to read tests/fixtures/")? {
        let fixture_dir = entry?.path();
        if !fixture_dir.is_dir() {
            continue;
        }
        let fixture_name = fixture_dir
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let temp_dir = tempfile::tempdir().context("Failed to create temp dir")?;
        let report_out = temp_dir.path().join("report.json");
        let output = std::process::Command::new(&bin)
            .arg("--repo-root")
            .arg(&fixture_dir)
            .arg("check")
            .arg("--report-out")
            .arg(&report_out)
            .output()
            .with_context(|| format!("Failed to run assetlint on fixture '{}'", fixture_name))?;

        // 0 = pass/warn, 2 = policy failure; anything else is a tool error.
        if !matches!(output.status.code(), Some(0 | 2)) {
            errors.push(format!(
                "fixture '{}': assetlint exited with {:?}: {}",
                fixture_name,
                output.status.code(),
                String::from_utf8_lossy(&output.stderr).trim()
            ));
            continue;
        }

        let content = fs::read_to_string(&report_out)
            .with_context(|| format!("fixture '{}': no report written", fixture_name))?;
        let value: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("fixture '{}': report is not JSON", fixture_name))?;

        let before = errors.len();
        for err in compiled.iter_errors(&value) {
            errors.push(format!("fixture '{}': schema validation: {}", fixture_name, err));
        }
        errors.extend(report_hygiene_errors(&fixture_name, &value));

        if errors.len() == before {
            println!("  ✓ fixture '{}' produces a valid report", fixture_name);
        }
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!("\n✓ Conformance checks passed!");
    Ok(())
}

/// Validate that all check IDs and codes have explanations.
fn explain_coverage() -> anyhow::Result<()> {
    let check_ids = assetlint_types::explain::all_check_ids();
    let codes = assetlint_types::explain::all_codes();

    let mut errors = Vec::new();
    for (label, identifier) in check_ids
        .iter()
        .map(|id| ("Check ID", *id))
        .chain(codes.iter().map(|code| ("Code", *code)))
    {
        match assetlint_types::explain::lookup_explanation(identifier) {
            Some(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("{label} '{identifier}' has empty title"));
                }
                if exp.description.is_empty() {
                    errors.push(format!("{label} '{identifier}' has empty description"));
                }
                if exp.remediation.is_empty() {
                    errors.push(format!("{label} '{identifier}' has empty remediation"));
                }
            }
            None => errors.push(format!("{label} '{identifier}' has no explanation")),
        }
    }

    if errors.is_empty() {
        println!("✓ {} check IDs have explanations", check_ids.len());
        println!("✓ {} codes have explanations", codes.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
