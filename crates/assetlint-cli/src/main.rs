//! CLI entry point for assetlint.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `assetlint-app` crate.

use anyhow::Context;
use assetlint::{AssetKind, NamingRequest};
use assetlint_app::{
    CheckInput, ExplainOutput, apply_one, apply_selected, empty_report, format_issues,
    load_issues, parse_report_json, record_results, render_annotations, render_markdown,
    render_rows, run_check, run_explain, runtime_error_report, save_issues, serialize_report,
    skip, skip_all, to_renderable, to_rows, verdict_exit_code, write_text,
};
use assetlint_domain::policy::Scope;
use assetlint_repo::FsRenameExecutor;
use assetlint_settings::{Overrides, ResolvedConfig};
use assetlint_types::{AssetPath, AssetlintReport, DEFAULT_ISSUES_PATH, Verdict};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser, Subcommand};
use std::collections::BTreeMap;
use std::process::Command;
use tracing_subscriber::EnvFilter;

/// Folder that marks a project root.
const ASSETS_DIR: &str = "Assets";

#[derive(Parser, Debug)]
#[command(
    name = "assetlint",
    version,
    about = "Naming-convention guard for game-engine asset trees"
)]
struct Cli {
    /// Project root (directory containing `Assets/`).
    #[arg(long, default_value = ".")]
    repo_root: Utf8PathBuf,

    /// Path to assetlint config TOML, relative to the project root.
    #[arg(long, default_value = "assetlint.toml")]
    config: Utf8PathBuf,

    /// Override profile (strict|warn|compat).
    #[arg(long)]
    profile: Option<String>,

    /// Override scope (repo|diff|selection).
    #[arg(long)]
    scope: Option<String>,

    /// Override maximum findings to emit.
    #[arg(long)]
    max_findings: Option<u32>,

    /// Log more to stderr (-v info, -vv debug, -vvv trace). `RUST_LOG` wins when set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate asset names and write artifacts.
    Check(CheckArgs),

    /// Validate a single name and print a compliant suggestion.
    Suggest(SuggestArgs),

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/assetlint/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/assetlint/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g., "naming.texture_prefix") or code (e.g., "missing_prefix").
        identifier: String,
    },

    /// Review, edit, apply or skip recorded renames.
    Issues {
        /// Issue store file (default: `<repo-root>/.assetlint/issues.json`).
        #[arg(long)]
        issues: Option<Utf8PathBuf>,

        #[command(subcommand)]
        cmd: IssuesCommand,
    },
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Only check these assets (relative to the project root); implies selection scope.
    paths: Vec<Utf8PathBuf>,

    /// In diff scope: git base revision (e.g. origin/main).
    #[arg(long)]
    base: Option<String>,
    /// In diff scope: git head revision (e.g. HEAD).
    #[arg(long)]
    head: Option<String>,

    /// Where to write the JSON report.
    #[arg(long, default_value = "artifacts/assetlint/report.json")]
    report_out: Utf8PathBuf,

    /// Write a Markdown report alongside the JSON.
    #[arg(long)]
    write_markdown: bool,

    /// Where to write the Markdown report (if enabled).
    #[arg(long, default_value = "artifacts/assetlint/comment.md")]
    markdown_out: Utf8PathBuf,

    /// Also print a line for every valid asset.
    #[arg(long)]
    show_ok: bool,

    /// Record flagged assets in the issue store for `assetlint issues`.
    #[arg(long)]
    record: bool,

    /// Issue store file used with `--record`.
    #[arg(long)]
    issues: Option<Utf8PathBuf>,
}

#[derive(Args, Debug)]
struct SuggestArgs {
    /// File name without extension.
    name: String,

    /// File extension (e.g. `.png`).
    #[arg(long, default_value = "")]
    ext: String,

    /// Asset kind (e.g. `audio_clip`); resolved from the extension when omitted.
    #[arg(long)]
    kind: Option<String>,

    /// Containing folder (e.g. `Assets/UI/Sprites`).
    #[arg(long, default_value = "")]
    path: String,
}

#[derive(Subcommand, Debug)]
enum IssuesCommand {
    /// List pending renames.
    List,
    /// Rename the given assets, or every selected one with `--all`.
    Apply {
        paths: Vec<Utf8PathBuf>,
        #[arg(long)]
        all: bool,
    },
    /// Drop the given issues without renaming, or all of them with `--all`.
    Skip {
        paths: Vec<Utf8PathBuf>,
        #[arg(long)]
        all: bool,
    },
    /// Change the suggested name of one issue.
    Edit {
        path: Utf8PathBuf,
        suggestion: String,
    },
    /// Select (or with `--off`, deselect) one issue for `apply --all`.
    Select {
        path: Utf8PathBuf,
        #[arg(long)]
        off: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.cmd {
        Commands::Check(args) => cmd_check(&cli, args),
        Commands::Suggest(args) => cmd_suggest(args),
        Commands::Md { report, output } => cmd_md(report, output.as_deref()),
        Commands::Annotations { report, max } => cmd_annotations(report, *max),
        Commands::Explain { identifier } => cmd_explain(identifier),
        Commands::Issues { issues, cmd } => cmd_issues(&cli, issues.as_deref(), cmd),
    };

    let code = match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("assetlint error: {err:#}");
            1
        }
    };
    std::process::exit(code);
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn repo_root(cli: &Cli) -> Utf8PathBuf {
    cli.repo_root
        .canonicalize_utf8()
        .unwrap_or_else(|_| cli.repo_root.clone())
}

fn overrides(cli: &Cli) -> Overrides {
    Overrides {
        profile: cli.profile.clone(),
        scope: cli.scope.clone(),
        max_findings: cli.max_findings,
    }
}

fn resolve(cfg_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let cfg = if cfg_text.trim().is_empty() {
        assetlint_settings::AssetlintConfigV1::default()
    } else {
        assetlint_settings::parse_config_toml(cfg_text).context("parse config")?
    };
    assetlint_settings::resolve_config(cfg, overrides).context("resolve config")
}

/// Interpret a user-supplied path relative to the project root.
fn to_asset_path(repo_root: &Utf8Path, path: &Utf8Path) -> AssetPath {
    let rel = if path.is_absolute() {
        path.strip_prefix(repo_root).unwrap_or(path)
    } else {
        path
    };
    AssetPath::from(rel)
}

fn cmd_check(cli: &Cli, args: &CheckArgs) -> anyhow::Result<i32> {
    let repo_root = repo_root(cli);

    let result = (|| -> anyhow::Result<i32> {
        if !repo_root.exists() {
            anyhow::bail!("repo root does not exist: {}", repo_root);
        }
        // Load config if present; missing file is allowed (defaults apply).
        let cfg_path = repo_root.join(&cli.config);
        let cfg_text = std::fs::read_to_string(&cfg_path).unwrap_or_default();

        let mut overrides = overrides(cli);
        let selection: Option<Vec<AssetPath>> = (!args.paths.is_empty()).then(|| {
            args.paths
                .iter()
                .map(|p| to_asset_path(&repo_root, p))
                .collect()
        });
        if selection.is_some() && overrides.scope.is_none() {
            overrides.scope = Some(Scope::Selection.as_str().to_string());
        }

        let resolved = resolve(&cfg_text, overrides.clone())?;

        // Fast path: not an asset project -> emit empty report.
        if !repo_root.join(ASSETS_DIR).is_dir() {
            let report = empty_report(
                resolved.effective.scope.as_str(),
                &resolved.effective.profile,
            );
            write_artifacts(args, &report)?;
            eprintln!(
                "assetlint: no {ASSETS_DIR}/ folder found at {}; emitting empty report",
                repo_root
            );
            return Ok(0);
        }

        let changed_files = if resolved.effective.scope == Scope::Diff {
            let base = args.base.as_deref().context("diff scope requires --base")?;
            let head = args.head.as_deref().context("diff scope requires --head")?;
            Some(
                git_changed_files(&repo_root, base, head)
                    .context("git diff --name-only failed")?,
            )
        } else {
            None
        };

        let output = run_check(CheckInput {
            repo_root: &repo_root,
            config_text: &cfg_text,
            overrides,
            paths: selection,
            changed_files,
        })?;

        write_artifacts(args, &output.report)?;

        for line in render_rows(&to_rows(&output.results), args.show_ok) {
            println!("{line}");
        }

        if args.record {
            let issues_path = issues_path(&repo_root, args.issues.as_deref());
            let mut store = load_issues(&issues_path)?;
            let recorded = record_results(&mut store, &output.results);
            save_issues(&issues_path, &store)?;
            eprintln!("assetlint: recorded {recorded} rename issue(s) in {issues_path}");
        }

        let data = &output.report.data;
        eprintln!(
            "assetlint: {} ({} finding(s) in {} asset(s))",
            verdict_label(output.report.verdict),
            data.findings_total,
            data.assets_scanned
        );

        Ok(verdict_exit_code(output.report.verdict))
    })();

    result.inspect_err(|err| {
        let report = runtime_error_report(&format!("{err:#}"));
        let _ = write_report_file(&args.report_out, &report);
    })
}

fn verdict_label(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Pass => "pass",
        Verdict::Warn => "warn",
        Verdict::Fail => "fail",
    }
}

fn write_artifacts(args: &CheckArgs, report: &AssetlintReport) -> anyhow::Result<()> {
    write_report_file(&args.report_out, report).context("write report json")?;
    if args.write_markdown {
        let md = render_markdown(&to_renderable(report));
        write_text(&args.markdown_out, md.as_bytes()).context("write markdown")?;
    }
    Ok(())
}

fn write_report_file(path: &Utf8Path, report: &AssetlintReport) -> anyhow::Result<()> {
    let data = serialize_report(report).context("serialize report")?;
    write_text(path, &data)
}

fn git_changed_files(
    repo_root: &Utf8Path,
    base: &str,
    head: &str,
) -> anyhow::Result<Vec<AssetPath>> {
    let output = Command::new("git")
        .current_dir(repo_root)
        .args([
            "diff",
            "--name-only",
            "--relative",
            &format!("{base}..{head}"),
        ])
        .output()
        .context("spawn git")?;

    if !output.status.success() {
        anyhow::bail!("git diff returned non-zero exit status");
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let paths = stdout
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(AssetPath::new)
        .collect::<Vec<_>>();
    tracing::debug!(base, head, changed = paths.len(), "collected changed files");

    Ok(paths)
}

fn cmd_suggest(args: &SuggestArgs) -> anyhow::Result<i32> {
    let dir = args.path.trim_matches(|c| c == '/' || c == '\\');
    let containing = if dir.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", dir.replace('\\', "/"))
    };

    let mut request =
        NamingRequest::new(args.name.as_str(), &args.ext, AssetKind::Unknown, containing);
    request.kind = match args.kind.as_deref() {
        Some(kind) => kind
            .parse::<AssetKind>()
            .with_context(|| format!("invalid --kind: {kind}"))?,
        None => assetlint_repo::resolve_kind(&request.extension, &BTreeMap::new()),
    };

    let verdict = assetlint::validate(&request);
    let file_name = format!("{}{}", request.base_name, request.extension);
    if verdict.is_valid {
        println!("OK   {file_name}");
        return Ok(0);
    }

    println!("WARN {file_name}: {}", verdict.violation_reason);
    if let Some(name) = &verdict.suggested_name {
        println!("suggest: {name}{}", request.extension);
    }
    Ok(2)
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<i32> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&to_renderable(&report));

    if let Some(out_path) = output {
        write_text(out_path, md.as_bytes()).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(0)
}

fn cmd_annotations(report_path: &Utf8Path, max: usize) -> anyhow::Result<i32> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;

    for annotation in render_annotations(&to_renderable(&report), max) {
        println!("{}", annotation);
    }

    Ok(0)
}

fn cmd_explain(identifier: &str) -> anyhow::Result<i32> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", assetlint_app::format_explanation(&exp));
            Ok(0)
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                assetlint_app::format_not_found(&identifier, available_check_ids, available_codes)
            );
            Ok(1)
        }
    }
}

fn issues_path(repo_root: &Utf8Path, explicit: Option<&Utf8Path>) -> Utf8PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => repo_root.join(DEFAULT_ISSUES_PATH),
    }
}

fn cmd_issues(
    cli: &Cli,
    issues: Option<&Utf8Path>,
    cmd: &IssuesCommand,
) -> anyhow::Result<i32> {
    let repo_root = repo_root(cli);
    let store_path = issues_path(&repo_root, issues);
    let mut store = load_issues(&store_path)?;
    let executor = FsRenameExecutor::new(repo_root.clone());

    let code = match cmd {
        IssuesCommand::List => {
            print!("{}", format_issues(&store));
            return Ok(0);
        }
        IssuesCommand::Apply { paths, all: true } if paths.is_empty() => {
            let summary = apply_selected(&mut store, &executor);
            for (from, to) in &summary.applied {
                println!("renamed {from} -> {to}");
            }
            for (path, err) in &summary.failed {
                eprintln!("assetlint: rename failed for {path}: {err}");
            }
            i32::from(!summary.failed.is_empty())
        }
        IssuesCommand::Apply { paths, all: false } if !paths.is_empty() => {
            let mut failed = false;
            for p in paths {
                let asset = to_asset_path(&repo_root, p);
                match apply_one(&mut store, &asset, &executor) {
                    Ok(to) => println!("renamed {asset} -> {to}"),
                    Err(err) => {
                        eprintln!("assetlint: {err:#}");
                        failed = true;
                    }
                }
            }
            i32::from(failed)
        }
        IssuesCommand::Apply { .. } => anyhow::bail!("apply needs either PATHS or --all"),
        IssuesCommand::Skip { paths, all: true } if paths.is_empty() => {
            skip_all(&mut store);
            0
        }
        IssuesCommand::Skip { paths, all: false } if !paths.is_empty() => {
            for p in paths {
                let asset = to_asset_path(&repo_root, p);
                if !skip(&mut store, &asset) {
                    eprintln!("assetlint: no pending rename for {asset}");
                }
            }
            0
        }
        IssuesCommand::Skip { .. } => anyhow::bail!("skip needs either PATHS or --all"),
        IssuesCommand::Edit { path, suggestion } => {
            let asset = to_asset_path(&repo_root, path);
            if !store.set_suggestion(&asset, suggestion) {
                anyhow::bail!("no pending rename for {asset}");
            }
            0
        }
        IssuesCommand::Select { path, off } => {
            let asset = to_asset_path(&repo_root, path);
            if !store.set_selected(&asset, !off) {
                anyhow::bail!("no pending rename for {asset}");
            }
            0
        }
    };

    save_issues(&store_path, &store)?;
    Ok(code)
}
