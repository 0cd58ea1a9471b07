//! Integration tests for the CLI subcommands.

use clap::Parser;
use multiconf::cli::{Cli, Command, load};
use multiconf::paths::PlatformDirs;
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;

/// Parse `args` and run the load subcommand with directories fixed under `temp`.
fn run_load(temp: &TempDir, args: &[&str]) -> anyhow::Result<Value> {
    let cli = Cli::try_parse_from(args)?;
    let Command::Load(load_args) = cli.command else {
        panic!("expected load command");
    };
    let mut conf = load_args.loader().with_dirs(PlatformDirs::fixed(temp.path()));
    let mut out = Vec::new();
    load::emit(&mut conf, &mut out)?;
    Ok(serde_json::from_slice(&out)?)
}

#[test]
fn test_load_prints_merged_json() {
    let temp = TempDir::new().unwrap();
    let a = temp.path().join("a.json");
    let b = temp.path().join("b.json");
    fs::write(&a, r#"{"db": {"host": "h1", "port": 1}}"#).unwrap();
    fs::write(&b, r#"{"db": {"port": 2}}"#).unwrap();
    let (a, b) = (a.to_string_lossy(), b.to_string_lossy());

    let merged = run_load(&temp, &["multiconf", "load", "--app", "myapp", "--format", "json", &a, &b]).unwrap();
    assert_eq!(merged, json!({"db": {"host": "h1", "port": 1}}));

    let merged = run_load(&temp, &[
        "multiconf",
        "load",
        "--app",
        "myapp",
        "--format",
        "json",
        "--precedence",
        "last-wins",
        &a,
        &b,
    ])
    .unwrap();
    assert_eq!(merged, json!({"db": {"host": "h1", "port": 2}}));
}

#[test]
fn test_load_reports_parse_failure() {
    let temp = TempDir::new().unwrap();
    let bad = temp.path().join("bad.yaml");
    fs::write(&bad, "key: [oops\n").unwrap();

    let err = run_load(&temp, &["multiconf", "load", "--app", "myapp", &bad.to_string_lossy()]).unwrap_err();
    assert!(err.to_string().contains("bad.yaml"), "{err}");
}

#[test]
fn test_load_expands_placeholders_from_fixed_dirs() {
    let temp = TempDir::new().unwrap();
    let dirs = PlatformDirs::fixed(temp.path());
    fs::create_dir_all(&dirs.config).unwrap();
    fs::write(dirs.config.join("myapp.yml"), "theme: dark\n").unwrap();

    let merged = run_load(&temp, &["multiconf", "load", "-a", "myapp", "-f", "yml", "{{.Config}}/myapp.yml"]).unwrap();
    assert_eq!(merged, json!({"theme": "dark"}));
}
