// Checker runs against fake checkers written as shell scripts.
// The script is run through `sh`, so the temp source path arrives as $1.

#![cfg(unix)]

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use leancheck_core::{CheckError, Checker, CheckerConfig, Diagnostic};
use tempfile::TempDir;

fn fake_checker(dir: &Path, body: &str) -> CheckerConfig {
    let script = dir.join("checker.sh");
    fs::write(&script, format!("#!/bin/sh\n{body}\n")).expect("Failed to write script");

    let temp_dir = dir.join("sources");
    fs::create_dir_all(&temp_dir).expect("Failed to create sources dir");

    CheckerConfig {
        program: "sh".to_string(),
        args: vec![script.display().to_string()],
        temp_dir: Some(temp_dir),
        timeout_ms: 10_000,
        ..CheckerConfig::default()
    }
}

fn sources_left(config: &CheckerConfig) -> usize {
    let dir: &PathBuf = config.temp_dir.as_ref().expect("temp_dir set");
    fs::read_dir(dir).expect("Failed to list sources").count()
}

#[tokio::test]
async fn test_parses_diagnostics_from_stderr() {
    let dir = TempDir::new().unwrap();
    let config = fake_checker(
        dir.path(),
        r#"printf '%s\n' "$1:4:10: error: unexpected token" "no colons here" "$1:abc:10: error: bad" "$1:7:0: warning: unused" >&2
echo "$1:1:1: stdout is ignored"
exit 1"#,
    );

    let outcome = Checker::new(config).run("example").await.unwrap();

    assert_eq!(
        outcome.diagnostics,
        vec![
            Diagnostic::new("error: unexpected token", 4, 10),
            Diagnostic::new("warning: unused", 7, 0),
        ]
    );
    assert_eq!(outcome.exit_code, Some(1));
    assert!(outcome.stdout.contains("stdout is ignored"));
}

#[tokio::test]
async fn test_empty_code_with_silent_checker() {
    let dir = TempDir::new().unwrap();
    let config = fake_checker(dir.path(), "exit 0");

    let diags = Checker::new(config).check("").await.unwrap();
    assert!(diags.is_empty());
}

#[tokio::test]
async fn test_crashing_checker_yields_empty_list() {
    let dir = TempDir::new().unwrap();
    let config = fake_checker(dir.path(), "echo 'Segmentation fault' >&2\nexit 139");

    let diags = Checker::new(config).check("x").await.unwrap();
    assert!(diags.is_empty());
}

#[tokio::test]
async fn test_checker_sees_exact_bytes() {
    let dir = TempDir::new().unwrap();
    let copy = dir.path().join("seen.lean");
    let config = fake_checker(dir.path(), &format!("cp \"$1\" '{}'", copy.display()));

    let code = "theorem foo : 1 + 1 = 2 := by\n  rfl\n\n-- αβγ ∀ x, x = x\r\nno trailing newline";
    Checker::new(config).check(code).await.unwrap();

    assert_eq!(fs::read(&copy).unwrap(), code.as_bytes());
}

#[tokio::test]
async fn test_source_path_is_sole_argument_with_extension() {
    let dir = TempDir::new().unwrap();
    let record = dir.path().join("args.txt");
    let config = fake_checker(
        dir.path(),
        &format!("echo \"$#\" > '{r}'\necho \"$1\" >> '{r}'", r = record.display()),
    );

    Checker::new(config).check("x").await.unwrap();

    let recorded = fs::read_to_string(&record).unwrap();
    let mut lines = recorded.lines();
    assert_eq!(lines.next(), Some("1"));
    let path = lines.next().unwrap();
    assert!(path.ends_with(".lean"), "unexpected path {path}");
}

#[tokio::test]
async fn test_temp_file_removed_after_success() {
    let dir = TempDir::new().unwrap();
    let config = fake_checker(dir.path(), "echo \"$1:1:0: error: x\" >&2");

    let checker = Checker::new(config.clone());
    checker.check("a").await.unwrap();
    checker.check("b").await.unwrap();

    assert_eq!(sources_left(&config), 0);
}

#[tokio::test]
async fn test_temp_file_removed_after_spawn_failure() {
    let dir = TempDir::new().unwrap();
    let mut config = fake_checker(dir.path(), "exit 0");
    config.program = "leancheck-definitely-missing".to_string();

    let err = Checker::new(config.clone()).check("a").await.unwrap_err();

    assert!(matches!(err, CheckError::CheckerNotFound(_)));
    assert_eq!(sources_left(&config), 0);
}

#[tokio::test]
async fn test_hanging_checker_times_out() {
    let dir = TempDir::new().unwrap();
    let mut config = fake_checker(dir.path(), "sleep 30");
    config.timeout_ms = 200;

    let started = Instant::now();
    let err = Checker::new(config.clone()).check("a").await.unwrap_err();

    assert!(matches!(err, CheckError::Timeout(200)), "unexpected error: {err}");
    assert!(started.elapsed().as_secs() < 10);
    assert_eq!(sources_left(&config), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_checks_do_not_mix() {
    let dir = TempDir::new().unwrap();
    let config = fake_checker(
        dir.path(),
        "sleep 0.2\nprintf '%s:1:0: %s\\n' \"$1\" \"$(head -n 1 \"$1\")\" >&2",
    );
    let checker = Checker::new(config);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let checker = checker.clone();
            tokio::spawn(async move {
                let code = format!("request-{i}");
                let diags = checker.check(&code).await.unwrap();
                (code, diags)
            })
        })
        .collect();

    for handle in handles {
        let (code, diags) = handle.await.unwrap();
        assert_eq!(diags, vec![Diagnostic::new(code, 1, 0)]);
    }
}

#[tokio::test]
async fn test_padded_and_zero_positions_are_reported() {
    let dir = TempDir::new().unwrap();
    let config = fake_checker(
        dir.path(),
        r#"printf '%s\n' "$1: 4: 10: error: padded" "$1:0:1: error: zero line" "$1: :1: error: blank" >&2"#,
    );

    let diags = Checker::new(config).check("x").await.unwrap();

    assert_eq!(
        diags,
        vec![
            Diagnostic::new("error: padded", 4, 10),
            Diagnostic::new("error: zero line", 0, 1),
        ]
    );
}
