use super::{run, run_with};
use crate::cli::commands::run_whoami;
use plugkit_core::config::{DownloadDefaults, PlugkitConfig};
use plugkit_core::env::{MapEnv, CI_ENV, PROJECT_ENV};
use std::io::Cursor;

fn json(out: &str) -> serde_json::Value {
    serde_json::from_str(out).unwrap()
}

#[test]
fn download_config_defaults() {
    let v = json(&run(&["plugkit", "download-config"], "").unwrap());
    assert_eq!(v["target"], ".");
    assert_eq!(v["limit"], 0);
    assert_eq!(v["exclusions"], serde_json::json!([]));
    assert_eq!(v["props"], serde_json::json!([]));
    assert_eq!(v["download"]["min_split_size"], 5120);
    assert_eq!(v["download"]["split_count"], 3);
    assert_eq!(v["download"]["threads"], 3);
    assert_eq!(v["download"]["skip_checksum"], false);
    assert_eq!(v["download"]["symlink"], true);
}

#[test]
fn download_config_overrides() {
    let out = run(
        &[
            "plugkit",
            "download-config",
            "--target",
            "out/",
            "--exclusions",
            "*.tmp;*.log",
            "--props",
            "a=1;b=2",
            "--limit",
            "0x10",
            "--split-count",
            "15",
            "--min-split",
            "1024",
            "--skip-checksum",
        ],
        "",
    )
    .unwrap();
    let v = json(&out);
    assert_eq!(v["target"], "out/");
    assert_eq!(v["exclusions"], serde_json::json!(["*.tmp", "*.log"]));
    assert_eq!(v["props"], serde_json::json!(["a=1", "b=2"]));
    assert_eq!(v["limit"], 16);
    assert_eq!(v["download"]["split_count"], 15);
    assert_eq!(v["download"]["min_split_size"], 1024);
    assert_eq!(v["download"]["skip_checksum"], true);
}

#[test]
fn download_config_bad_limit_is_ignored() {
    let v = json(&run(&["plugkit", "download-config", "--limit", "lots"], "").unwrap());
    assert_eq!(v["limit"], 0);
}

#[test]
fn download_config_rejects_split_count_over_max() {
    let err = run(&["plugkit", "download-config", "--split-count", "16"], "").unwrap_err();
    assert_eq!(
        err.to_string(),
        "The '--split-count' option value is limited to a maximum of 15."
    );
}

#[test]
fn download_config_rejects_bad_threads() {
    let err = run(&["plugkit", "download-config", "--threads", "0"], "").unwrap_err();
    assert!(err.to_string().contains("--threads"));
}

#[test]
fn download_config_uses_configured_defaults() {
    let cfg = PlugkitConfig {
        download: DownloadDefaults {
            min_split_kb: 100,
            split_count: 5,
            max_split_count: 6,
            threads: 9,
        },
        log_filter: None,
    };
    let v = json(&run_with(&["plugkit", "download-config"], "", &cfg).unwrap());
    assert_eq!(v["download"]["min_split_size"], 100);
    assert_eq!(v["download"]["split_count"], 5);
    assert_eq!(v["download"]["threads"], 9);
    assert!(run_with(&["plugkit", "download-config", "--split-count", "7"], "", &cfg).is_err());
}

#[test]
fn deprecated_alias_runs_download_config() {
    let old = run(&["plugkit", "dl-config", "--threads", "4"], "").unwrap();
    let new = run(&["plugkit", "download-config", "--threads", "4"], "").unwrap();
    assert_eq!(old, new);
}

#[test]
fn flags_lists_sorted_descriptors() {
    let out = run(&["plugkit", "flags", "download-config"], "").unwrap();
    let names: Vec<&str> = out
        .lines()
        .map(|l| l.split_whitespace().next().unwrap())
        .collect();
    assert_eq!(
        names,
        [
            "--exclusions",
            "--limit",
            "--min-split",
            "--props",
            "--skip-checksum",
            "--split-count",
            "--target",
            "--threads",
        ]
    );
}

#[test]
fn flags_unknown_command() {
    let out = run(&["plugkit", "flags", "deploy"], "").unwrap();
    assert_eq!(out.trim(), "no flags registered for 'deploy'");
}

#[test]
fn flags_wrong_argument_count() {
    let err = run(&["plugkit", "flags"], "").unwrap_err();
    assert_eq!(err.to_string(), "Wrong number of arguments (0).");
    let err = run(&["plugkit", "flags", "a", "b"], "").unwrap_err();
    assert_eq!(err.to_string(), "Wrong number of arguments (2).");
}

#[test]
fn exec_echoes_arguments() {
    let out = run(&["plugkit", "exec", "a", "--b", "c"], "").unwrap();
    assert_eq!(out, "a\n--b\nc\n");
}

#[test]
fn exec_bare_help_prints_nothing_to_output() {
    let out = run(&["plugkit", "exec", "--help"], "").unwrap();
    assert_eq!(out, "");
}

#[test]
fn whoami_reads_token_from_stdin() {
    let out = run(&["plugkit", "whoami", "--access-token-stdin"], "tok123\n").unwrap();
    assert!(out.contains("access token: 6 characters"));
    assert!(!out.contains("tok123"));
}

#[test]
fn whoami_rejects_both_token_sources() {
    let err = run(
        &["plugkit", "whoami", "--access-token", "x", "--access-token-stdin"],
        "y",
    )
    .unwrap_err();
    assert!(err.to_string().contains("mutually exclusive"));
}

#[test]
fn whoami_project_and_quiet_from_env() {
    let ctx = super::context(&["plugkit", "whoami"]);
    let env = MapEnv::new().with(PROJECT_ENV, "proj1").with(CI_ENV, "true");
    let mut out = Vec::new();
    run_whoami(&ctx, &env, &mut Cursor::new(""), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert_eq!(out, "project: proj1\nquiet: true\naccess token: <none>\n");

    let ctx = super::context(&["plugkit", "whoami", "--project", "proj2", "--quiet=false"]);
    let mut out = Vec::new();
    run_whoami(&ctx, &env, &mut Cursor::new(""), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert_eq!(out, "project: proj2\nquiet: false\naccess token: <none>\n");
}

#[test]
fn download_config_negative_values_reach_validation() {
    let err = run(&["plugkit", "download-config", "--split-count", "-1"], "").unwrap_err();
    assert_eq!(
        err.to_string(),
        "the '--split-count' option cannot have a negative value"
    );

    let err = run(&["plugkit", "download-config", "--threads", "-2"], "").unwrap_err();
    assert!(err.to_string().contains("--threads"));

    let v = json(&run(&["plugkit", "download-config", "--min-split", "-5"], "").unwrap());
    assert_eq!(v["download"]["min_split_size"], -5);
}

#[test]
fn download_config_negative_limit_is_parsed() {
    let v = json(&run(&["plugkit", "download-config", "--limit", "-0x10"], "").unwrap());
    assert_eq!(v["limit"], -16);
}
