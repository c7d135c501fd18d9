//! End-to-end tests for the model-regions binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("model-regions").unwrap();
    for var in [
        "REGION",
        "DASHSCOPE_API_BASE",
        "SILICONFLOW_API_BASE",
        "DASHSCOPE_API_KEY",
        "SILICONFLOW_API_KEY",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn normalize_prints_canonical_region() {
    cli()
        .args(["normalize", "CN"])
        .assert()
        .success()
        .stdout("prc\n");
    cli()
        .args(["normalize", "En"])
        .assert()
        .success()
        .stdout("international\n");
}

#[test]
fn normalize_rejects_unknown_region() {
    cli()
        .args(["normalize", "xx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized region"));
}

#[test]
fn resolve_uses_region() {
    cli()
        .env("REGION", "prc")
        .args(["resolve", "dashscope:qwen-max"])
        .assert()
        .success()
        .stdout("https://dashscope.aliyuncs.com/compatible-mode/v1\n");
}

#[test]
fn resolve_prefers_explicit_override() {
    cli()
        .env("REGION", "prc")
        .env("DASHSCOPE_API_BASE", "http://custom")
        .args(["resolve", "dashscope:qwen-max"])
        .assert()
        .success()
        .stdout("http://custom\n");
}

#[test]
fn resolve_other_provider_prints_none() {
    cli()
        .env("REGION", "prc")
        .args(["resolve", "openai:gpt-4o"])
        .assert()
        .success()
        .stdout("(none)\n");
}

#[test]
fn load_reports_region_url() {
    cli()
        .env("REGION", "international")
        .args([
            "load",
            "siliconflow:some-model",
            "--api-key",
            "sk-test",
            "--base-url",
            "http://ignored",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("some-model"))
        .stdout(predicate::str::contains("base_url: https://api.siliconflow.com/v1"));
}

#[test]
fn load_without_key_fails() {
    cli()
        .args(["load", "dashscope:qwen-max"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("DASHSCOPE_API_KEY"));
}

#[test]
fn load_unknown_provider_fails() {
    cli()
        .args(["load", "openai:gpt-4o", "--api-key", "sk-test"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown provider 'openai'"));
}

#[test]
fn providers_lists_builtins() {
    cli()
        .arg("providers")
        .assert()
        .success()
        .stdout("dashscope\nsiliconflow\n");
}

#[test]
fn text_flattens_content_parts() {
    cli()
        .args(["text", r#"{"content": ["a", {"text": "b"}, {}]}"#])
        .assert()
        .success()
        .stdout("ab\n");
}

#[test]
fn text_reads_stdin() {
    cli()
        .args(["text", "-"])
        .write_stdin(r#"{"role": "assistant", "content": {"text": "hi"}}"#)
        .assert()
        .success()
        .stdout("hi\n");
}
