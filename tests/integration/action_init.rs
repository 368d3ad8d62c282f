//! Tests for `codeql-runner action-init`

use super::common::{output_of, TestContext};
use predicates::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_action_init_requires_token() {
    let ctx = TestContext::new();

    ctx.action_command()
        .arg("action-init")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "::error::Input required and not supplied: token",
        ));
}

#[test]
fn test_action_init_dotcom_writes_outputs() {
    let ctx = TestContext::new();

    ctx.action_command()
        .arg("action-init")
        .env("INPUT_TOKEN", "ghs_abc")
        .env("INPUT_RAM", "2048")
        .env("INPUT_THREADS", "1")
        .env("INPUT_ADD-SNIPPETS", "true")
        .assert()
        .success();

    let output = TestContext::read(&ctx.github_output());
    assert!(output.contains("ram<<CODEQL_ACTION_EOF\n--ram=2048\nCODEQL_ACTION_EOF\n"));
    assert!(output.contains("threads<<CODEQL_ACTION_EOF\n--threads=1\nCODEQL_ACTION_EOF\n"));
    assert!(output.contains("add-snippets<<CODEQL_ACTION_EOF\n--sarif-add-snippets\n"));
    assert!(output.contains("github-variant<<CODEQL_ACTION_EOF\nGitHub.com\n"));

    let exported = TestContext::read(&ctx.github_env());
    assert!(exported.contains("CODEQL_ACTION_RUN_MODE<<CODEQL_ACTION_EOF\nAction\n"));
    assert!(exported.contains("CODEQL_ACTION_FEATURE_SARIF_COMBINE<<CODEQL_ACTION_EOF\ntrue\n"));
    assert!(exported.contains("CODEQL_ACTION_FEATURE_WILL_UPLOAD<<CODEQL_ACTION_EOF\ntrue\n"));
    assert!(exported.contains("CODEQL_ACTION_VERSION<<CODEQL_ACTION_EOF\n"));
}

#[test]
fn test_action_init_invalid_input() {
    let ctx = TestContext::new();

    ctx.action_command()
        .arg("action-init")
        .env("INPUT_TOKEN", "ghs_abc")
        .env("INPUT_THREADS", "many")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "::error::Invalid threads setting \"many\", specified.",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_action_init_warns_once_for_new_ghes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/meta"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-GitHub-Enterprise-Version", "3.9.0")
                .set_body_json(serde_json::json!({})),
        )
        .mount(&mock_server)
        .await;

    let ctx = TestContext::new();
    let mut cmd = ctx.action_command();
    cmd.arg("action-init")
        .env("INPUT_TOKEN", "ghs_abc")
        .env("INPUT_RAM", "2048")
        .env("GITHUB_SERVER_URL", mock_server.uri());
    let output = output_of(cmd).await;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(
        "::warning::The CodeQL Action version you are using is too old to be compatible with GitHub Enterprise 3.9.0."
    ));

    let exported = TestContext::read(&ctx.github_env());
    assert!(exported.contains("CODEQL_ACTION_WARNED_ABOUT_VERSION<<CODEQL_ACTION_EOF\ntrue\n"));

    let outputs = TestContext::read(&ctx.github_output());
    assert!(outputs.contains("github-variant<<CODEQL_ACTION_EOF\nGitHub Enterprise Server\n"));

    // A later step of the same job sees the exported flag and stays quiet
    let mut cmd = ctx.action_command();
    cmd.arg("action-init")
        .env("INPUT_TOKEN", "ghs_abc")
        .env("INPUT_RAM", "2048")
        .env("GITHUB_SERVER_URL", mock_server.uri())
        .env("CODEQL_ACTION_WARNED_ABOUT_VERSION", "true");
    let output = output_of(cmd).await;

    assert!(output.status.success());
    assert!(!String::from_utf8_lossy(&output.stdout).contains("::warning::"));
}
