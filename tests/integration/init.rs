//! Tests for `codeql-runner init`

use super::common::{codeql_runner_command, output_of};
use predicates::prelude::*;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn ghes_server(version: &str) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/meta"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-GitHub-Enterprise-Version", version)
                .set_body_json(serde_json::json!({})),
        )
        .mount(&mock_server)
        .await;

    mock_server
}

#[test]
fn test_init_requires_github_url() {
    codeql_runner_command()
        .arg("init")
        .env("GITHUB_TOKEN", "abc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--github-url must be specified"));
}

#[test]
fn test_init_requires_auth() {
    codeql_runner_command()
        .args(["init", "--github-url", "https://github.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "No GitHub authentication token was specified",
        ));
}

#[test]
fn test_init_rejects_both_auth_sources() {
    codeql_runner_command()
        .args([
            "init",
            "--github-url",
            "https://github.com",
            "--github-auth",
            "abc",
            "--github-auth-stdin",
        ])
        .write_stdin("def\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Cannot specify both `--github-auth` and `--github-auth-stdin`",
        ));
}

#[test]
fn test_init_rejects_invalid_url() {
    codeql_runner_command()
        .args(["init", "--github-url", "ftp://example.com"])
        .env("GITHUB_TOKEN", "abc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a http or https URL"));
}

#[test]
fn test_init_dotcom_prints_flags() {
    codeql_runner_command()
        .args(["init", "--github-url", "github.com", "--ram", "2048", "--threads", "1"])
        .env("GITHUB_TOKEN", "abc")
        .assert()
        .success()
        .stdout("--ram=2048\n--threads=1\n--no-sarif-add-snippets\n");
}

#[test]
fn test_init_explicit_auth_warns() {
    codeql_runner_command()
        .args([
            "init",
            "--github-url",
            "https://github.com",
            "--github-auth",
            "abc",
            "--ram",
            "2048",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("is insecure"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_init_warns_for_old_ghes() {
    let mock_server = ghes_server("2.20.0").await;

    let mut cmd = codeql_runner_command();
    cmd.args(["init", "--github-url", mock_server.uri().as_str(), "--ram", "2048"])
        .env("GITHUB_TOKEN", "abc");
    let output = output_of(cmd).await;

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("GitHub Enterprise 2.20.0 is too old to be compatible"));
    assert!(stderr.contains("CodeQL Runner"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_init_supported_ghes_does_not_warn() {
    let mock_server = ghes_server("3.1.0").await;

    let mut cmd = codeql_runner_command();
    cmd.args(["init", "--github-url", mock_server.uri().as_str(), "--ram", "2048"])
        .env("GITHUB_TOKEN", "abc");
    let output = output_of(cmd).await;

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("compatible"));
    assert!(String::from_utf8_lossy(&output.stdout).contains("--ram=2048"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_init_reads_token_from_stdin() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/meta"))
        .and(header("authorization", "token piped-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut cmd = codeql_runner_command();
    cmd.args([
        "init",
        "--github-url",
        format!("{}/api/v3", mock_server.uri()).as_str(),
        "--github-auth-stdin",
        "--ram",
        "2048",
    ])
    .write_stdin("  piped-token\nignored");
    let output = output_of(cmd).await;

    assert!(output.status.success());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_init_reports_http_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/meta"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let mut cmd = codeql_runner_command();
    cmd.args(["init", "--github-url", mock_server.uri().as_str()])
        .env("GITHUB_TOKEN", "bad");
    let output = output_of(cmd).await;

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("401"));
}
