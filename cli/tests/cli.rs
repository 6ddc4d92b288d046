use std::fs;

use assert_cmd::Command;
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn answers(owner: &str, repo: &str, output_dir: &std::path::Path) -> String {
    format!("{owner}\n{repo}\n{}\n", output_dir.display())
}

#[tokio::test(flavor = "multi_thread")]
async fn writes_manifest_and_exits_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/Hello-World"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Hello-World",
            "description": "My first repo",
            "html_url": "https://github.com/octocat/Hello-World",
            "topics": ["demo"],
            "owner": { "login": "octocat" },
            "license": { "spdx_id": "MIT" },
            "homepage": null
        })))
        .mount(&server)
        .await;
    let temp = TempDir::new().unwrap();
    let output_dir = temp.path().join("output");

    let output = Command::cargo_bin("repo-manifest")
        .unwrap()
        .arg("--api-base")
        .arg(server.uri())
        .write_stdin(answers("octocat", "Hello-World", &output_dir))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("package.json written to"));
    let written: Value =
        serde_json::from_str(&fs::read_to_string(output_dir.join("package.json")).unwrap())
            .unwrap();
    assert_eq!(written["bugs"]["url"], "https://github.com/octocat/Hello-World/issues");
}

#[tokio::test(flavor = "multi_thread")]
async fn not_found_exits_one_without_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest"
        })))
        .mount(&server)
        .await;
    let temp = TempDir::new().unwrap();
    let output_dir = temp.path().join("output");

    let output = Command::cargo_bin("repo-manifest")
        .unwrap()
        .arg("--api-base")
        .arg(server.uri())
        .write_stdin(answers("octocat", "missing", &output_dir))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to generate package.json"), "{stderr}");
    assert!(stderr.contains("HTTP 404"), "{stderr}");
    assert!(stderr.contains("Not Found"), "{stderr}");
    assert!(!output_dir.exists());
}

#[test]
fn closed_stdin_exits_one() {
    let output = Command::cargo_bin("repo-manifest")
        .unwrap()
        .args(["--api-base", "http://127.0.0.1:9"])
        .write_stdin("")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
}
