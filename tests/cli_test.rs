//! Integration tests for the CLI surface.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Write a site config wired to the mock server into a fresh project dir.
fn setup_site(server: &MockServer) -> TempDir {
    let temp = TempDir::new().unwrap();
    let cache_dir = temp.path().join("_flickr_cache");
    let config = format!(
        "flickr:\n  api_key: key\n  shared_secret: shared\n  access_token: cfg-token\n  access_secret: secret\n  endpoint: {}\n  cache_dir: {}\n",
        server.url("/services/rest/"),
        cache_dir.display(),
    );
    fs::write(temp.path().join("_config.yml"), config).unwrap();
    temp
}

fn mock_login(server: &MockServer, token: &str) {
    let token = token.to_string();
    server.mock(move |when, then| {
        when.method(GET)
            .path("/services/rest/")
            .query_param("method", "flickr.test.login")
            .query_param("auth_token", &token);
        then.status(200)
            .body(r#"{"user": {"id": "u"}, "stat": "ok"}"#);
    });
}

fn mock_single_photo_set(server: &MockServer) {
    server.mock(|when, then| {
        when.method(GET)
            .path("/services/rest/")
            .query_param("method", "flickr.photosets.getPhotos")
            .query_param("photoset_id", "72157");
        then.status(200).body(
            r#"{"photoset": {"id": "72157", "photo": [{"id": "1", "title": "Lone"}]}, "stat": "ok"}"#,
        );
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/services/rest/")
            .query_param("method", "flickr.photos.getSizes")
            .query_param("photo_id", "1");
        then.status(200).body(
            r#"{"sizes": {"size": [
                {"label": "Large Square", "source": "https://s/1_sq.jpg", "url": "https://f/1/sq/"},
                {"label": "Medium 800", "source": "https://s/1_c.jpg", "url": "https://f/1/c/"},
                {"label": "Large", "source": "https://s/1_b.jpg", "url": "https://f/1/b/"}
            ]}, "stat": "ok"}"#,
        );
    });
}

#[test]
fn cli_shows_help() {
    let mut cmd = Command::new(cargo_bin("flickrset"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Flickr photoset tag"));
}

#[test]
fn cli_shows_version() {
    let mut cmd = Command::new(cargo_bin("flickrset"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn cli_render_requires_photoset_id() {
    let mut cmd = Command::new(cargo_bin("flickrset"));
    cmd.arg("render");
    cmd.assert().failure();
}

#[test]
fn cli_missing_config_file_fails() {
    let temp = TempDir::new().unwrap();
    let mut cmd = Command::new(cargo_bin("flickrset"));
    cmd.current_dir(temp.path());
    cmd.args(["render", "72157", "--config", "absent.yml"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Site configuration not found"));
}

#[test]
fn cli_render_emits_fragment_and_populates_cache() {
    let server = MockServer::start();
    mock_login(&server, "cfg-token");
    mock_single_photo_set(&server);

    let temp = setup_site(&server);
    let mut cmd = Command::new(cargo_bin("flickrset"));
    cmd.current_dir(temp.path());
    cmd.args(["render", "72157"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<img class=\"th\" src=\"https://s/1_c.jpg\""));

    let entry = temp
        .path()
        .join("_flickr_cache")
        .join("72157-Large Square-Medium 800-Large-Site MP4.yml");
    assert!(entry.exists());
}

#[test]
fn cli_quiet_flag_is_accepted_and_render_still_emits_fragment() {
    let server = MockServer::start();
    mock_login(&server, "cfg-token");
    mock_single_photo_set(&server);

    let temp = setup_site(&server);
    Command::new(cargo_bin("flickrset"))
        .current_dir(temp.path())
        .args(["--quiet", "render", "72157"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<img class=\"th\""));
}

#[test]
fn cli_cache_list_and_clear_round_trip() {
    let server = MockServer::start();
    mock_login(&server, "cfg-token");
    mock_single_photo_set(&server);

    let temp = setup_site(&server);
    Command::new(cargo_bin("flickrset"))
        .current_dir(temp.path())
        .args(["render", "72157"])
        .assert()
        .success();

    Command::new(cargo_bin("flickrset"))
        .current_dir(temp.path())
        .args(["cache", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("72157-Large Square"));

    Command::new(cargo_bin("flickrset"))
        .current_dir(temp.path())
        .args(["cache", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1"));

    Command::new(cargo_bin("flickrset"))
        .current_dir(temp.path())
        .args(["cache", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cache is empty"));
}

#[test]
fn cli_check_reports_valid_credentials() {
    let server = MockServer::start();
    mock_login(&server, "cfg-token");

    let temp = setup_site(&server);
    Command::new(cargo_bin("flickrset"))
        .current_dir(temp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Credentials OK"));
}

#[test]
fn cli_check_rejects_bad_token() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/services/rest/")
            .query_param("method", "flickr.test.login");
        then.status(200)
            .body(r#"{"stat": "fail", "code": 98, "message": "Invalid auth token"}"#);
    });

    let temp = setup_site(&server);
    Command::new(cargo_bin("flickrset"))
        .current_dir(temp.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cfg-token"));
}

#[test]
fn cli_environment_token_overrides_config() {
    let server = MockServer::start();
    // Only the environment token is accepted by the mock.
    mock_login(&server, "env-token");

    let temp = setup_site(&server);
    Command::new(cargo_bin("flickrset"))
        .current_dir(temp.path())
        .env("FLICKR_ACCESS_TOKEN", "env-token")
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Credentials OK"));
}
