use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ghrepos_core::config::{AppConfig, FetchMode, GithubConfig};

/// Profile payload as GitHub returns it, including fields we ignore.
pub fn octocat_user() -> Value {
    json!({
        "login": "octocat",
        "id": 583231,
        "node_id": "MDQ6VXNlcjU4MzIzMQ==",
        "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
        "html_url": "https://github.com/octocat",
        "type": "User",
        "name": "The Octocat",
        "company": "@github",
        "public_repos": 3,
        "followers": 17000,
        "following": 9
    })
}

/// Repository payload with the given name, creation time and language.
pub fn repo_json(name: &str, created_at: &str, language: Option<&str>) -> Value {
    json!({
        "id": 1,
        "name": name,
        "full_name": format!("octocat/{name}"),
        "private": false,
        "html_url": format!("https://github.com/octocat/{name}"),
        "fork": false,
        "created_at": created_at,
        "updated_at": "2024-01-01T00:00:00Z",
        "size": 108,
        "stargazers_count": 42,
        "language": language
    })
}

/// The three repositories of the octocat scenario, in scrambled API order.
pub fn octocat_repos() -> Value {
    json!([
        repo_json("Spoon-Knife", "2019-01-26T19:01:12Z", Some("HTML")),
        repo_json("git-consortium", "2018-05-10T08:00:00Z", None),
        repo_json("Hello-World", "2020-03-06T12:00:00Z", Some("JavaScript")),
    ])
}

/// Mount profile and repository responses for `username`.
pub async fn mount_user(server: &MockServer, username: &str, user: Value, repos: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/users/{username}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(user))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/users/{username}/repos")))
        .respond_with(ResponseTemplate::new(200).set_body_json(repos))
        .mount(server)
        .await;
}

/// Configuration pointing at `server`.
pub fn config_for(server: &MockServer, mode: FetchMode) -> AppConfig {
    let mut config = AppConfig {
        github: GithubConfig::with_api_url(server.uri()),
        ..AppConfig::default()
    };
    config.fetch.mode = mode;
    config
}

/// Route library logs through the test harness. Honors `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
