use std::time::Duration;

use ghrepos_core::Error;
use ghrepos_core::config::GithubConfig;
use ghrepos_core::github::{GithubApi, GithubClient};
use serde_json::json;
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::test_utils::{mount_user, octocat_repos, octocat_user};

fn client_for(server: &MockServer) -> GithubClient {
    GithubClient::new(&GithubConfig::with_api_url(server.uri())).unwrap()
}

#[tokio::test]
async fn test_fetch_user_sends_github_headers() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .and(header("accept", "application/vnd.github.v3+json"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(octocat_user()))
        .expect(1)
        .mount(&server)
        .await;

    let user = client_for(&server).fetch_user("octocat").await?;
    assert_eq!(user.login, "octocat");
    assert_eq!(user.name.as_deref(), Some("The Octocat"));
    assert_eq!(user.followers, 17000);
    assert_eq!(user.public_repos, 3);
    assert_eq!(user.html_url, "https://github.com/octocat");
    Ok(())
}

#[tokio::test]
async fn test_fetch_repos_keeps_api_order() {
    let server = MockServer::start().await;
    mount_user(&server, "octocat", octocat_user(), octocat_repos()).await;

    let repos = client_for(&server).fetch_repos("octocat").await.unwrap();
    let names: Vec<_> = repos.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Spoon-Knife", "git-consortium", "Hello-World"]);
    assert_eq!(repos[1].language, None);
}

#[tokio::test]
async fn test_unknown_user_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/no-such-user-xyz"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "Not Found" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_user("no-such-user-xyz")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::UserNotFound(ref name) if name == "no-such-user-xyz"));
}

#[tokio::test]
async fn test_rate_limit_reports_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .respond_with(ResponseTemplate::new(403).set_body_string("API rate limit exceeded"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_repos("octocat").await.unwrap_err();
    match err {
        Error::ApiStatus { status, url, body } => {
            assert_eq!(status, 403);
            assert!(url.ends_with("/users/octocat/repos"));
            assert_eq!(body, "API rate limit exceeded");
        }
        other => panic!("expected ApiStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "not": "a list" })))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_repos("octocat").await.unwrap_err();
    assert!(matches!(
        err,
        Error::Decode {
            what: "repository list",
            ..
        }
    ));
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(octocat_user())
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = GithubConfig {
        timeout_seconds: 1,
        ..GithubConfig::with_api_url(server.uri())
    };
    let client = GithubClient::new(&config).unwrap();

    let err = client.fetch_user("octocat").await.unwrap_err();
    assert!(matches!(err, Error::Http(ref e) if e.is_timeout()));
}

#[tokio::test]
async fn test_connection_refused_is_http_error() {
    let client = GithubClient::new(&GithubConfig::with_api_url("http://127.0.0.1:1")).unwrap();
    let err = client.fetch_user("octocat").await.unwrap_err();
    assert!(matches!(err, Error::Http(_)));
}
