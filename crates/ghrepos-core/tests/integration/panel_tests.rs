use ghrepos_core::config::FetchMode;
use ghrepos_core::panel::Action;
use ghrepos_core::render::render;
use ghrepos_core::view::FilterField;
use ghrepos_core::{PanelDriver, Phase};
use rstest::rstest;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::test_utils::{
    config_for, init_tracing, mount_user, octocat_repos, octocat_user, repo_json,
};

async fn search(driver: &mut PanelDriver, username: &str) {
    init_tracing();
    driver.dispatch(Action::Search {
        username: username.to_string(),
    });
    driver.settle().await;
}

fn seven_repos() -> Value {
    let repos: Vec<Value> = (1..=7)
        .map(|i| {
            repo_json(
                &format!("repo-{i}"),
                &format!("{}-01-01T00:00:00Z", 2020 - i),
                Some("Rust"),
            )
        })
        .collect();
    Value::Array(repos)
}

#[rstest]
#[case(FetchMode::Concurrent)]
#[case(FetchMode::Sequential)]
#[tokio::test]
async fn test_octocat_sorted_newest_first(#[case] mode: FetchMode) {
    let server = MockServer::start().await;
    mount_user(&server, "octocat", octocat_user(), octocat_repos()).await;

    let mut driver = PanelDriver::from_config(&config_for(&server, mode)).unwrap();
    search(&mut driver, "octocat").await;

    assert_eq!(driver.state().phase(), &Phase::Ready);
    assert_eq!(
        driver.state().view().names(),
        ["Hello-World", "Spoon-Knife", "git-consortium"]
    );
}

#[tokio::test]
async fn test_language_filter_excludes_null_language() {
    let server = MockServer::start().await;
    let repos = json!([
        repo_json("a", "2020-01-01T00:00:00Z", Some("Java")),
        repo_json("b", "2019-01-01T00:00:00Z", Some("JavaScript")),
        repo_json("c", "2018-01-01T00:00:00Z", None),
        repo_json("d", "2017-01-01T00:00:00Z", Some("Python")),
    ]);
    mount_user(&server, "octocat", octocat_user(), repos).await;

    let mut driver =
        PanelDriver::from_config(&config_for(&server, FetchMode::Concurrent)).unwrap();
    search(&mut driver, "octocat").await;

    driver.dispatch(Action::SetFilterField(FilterField::Language));
    driver.dispatch(Action::SetFilterText("java".to_string()));
    assert_eq!(driver.state().view().names(), ["a", "b"]);
}

#[tokio::test]
async fn test_seven_repos_paginate_into_two_pages() {
    let server = MockServer::start().await;
    mount_user(&server, "octocat", octocat_user(), seven_repos()).await;

    let mut driver =
        PanelDriver::from_config(&config_for(&server, FetchMode::Concurrent)).unwrap();
    search(&mut driver, "octocat").await;

    let first = driver.state().view();
    assert_eq!(first.page_count, 2);
    assert_eq!(
        first.names(),
        ["repo-1", "repo-2", "repo-3", "repo-4", "repo-5"]
    );

    driver.dispatch(Action::SetPage(2));
    assert_eq!(driver.state().view().names(), ["repo-6", "repo-7"]);
    assert!(render(driver.state()).contains("Page 2 of 2 (7 repositories)"));
}

#[rstest]
#[case(FetchMode::Concurrent)]
#[case(FetchMode::Sequential)]
#[tokio::test]
async fn test_nonexistent_user_errors_then_retry_recovers(#[case] mode: FetchMode) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut driver = PanelDriver::from_config(&config_for(&server, mode)).unwrap();
    search(&mut driver, "octocat").await;

    assert_eq!(
        driver.state().phase(),
        &Phase::Error {
            message: "GitHub user not found: octocat".to_string()
        }
    );
    assert!(render(driver.state()).contains("retry"));

    server.reset().await;
    mount_user(&server, "octocat", octocat_user(), octocat_repos()).await;

    driver.dispatch(Action::Retry);
    assert_eq!(driver.state().phase(), &Phase::Loading);
    driver.settle().await;
    assert_eq!(driver.state().phase(), &Phase::Ready);
}

#[tokio::test]
async fn test_new_search_replaces_previous_user() {
    let server = MockServer::start().await;
    mount_user(&server, "octocat", octocat_user(), octocat_repos()).await;

    let mut other = octocat_user();
    other["login"] = json!("hubot");
    other["name"] = Value::Null;
    mount_user(&server, "hubot", other, json!([])).await;

    let mut driver =
        PanelDriver::from_config(&config_for(&server, FetchMode::Concurrent)).unwrap();
    search(&mut driver, "octocat").await;
    search(&mut driver, "hubot").await;

    let state = driver.state();
    assert_eq!(state.user().unwrap().login, "hubot");
    assert!(state.repos().is_empty());
    assert!(render(state).contains("No repositories match the filter."));
}
