use election_helper::{Config, Error, GitHubClient, RepositoryApi, Reporter, View};
use election_helper::report::Confirmer;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct FixedAnswer(&'static str);

impl Confirmer for FixedAnswer {
    fn ask(&mut self, _prompt: &str) -> election_helper::Result<String> {
        Ok(self.0.to_string())
    }
}

fn config_for(server: &MockServer, view: View) -> Config {
    Config {
        view,
        organization: "acme".to_string(),
        repository: "club".to_string(),
        api_url: server.uri(),
        github_url: "https://github.com".to_string(),
        ..Config::default()
    }
    .validate()
    .unwrap()
}

fn comment_json(server: &MockServer, id: u64, user: &str, body: &str, issue: u64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "user": {"login": user},
        "body": body,
        "url": format!("{}/repos/acme/club/issues/comments/{}", server.uri(), id),
        "issue_url": format!("{}/repos/acme/club/issues/{}", server.uri(), issue)
    })
}

async fn mount_comments(server: &MockServer, comments: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/repos/acme/club/issues/comments"))
        .and(header("authorization", "token test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(comments))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_list_comments_sends_token_and_maps_issue() {
    let server = MockServer::start().await;
    mount_comments(
        &server,
        serde_json::json!([
            comment_json(&server, 1, "alice", "THIS", 10),
            comment_json(&server, 2, "carol", "no", 11),
        ]),
    )
    .await;

    let config = config_for(&server, View::Voters);
    let client = GitHubClient::new(&config, "test-token").unwrap();
    let comments = client.list_comments().await.unwrap();

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].user, "alice");
    assert_eq!(comments[0].issue, "10");
    assert_eq!(comments[1].issue, "11");
}

#[tokio::test]
async fn test_non_success_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/club/collaborators"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Resource not accessible"))
        .mount(&server)
        .await;

    let config = config_for(&server, View::Voters);
    let client = GitHubClient::new(&config, "test-token").unwrap();

    match client.list_collaborators().await {
        Err(Error::Http { status, endpoint, body }) => {
            assert_eq!(status.as_u16(), 403);
            assert!(endpoint.ends_with("/repos/acme/club/collaborators"));
            assert_eq!(body, "Resource not accessible");
        }
        other => panic!("expected http error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_winners_end_to_end() {
    let server = MockServer::start().await;
    mount_comments(
        &server,
        serde_json::json!([
            comment_json(&server, 1, "alice", "THIS", 10),
            comment_json(&server, 2, "bob", "THIS", 10),
            comment_json(&server, 3, "carol", "no", 11),
        ]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/club/issues/10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "number": 10,
            "title": "Deep Residual Learning",
            "html_url": "https://github.com/acme/club/issues/10"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/club/issues/11"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = config_for(&server, View::Winners);
    let client = GitHubClient::new(&config, "test-token").unwrap();
    let mut reporter = Reporter::new(&config, &client, Vec::new());
    reporter.run(&mut FixedAnswer("")).await.unwrap();

    let output = String::from_utf8(reporter.into_inner()).unwrap();
    assert_eq!(
        output,
        "Deep Residual Learning (#10) has received 2 votes. (https://github.com/acme/club/issues/10)\n"
    );
}

#[tokio::test]
async fn test_empty_comment_list_makes_no_further_calls() {
    let server = MockServer::start().await;
    mount_comments(&server, serde_json::json!([])).await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/club/collaborators"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let config = config_for(&server, View::Voters);
    let client = GitHubClient::new(&config, "test-token").unwrap();
    let mut reporter = Reporter::new(&config, &client, Vec::new());
    reporter.run(&mut FixedAnswer("")).await.unwrap();

    let output = String::from_utf8(reporter.into_inner()).unwrap();
    assert_eq!(output, "There are no votes at the moment.\n");
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_clear_deletes_each_vote_by_url() {
    let server = MockServer::start().await;
    mount_comments(
        &server,
        serde_json::json!([
            comment_json(&server, 7, "alice", "THIS", 10),
            comment_json(&server, 8, "bob", "THIS", 12),
            comment_json(&server, 9, "bob", "nice paper", 12),
        ]),
    )
    .await;
    Mock::given(method("DELETE"))
        .and(path("/repos/acme/club/issues/comments/7"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/repos/acme/club/issues/comments/8"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/repos/acme/club/issues/comments/9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let config = config_for(&server, View::Clear);
    let client = GitHubClient::new(&config, "test-token").unwrap();
    let mut reporter = Reporter::new(&config, &client, Vec::new());
    reporter.run(&mut FixedAnswer("Y")).await.unwrap();

    let output = String::from_utf8(reporter.into_inner()).unwrap();
    assert!(output.ends_with("Deleted 2 votes.\n"));
}

#[tokio::test]
async fn test_clear_declined_issues_no_deletes() {
    let server = MockServer::start().await;
    mount_comments(
        &server,
        serde_json::json!([comment_json(&server, 7, "alice", "THIS", 10)]),
    )
    .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let config = config_for(&server, View::Clear);
    let client = GitHubClient::new(&config, "test-token").unwrap();
    let mut reporter = Reporter::new(&config, &client, Vec::new());
    let result = reporter.run(&mut FixedAnswer("n")).await;

    assert!(matches!(result, Err(Error::UserAbort)));
}
