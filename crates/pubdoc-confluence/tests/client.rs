//! HTTP behavior of `ConfluenceClient` against a local stub server.

mod support;

use pretty_assertions::assert_eq;
use pubdoc_config::Credentials;
use pubdoc_confluence::types::BodyFormat;
use pubdoc_confluence::{
    ApiErrorKind, ConfluenceClient, ConfluenceError, LocalDocument, PageQuery, PublishOutcome,
    Publisher,
};
use pubdoc_renderer::MarkdownRenderer;
use serde_json::{Value, json};

use support::{StubResponse, StubServer};

const SPACE_ID: &str = "98304";

fn client(server: &StubServer) -> ConfluenceClient {
    let credentials = Credentials {
        username: "me@example.com".to_owned(),
        api_key: "token".to_owned(),
    };
    ConfluenceClient::new(server.base_url(), SPACE_ID, &credentials)
}

fn summary(id: &str, title: &str, version: u32) -> Value {
    json!({
        "id": id,
        "status": "current",
        "title": title,
        "spaceId": SPACE_ID,
        "parentId": null,
        "version": {"number": version, "message": "", "minorEdit": false},
        "_links": {"webui": format!("/spaces/DOCS/pages/{id}")}
    })
}

fn pages(results: Vec<Value>) -> StubResponse {
    StubResponse::json(200, json!({"results": results, "_links": {}}))
}

fn updated_page(id: &str, title: &str, version: u32, html: &str) -> StubResponse {
    StubResponse::json(
        200,
        json!({
            "id": id,
            "status": "current",
            "title": title,
            "spaceId": SPACE_ID,
            "version": {"number": version, "message": "pubdoc automated update"},
            "body": {"storage": {"representation": "storage", "value": html}},
            "isFavoritedByCurrentUser": false
        }),
    )
}

#[test]
fn create_page_posts_storage_body() {
    let server = StubServer::start(vec![StubResponse::json(
        200,
        json!({"id": "65538", "title": "README", "status": "current"}),
    )]);

    let id = client(&server)
        .create_page("README", "<h1>1</h1>", None)
        .unwrap();
    assert_eq!(id, "65538");

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].target, "/wiki/api/v2/pages");
    assert_eq!(
        requests[0].authorization.as_deref(),
        Some("Basic bWVAZXhhbXBsZS5jb206dG9rZW4=")
    );
    assert_eq!(
        requests[0].json(),
        json!({
            "spaceId": SPACE_ID,
            "status": "current",
            "title": "README",
            "body": {"representation": "storage", "value": "<h1>1</h1>"}
        })
    );
}

#[test]
fn create_page_with_parent() {
    let server = StubServer::start(vec![StubResponse::json(
        200,
        json!({"id": "2", "title": "Child"}),
    )]);

    client(&server)
        .create_page("Child", "<p/>", Some("1"))
        .unwrap();

    assert_eq!(server.requests()[0].json()["parentId"], "1");
}

#[test]
fn create_page_duplicate_title_is_classified() {
    let server = StubServer::start(vec![StubResponse::json(
        400,
        json!({"errors": [{
            "status": 400,
            "code": "BAD_REQUEST",
            "title": "A page with this title already exists: A page already exists with the same TITLE in this space",
            "detail": null
        }]}),
    )]);

    let err = client(&server)
        .create_page("README", "<h1>1</h1>", None)
        .unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::DuplicateTitle);
    assert!(err.to_string().contains("400"));
}

#[test]
fn create_page_requires_exactly_200() {
    let server = StubServer::start(vec![StubResponse::json(
        201,
        json!({"id": "1", "title": "README"}),
    )]);

    let err = client(&server)
        .create_page("README", "", None)
        .unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::Other);
}

#[test]
fn create_page_undecodable_response() {
    let server = StubServer::start(vec![StubResponse::json(200, json!({"unexpected": true}))]);

    let err = client(&server)
        .create_page("README", "", None)
        .unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::Decode);
}

#[test]
fn get_pages_sends_query_filters() {
    let server = StubServer::start(vec![pages(vec![summary("1", "README", 4)])]);

    let query = PageQuery::by_title("README")
        .with_limit(10)
        .with_body_format(BodyFormat::Storage);
    let response = client(&server).get_pages_in_space(&query).unwrap();

    assert_eq!(response.results.len(), 1);
    assert_eq!(response.results[0].version.number, 4);

    let request = &server.requests()[0];
    assert_eq!(request.method, "GET");
    assert!(request.target.starts_with("/wiki/api/v2/spaces/98304/pages?"));
    assert!(request.target.contains("title=README"));
    assert!(request.target.contains("limit=10"));
    assert!(request.target.contains("body-format=storage"));
}

#[test]
fn get_pages_without_filters_has_no_query() {
    let server = StubServer::start(vec![pages(Vec::new())]);

    client(&server)
        .get_pages_in_space(&PageQuery::default())
        .unwrap();

    assert_eq!(server.requests()[0].target, "/wiki/api/v2/spaces/98304/pages");
}

#[test]
fn get_pages_no_match_is_empty_list() {
    let server = StubServer::start(vec![pages(Vec::new())]);

    let response = client(&server)
        .get_pages_in_space(&PageQuery::by_title("READMEEEEEEEE").with_limit(10))
        .unwrap();
    assert!(response.results.is_empty());
}

#[test]
fn get_pages_unauthorized() {
    let server = StubServer::start(vec![StubResponse::json(
        401,
        json!({"code": 401, "message": "Unauthorized; scope does not match"}),
    )]);

    let err = client(&server)
        .get_pages_in_space(&PageQuery::default())
        .unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::Unauthorized);
}

#[test]
fn update_page_increments_version() {
    let server = StubServer::start(vec![
        pages(vec![summary("65538", "README", 7)]),
        updated_page("65538", "README", 8, "<h1>2</h1>"),
    ]);

    let page = client(&server)
        .update_page("README", "<h1>2</h1>")
        .unwrap()
        .expect("single match should be updated");
    assert_eq!(page.summary.version.number, 8);
    assert_eq!(page.summary.storage_value(), "<h1>2</h1>");

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].target.contains("title=README"));
    assert!(requests[0].target.contains("limit=10"));
    assert_eq!(requests[1].method, "PUT");
    assert_eq!(requests[1].target, "/wiki/api/v2/pages/65538");
    assert_eq!(
        requests[1].json(),
        json!({
            "id": "65538",
            "status": "current",
            "title": "README",
            "body": {"representation": "storage", "value": "<h1>2</h1>"},
            "version": {"number": 8, "message": "pubdoc automated update"}
        })
    );
}

#[test]
fn update_page_no_match_is_noop() {
    let server = StubServer::start(vec![pages(Vec::new())]);

    let result = client(&server).update_page("README", "<p/>").unwrap();
    assert!(result.is_none());

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
}

#[test]
fn update_page_multiple_matches_is_noop() {
    let server = StubServer::start(vec![pages(vec![
        summary("1", "README", 1),
        summary("2", "README", 3),
    ])]);

    let result = client(&server).update_page("README", "<p/>").unwrap();
    assert!(result.is_none());

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests.iter().all(|r| r.method == "GET"));
}

#[test]
fn update_page_conflict_is_error() {
    let server = StubServer::start(vec![
        pages(vec![summary("1", "README", 1)]),
        StubResponse::json(
            409,
            json!({"errors": [{"status": 409, "code": "CONFLICT", "title": "Version must be incremented on update"}]}),
        ),
    ]);

    let err = client(&server).update_page("README", "<p/>").unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::Other);
    assert!(err.to_string().contains("409"));
}

#[test]
fn update_page_empty_title_sends_nothing() {
    let server = StubServer::start(vec![pages(vec![summary("777", "Unrelated Page", 1)])]);

    let result = client(&server).update_page("", "<p/>").unwrap();
    assert!(result.is_none());
    assert!(server.requests().is_empty());
}

#[test]
fn update_page_at_max_version_is_error() {
    let server = StubServer::start(vec![pages(vec![summary("1", "README", u32::MAX)])]);

    let err = client(&server).update_page("README", "<p/>").unwrap_err();
    assert!(matches!(err, ConfluenceError::VersionLimit { ref page_id } if page_id == "1"));

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
}

#[test]
fn delete_page_single_match() {
    let server = StubServer::start(vec![
        pages(vec![summary("65538", "README", 2)]),
        StubResponse::no_content(),
    ]);

    assert!(client(&server).delete_page("README").unwrap());

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].method, "DELETE");
    assert_eq!(requests[1].target, "/wiki/api/v2/pages/65538");
}

#[test]
fn delete_page_no_match_is_noop() {
    let server = StubServer::start(vec![pages(Vec::new())]);

    assert!(!client(&server).delete_page("README").unwrap());
    assert_eq!(server.requests().len(), 1);
}

#[test]
fn delete_page_multiple_matches_is_noop() {
    let server = StubServer::start(vec![pages(vec![
        summary("1", "README", 1),
        summary("2", "README", 1),
    ])]);

    assert!(!client(&server).delete_page("README").unwrap());

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests.iter().all(|r| r.method != "DELETE"));
}

#[test]
fn delete_page_empty_title_sends_nothing() {
    let server = StubServer::start(vec![
        pages(vec![summary("777", "Unrelated Page", 1)]),
        StubResponse::no_content(),
    ]);

    assert!(!client(&server).delete_page("").unwrap());
    assert!(server.requests().is_empty());
}

#[test]
fn delete_page_requires_204() {
    let server = StubServer::start(vec![
        pages(vec![summary("1", "README", 1)]),
        StubResponse::json(404, json!({"errors": [{"status": 404, "code": "NOT_FOUND", "title": "Not Found"}]})),
    ]);

    let err = client(&server).delete_page("README").unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::NotFound);
}

#[test]
fn publish_creates_then_updates_existing_title() {
    let server = StubServer::start(vec![
        StubResponse::json(
            400,
            json!({"errors": [{"status": 400, "code": "BAD_REQUEST", "title": "A page with this title already exists: A page already exists with the same TITLE in this space"}]}),
        ),
        pages(vec![summary("65538", "README", 1)]),
        updated_page("65538", "README", 2, "<h1 id=\"1\">1</h1>\n"),
    ]);

    let client = client(&server);
    let document = LocalDocument::from_markdown("README", "# 1", &MarkdownRenderer::new());
    let outcome = Publisher::new(&client).publish(&document).unwrap();

    assert!(matches!(&outcome, PublishOutcome::Updated(page) if page.summary.version.number == 2));
    assert_eq!(outcome.page_id(), Some("65538"));

    let methods: Vec<_> = server.requests().into_iter().map(|r| r.method).collect();
    assert_eq!(methods, vec!["POST", "GET", "PUT"]);
}
