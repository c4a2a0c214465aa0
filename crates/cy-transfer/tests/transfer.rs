//! Export and import runs against a wiremock server.

use cy_auth::{AuthError, Credentials};
use cy_transfer::{Direction, Section, SectionOutcome, SectionToggles, TransferContext, TransferError};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "cfg-token";

/// Path component of an endpoint, without its query string.
fn route(endpoint: &str) -> String {
    let path = endpoint.split('?').next().unwrap_or(endpoint);
    format!("/api{path}")
}

fn context(server: &MockServer, folder: &std::path::Path) -> TransferContext {
    TransferContext::new(
        reqwest::Client::new(),
        &format!("{}/api", server.uri()),
        TOKEN,
        folder,
    )
}

async fn mount_exports(server: &MockServer) {
    for section in Section::ALL {
        Mock::given(method("GET"))
            .and(path(route(section.export_path())))
            .and(header("Authorization", format!("Bearer {TOKEN}").as_str()))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(format!("{{ \"items\" : [1, 2], \"section\" : \"{section}\" }}")),
            )
            .mount(server)
            .await;
    }
}

async fn mount_imports(server: &MockServer) {
    for section in Section::ALL {
        Mock::given(method("POST"))
            .and(path(route(section.import_path())))
            .and(header("Authorization", format!("Bearer {TOKEN}").as_str()))
            .and(header("Content-Type", "application/json; charset=utf-8"))
            .respond_with(ResponseTemplate::new(200))
            .mount(server)
            .await;
    }
}

async fn request_paths(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .expect("recording enabled")
        .iter()
        .map(|r| r.url.path().to_string())
        .collect()
}

#[tokio::test]
async fn export_writes_enabled_sections_in_order() {
    let server = MockServer::start().await;
    mount_exports(&server).await;
    let dir = tempfile::TempDir::new().expect("tmp dir");

    let report = context(&server, dir.path())
        .run_export(&SectionToggles::default())
        .await
        .expect("export succeeds");

    let expected: Vec<String> = Section::ALL
        .into_iter()
        .filter(|s| *s != Section::Statemachine)
        .map(|s| route(s.export_path()))
        .collect();
    assert_eq!(request_paths(&server).await, expected);

    assert_eq!(report.direction, Direction::Export);
    assert_eq!(report.transferred(), 5);
    assert_eq!(
        report.sections[4],
        SectionOutcome::Skipped {
            section: Section::Statemachine
        }
    );
    assert!(!dir.path().join("statemachine.json").exists());

    let written = std::fs::read_to_string(dir.path().join("stream_data.json")).expect("file written");
    assert_eq!(written, r#"{"items":[1,2],"section":"stream_data"}"#);
}

#[tokio::test]
async fn disabled_export_section_makes_no_call_and_no_file() {
    let server = MockServer::start().await;
    mount_exports(&server).await;
    let dir = tempfile::TempDir::new().expect("tmp dir");

    let toggles = SectionToggles::all().with(Section::DistributedReporting, false);
    context(&server, dir.path())
        .run_export(&toggles)
        .await
        .expect("export succeeds");

    let paths = request_paths(&server).await;
    assert_eq!(paths.len(), 5);
    assert!(!paths.contains(&route(Section::DistributedReporting.export_path())));
    assert!(paths.contains(&route(Section::StreamData.export_path())));
    assert!(!dir.path().join("distributed_reporting.json").exists());
    assert!(dir.path().join("stream_data.json").exists());
    assert!(dir.path().join("statemachine.json").exists());
}

#[tokio::test]
async fn export_creates_missing_folder() {
    let server = MockServer::start().await;
    mount_exports(&server).await;
    let dir = tempfile::TempDir::new().expect("tmp dir");
    let folder = dir.path().join("nested").join("configs");

    context(&server, &folder)
        .run_export(&SectionToggles::none().with(Section::Cobi, true))
        .await
        .expect("export succeeds");

    assert!(folder.join("cobi.json").is_file());
}

#[tokio::test]
async fn export_failure_aborts_remaining_sections() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route(Section::StreamData.export_path())))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .with_priority(1)
        .mount(&server)
        .await;
    mount_exports(&server).await;
    let dir = tempfile::TempDir::new().expect("tmp dir");

    let err = context(&server, dir.path())
        .run_export(&SectionToggles::default())
        .await
        .unwrap_err();

    let TransferError::Api {
        section,
        direction,
        status,
        ref body,
        ..
    } = err
    else {
        panic!("expected Api error, got {err:?}");
    };
    assert_eq!(section, Section::StreamData);
    assert_eq!(direction, Direction::Export);
    assert_eq!(status, 503);
    assert_eq!(body, "maintenance");
    assert!(err.to_string().contains("/platform-api/stream-data/export-all"));

    assert_eq!(request_paths(&server).await.len(), 2);
    assert!(dir.path().join("distributed_reporting.json").exists());
    assert!(!dir.path().join("stream_data.json").exists());
}

#[tokio::test]
async fn import_posts_raw_file_bytes_in_order() {
    let server = MockServer::start().await;
    mount_imports(&server).await;
    let dir = tempfile::TempDir::new().expect("tmp dir");
    let raw = "{ \"kept\": \"as written\" }\n";
    for section in Section::ALL {
        std::fs::write(dir.path().join(section.file_name()), raw).expect("write fixture");
    }

    let toggles = SectionToggles::all().with(Section::AliasCatalog, false);
    let report = context(&server, dir.path())
        .run_import(&toggles)
        .await
        .expect("import succeeds");

    assert_eq!(report.direction, Direction::Import);
    assert_eq!(report.transferred(), 5);
    let expected: Vec<String> = Section::ALL
        .into_iter()
        .filter(|s| *s != Section::AliasCatalog)
        .map(|s| route(s.import_path()))
        .collect();
    assert_eq!(request_paths(&server).await, expected);

    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests.iter().all(|r| r.body == raw.as_bytes()));
}

#[tokio::test]
async fn import_does_not_read_disabled_section_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(route(Section::StreamData.import_path())))
        .and(body_string("[]"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    let dir = tempfile::TempDir::new().expect("tmp dir");
    std::fs::write(dir.path().join("stream_data.json"), "[]").expect("write fixture");

    let report = context(&server, dir.path())
        .run_import(&SectionToggles::none().with(Section::StreamData, true))
        .await
        .expect("missing files of disabled sections are ignored");

    assert_eq!(report.transferred(), 1);
    assert_eq!(report.skipped(), 5);
}

#[tokio::test]
async fn import_missing_file_fails_before_request() {
    let server = MockServer::start().await;
    mount_imports(&server).await;
    let dir = tempfile::TempDir::new().expect("tmp dir");

    let err = context(&server, dir.path())
        .run_import(&SectionToggles::none().with(Section::Cobi, true))
        .await
        .unwrap_err();

    assert!(matches!(err, TransferError::Io { .. }));
    assert!(err.to_string().contains("cobi.json"));
    assert!(request_paths(&server).await.is_empty());
}

#[tokio::test]
async fn import_non_200_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(route(Section::CompositeIndexes.import_path())))
        .respond_with(ResponseTemplate::new(400).set_body_string("index clash"))
        .mount(&server)
        .await;
    let dir = tempfile::TempDir::new().expect("tmp dir");
    std::fs::write(dir.path().join("composite_indexes.json"), "[]").expect("write fixture");

    let err = context(&server, dir.path())
        .run_import(&SectionToggles::none().with(Section::CompositeIndexes, true))
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("400"));
    assert!(message.contains("index clash"));
    assert!(message.contains("composite_indexes"));
}

#[tokio::test]
async fn login_uses_token_field_for_every_section() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"token": TOKEN, "refreshToken": "r"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    mount_exports(&server).await;
    let dir = tempfile::TempDir::new().expect("tmp dir");

    let ctx = TransferContext::login(
        reqwest::Client::new(),
        &format!("{}/api", server.uri()),
        &Credentials::new("demo.user", "pw"),
        dir.path(),
    )
    .await
    .expect("login succeeds");
    let report = ctx.run_export(&SectionToggles::all()).await.expect("export succeeds");

    assert_eq!(report.transferred(), 6);
}

#[tokio::test]
async fn login_without_token_field_is_an_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"refreshToken": "r"})))
        .mount(&server)
        .await;

    let err = TransferContext::login(
        reqwest::Client::new(),
        &format!("{}/api", server.uri()),
        &Credentials::new("demo.user", "pw"),
        "/tmp/unused",
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        TransferError::Auth(AuthError::MissingToken { field: "token" })
    ));
}
