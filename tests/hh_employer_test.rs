use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use music_backend::hh::types::{Id, Name, VacancyDraftBody};
use music_backend::hh::{HhClient, HhConfig};

const TOKEN: &str = "employer-token";

fn client(server: &MockServer) -> HhClient {
    HhClient::new(HhConfig::with_base_url(server.uri())).expect("client")
}

#[tokio::test]
async fn draft_lifecycle() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/vacancies/drafts"))
        .and(header("authorization", "Bearer employer-token"))
        .and(body_json(json!({
            "name": "Rust engineer",
            "areas": [{ "id": "1" }],
            "key_skills": [{ "name": "Rust" }]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "d-1",
            "name": "Rust engineer",
            "publication_ready": false,
            "ignored_fields": ["salary"]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/vacancies/drafts/d-1/publish"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "vacancy_ids": [501, 502] })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/vacancies/auto_publication"))
        .and(query_param("draft_id", "d-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/vacancies/drafts"))
        .and(query_param("page", "0"))
        .and(query_param("per_page", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "found": 1, "page": 0, "pages": 1, "per_page": 10,
            "items": [{ "name": "Rust engineer", "draft_id": "d-1", "publication_ready": true }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let body = VacancyDraftBody {
        name: Some("Rust engineer".to_string()),
        areas: Some(vec![Id::new("1")]),
        key_skills: Some(vec![Name {
            name: "Rust".to_string(),
        }]),
        ..Default::default()
    };

    let created = client.create_vacancy_draft(TOKEN, &body).await.unwrap();
    assert_eq!(created.id, "d-1");
    assert_eq!(created.ignored_fields, vec!["salary".to_string()]);

    let published = client.publish_vacancy_draft(TOKEN, "d-1").await.unwrap();
    assert_eq!(published.vacancy_ids, vec![501, 502]);

    client
        .delete_vacancy_auto_publication(TOKEN, "d-1")
        .await
        .unwrap();

    let drafts = client.get_vacancy_drafts(TOKEN, 0, 10).await.unwrap();
    assert_eq!(drafts.items[0].draft_id, "d-1");
    assert!(drafts.items[0].publication_ready);
}

#[tokio::test]
async fn employer_directories() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/employers/42/departments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "id": "42-dev", "name": "Development" }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/employers/42/managers/7/method_access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "id": "resume_search", "access": { "has_access": true } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let departments = client.get_employer_departments(TOKEN, "42").await.unwrap();
    assert_eq!(departments.items[0].name, "Development");

    let access = client
        .get_employer_method_access(TOKEN, "42", "7")
        .await
        .unwrap();
    assert!(access.items[0].access.has_access);
}

#[tokio::test]
async fn available_publications_skip_absent_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/employers/42/services/available_publications"))
        .and(query_param("area_id", "1"))
        .and(query_param_is_missing("professional_role_id"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "errors": [{ "type": "forbidden" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server)
        .get_employer_available_publications(TOKEN, "42", Some("1"), None)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert_eq!(err.api_error().unwrap().errors[0].kind, "forbidden");
}
