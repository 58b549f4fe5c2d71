use serde_json::json;
use wiremock::matchers::{
    body_json, body_string_contains, header, method, path, query_param, query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

use music_backend::hh::types::{
    AddToVisibilityListBody, ApplyVacancyBody, ArtifactType, CreateArtifactBody, Id,
    UpdateMeBody, VisibilityListType,
};
use music_backend::hh::{HhClient, HhConfig};

const TOKEN: &str = "applicant-token";

fn client(server: &MockServer) -> HhClient {
    HhClient::new(HhConfig::with_base_url(server.uri())).expect("client")
}

#[tokio::test]
async fn apply_vacancy_posts_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/negotiations"))
        .and(header("authorization", "Bearer applicant-token"))
        .and(body_string_contains("name=\"resume_id\""))
        .and(body_string_contains("r-1"))
        .and(body_string_contains("name=\"vacancy_id\""))
        .and(body_string_contains("Hello there"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .apply_vacancy(
            TOKEN,
            &ApplyVacancyBody {
                resume_id: "r-1".to_string(),
                vacancy_id: "v-1".to_string(),
                message: Some("Hello there".to_string()),
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn resume_views_logo_flag_only_when_requested() {
    let server = MockServer::start().await;
    let page = json!({ "found": 0, "page": 0, "pages": 0, "per_page": 20, "items": [] });
    Mock::given(method("GET"))
        .and(path("/resumes/r-1/views"))
        .and(query_param("with_employer_logo", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/resumes/r-2/views"))
        .and(query_param_is_missing("with_employer_logo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    client.get_resume_views(TOKEN, "r-1", true).await.unwrap();
    client.get_resume_views(TOKEN, "r-2", false).await.unwrap();
}

#[tokio::test]
async fn visibility_lists_use_list_type_in_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/resumes/r-1/blacklist"))
        .and(body_json(json!({ "items": [{ "id": "10" }, { "id": "11" }] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "found": 2, "page": 0, "pages": 1, "per_page": 20, "items": []
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/resumes/r-1/whitelist/employer"))
        .and(query_param("id", "10"))
        .and(query_param("id", "11"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    client
        .add_to_visibility_list(
            TOKEN,
            "r-1",
            VisibilityListType::Blacklist,
            &AddToVisibilityListBody {
                items: vec![Id::new("10"), Id::new("11")],
            },
        )
        .await
        .unwrap();
    client
        .remove_from_visibility_list(TOKEN, "r-1", VisibilityListType::Whitelist, &["10", "11"])
        .await
        .unwrap();
}

#[tokio::test]
async fn update_me_sends_form_and_accepts_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/me"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("is_in_search=false"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .update_me(TOKEN, &UpdateMeBody::InSearch { is_in_search: false })
        .await
        .unwrap();
}

#[tokio::test]
async fn portfolio_upload_carries_file_part() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/artifacts"))
        .and(body_string_contains("name=\"type\""))
        .and(body_string_contains("portfolio"))
        .and(body_string_contains("filename=\"work.png\""))
        .and(body_string_contains("My best work"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "art-1",
            "state": { "id": "ok", "name": "Ok" },
            "description": "My best work"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let artifact = client(&server)
        .create_portfolio(
            TOKEN,
            CreateArtifactBody {
                kind: ArtifactType::Portfolio,
                description: Some("My best work".to_string()),
                file_name: "work.png".to_string(),
                file: b"png-bytes".to_vec(),
            },
        )
        .await
        .unwrap();
    assert_eq!(artifact.id, "art-1");
    assert_eq!(artifact.state.id, "ok");
}

#[tokio::test]
async fn saved_searches_and_negotiations() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/saved_searches/vacancies"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "found": 1, "page": 1, "pages": 2, "per_page": 5,
            "items": [{
                "id": "s-1",
                "name": "Rust jobs",
                "created_at": "2024-01-01T10:00:00+0300",
                "subscription": true,
                "items": { "count": 12, "url": "https://api.hh.ru/vacancies?text=rust" },
                "new_items": { "count": 2, "url": "https://api.hh.ru/vacancies?text=rust&new=1" }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/negotiations/active/n-1"))
        .and(query_param("with_decline_message", "true"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/negotiations/n-2/messages"))
        .and(body_string_contains("message=Thanks"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "m-1",
            "author": { "participant_type": "applicant" },
            "created_at": "2024-01-02T10:00:00+0300",
            "state": { "id": "text", "name": "Text" },
            "text": "Thanks"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let searches = client.get_saved_searches(TOKEN, 1, 5).await.unwrap();
    assert_eq!(searches.items[0].new_items.count, 2);
    assert!(searches.items[0].subscription);

    client.delete_negotiation(TOKEN, "n-1", true).await.unwrap();

    let message = client
        .send_negotiation_message(TOKEN, "n-2", "Thanks")
        .await
        .unwrap();
    assert_eq!(message.author.participant_type, "applicant");
    assert_eq!(message.text.as_deref(), Some("Thanks"));
}

#[tokio::test]
async fn not_found_payload_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/vacancies/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{ "type": "not_found" }],
            "request_id": "r-404"
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .get_vacancy(TOKEN, "missing")
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert!(err.api_error().unwrap().not_found());
    assert_eq!(err.to_string(), "HH API Error 404");
}
