use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use music_backend::hh::types::{AdditionalCase, Me, VacancySearchParams};
use music_backend::hh::{HhClient, HhConfig, HhError};

fn client(server: &MockServer) -> HhClient {
    HhClient::new(HhConfig::with_base_url(server.uri())).expect("client")
}

fn vacancy_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "url": format!("https://api.hh.ru/vacancies/{}", id),
        "alternate_url": format!("https://hh.ru/vacancy/{}", id),
        "area": { "id": "1", "name": "Moscow", "url": "https://api.hh.ru/areas/1" },
        "employer": { "id": "42", "name": "Acme" },
        "professional_roles": [{ "id": "96", "name": "Developer" }],
        "key_skills": [{ "name": "Rust" }]
    })
}

#[tokio::test]
async fn app_token_uses_client_credentials_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(header("HH-User-Agent", "NodeHH-API/1.0"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("grant_type=client_credentials"))
        .and(body_string_contains("client_id=id-1"))
        .and(body_string_contains("client_secret=secret-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "app-token",
            "token_type": "bearer"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let token = client(&server).get_app_token("id-1", "secret-1").await.unwrap();
    assert_eq!(token.access_token, "app-token");
    assert_eq!(token.expires_in, None);
}

#[tokio::test]
async fn user_token_and_refresh_grants() {
    let server = MockServer::start().await;
    let tokens = json!({
        "access_token": "user-token",
        "token_type": "bearer",
        "refresh_token": "refresh-1",
        "expires_in": 1209600
    });
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_string_contains("grant_type=authorization_code"))
        .and(body_string_contains("code=auth-code"))
        .and(body_string_contains("redirect_uri="))
        .respond_with(ResponseTemplate::new(200).set_body_json(tokens.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_string_contains("grant_type=refresh_token"))
        .and(body_string_contains("refresh_token=refresh-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tokens))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let token = client
        .get_user_token("id", "secret", "auth-code", None)
        .await
        .unwrap();
    assert_eq!(token.refresh_token, "refresh-1");

    let refreshed = client
        .refresh_user_token("id", "secret", "refresh-1")
        .await
        .unwrap();
    assert_eq!(refreshed.expires_in, 1209600);
}

#[tokio::test]
async fn vacancy_search_sends_bearer_and_repeated_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/vacancies"))
        .and(header("authorization", "Bearer user-token"))
        .and(query_param("text", "rust developer"))
        .and(query_param("per_page", "20"))
        .and(query_param("schedule", "remote"))
        .and(query_param("schedule", "flexible"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "found": 1,
            "page": 0,
            "pages": 1,
            "per_page": 20,
            "items": [vacancy_json("100", "Rust developer")],
            "alternate_url": "https://hh.ru/search/vacancy?text=rust"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = VacancySearchParams {
        text: Some("rust developer".to_string()),
        per_page: Some(20),
        schedule: vec!["remote".to_string(), "flexible".to_string()],
        ..Default::default()
    };
    let result = client(&server)
        .search_vacancies("user-token", &params)
        .await
        .unwrap();

    assert_eq!(result.page.found, 1);
    let vacancy = &result.page.items[0];
    assert_eq!(vacancy.short.name, "Rust developer");
    assert_eq!(vacancy.professional_roles[0].name, "Developer");
    assert!(vacancy.extra.contains_key("key_skills"));
}

#[tokio::test]
async fn dictionaries_with_locale_and_host() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/areas/countries"))
        .and(query_param("locale", "EN"))
        .and(query_param("host", "hh.kz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "40", "name": "Kazakhstan", "url": "https://api.hh.ru/areas/40" }
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/areas/1"))
        .and(query_param("additional_case", "prepositional"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1",
            "name": "Moscow",
            "name_prepositional": "Moscow",
            "parent_id": "113",
            "areas": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = HhConfig::with_base_url(server.uri());
    config.locale = Some("EN".to_string());
    config.host = Some("hh.kz".to_string());
    let client = HhClient::new(config).unwrap();

    let countries = client.get_countries().await.unwrap();
    assert_eq!(countries[0].name, "Kazakhstan");

    let region = client
        .get_region("1", Some(AdditionalCase::Prepositional))
        .await
        .unwrap();
    assert_eq!(region.parent_id.as_deref(), Some("113"));
}

#[tokio::test]
async fn skills_and_suggests_build_queries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/skills"))
        .and(query_param("id", "1"))
        .and(query_param("id", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "id": "1", "text": "Rust" }, { "id": "2", "text": "SQL" }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/suggests/skill_set"))
        .and(query_param("text", "ru"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "id": "1", "text": "Rust" }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/suggests/areas"))
        .and(query_param("text", "mos"))
        .and(query_param("include_parent", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "id": "1", "text": "Moscow", "url": "https://api.hh.ru/areas/1" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let skills = client.get_skills(&["1", "2"]).await.unwrap();
    assert_eq!(skills.items.len(), 2);

    let suggests = client.get_skills_suggests("ru").await.unwrap();
    assert_eq!(suggests.items[0].text, "Rust");

    let areas = client
        .get_areas_suggests("mos", None, Some(true))
        .await
        .unwrap();
    assert_eq!(areas.items[0].id, "1");
}

#[tokio::test]
async fn me_is_tagged_by_auth_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("authorization", "Bearer user-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "auth_type": "applicant",
            "id": "7",
            "is_applicant": true,
            "first_name": "Anna",
            "last_name": "Ivanova",
            "email": "anna@example.com"
        })))
        .mount(&server)
        .await;

    let me = client(&server).get_me("user-token").await.unwrap();
    assert_eq!(me.auth_type(), "applicant");
    match me {
        Me::Applicant(applicant) => assert_eq!(applicant.first_name, "Anna"),
        other => panic!("unexpected account: {other:?}"),
    }
}

#[tokio::test]
async fn error_payload_is_surfaced_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "request_id": "req-1",
            "description": "Forbidden",
            "errors": [{ "type": "oauth", "value": "token_expired" }],
            "oauth_error": "token-expired"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/employers/0"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;

    let client = client(&server);
    let err = client.get_me("stale").await.unwrap_err();
    assert_eq!(err.status(), Some(403));
    let payload = err.api_error().unwrap();
    assert_eq!(payload.request_id.as_deref(), Some("req-1"));
    assert!(payload.token_expired());

    let err = client.get_employer("0").await.unwrap_err();
    match err {
        HhError::Api { status, error } => {
            assert_eq!(status, 502);
            assert!(error.errors.is_empty());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
