use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// Keys the API sends that the typed fields do not cover.
pub type Extra = HashMap<String, JsonValue>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Id {
    pub id: String,
}

impl Id {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Name {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdName {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdText {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdTextUrl {
    pub id: String,
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdUrlName {
    pub id: String,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdUrl {
    pub id: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountUrl {
    pub count: i64,
    pub url: String,
}

/// Paged list envelope used by every list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination<T> {
    pub found: i64,
    pub page: u32,
    pub pages: u32,
    pub per_page: u32,
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PaginationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetroLine {
    pub id: String,
    pub name: String,
    pub hex_color: String,
    pub area: Option<IdUrlName>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetroLineStationLine {
    pub id: String,
    pub name: String,
    pub hex_color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetroLineStation {
    pub id: String,
    pub name: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub order: i32,
    pub line: Option<MetroLineStationLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetroLineWithStations {
    pub id: String,
    pub name: String,
    pub hex_color: String,
    #[serde(default)]
    pub stations: Vec<MetroLineStation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetroStation {
    pub line_id: String,
    pub line_name: String,
    pub station_id: String,
    pub station_name: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub area: Option<IdUrlName>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterItem {
    pub count: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub url: String,
    pub metro_line: Option<MetroLine>,
    pub metro_station: Option<MetroStation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cluster {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub items: Vec<ClusterItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Argument {
    pub argument: String,
    pub cluster_group: Option<IdName>,
    pub disable_url: String,
    pub hex_color: Option<String>,
    pub metro_type: Option<String>,
    pub name: Option<String>,
    pub value: String,
    pub value_description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixes {
    pub fixed: String,
    pub original: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSuggests {
    pub found: i64,
    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
    pub id: Option<String>,
    pub building: Option<String>,
    pub city: Option<String>,
    pub street: Option<String>,
    pub raw: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub metro: Option<MetroStation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRange {
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub currency: String,
    pub gross: Option<bool>,
    pub frequency: Option<IdName>,
    pub mode: Option<IdName>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoUrls {
    #[serde(rename = "90")]
    pub small: Option<String>,
    #[serde(rename = "240")]
    pub medium: Option<String>,
    pub original: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployerRating {
    pub reviews_count: i64,
    pub total_rating: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employer {
    pub id: Option<String>,
    pub name: String,
    pub url: Option<String>,
    pub alternate_url: Option<String>,
    #[serde(default)]
    pub trusted: bool,
    pub logo_urls: Option<LogoUrls>,
    pub vacancies_url: Option<String>,
    pub accredited_it_employer: Option<bool>,
    pub employer_rating: Option<EmployerRating>,
    pub open_vacancies: Option<i64>,
    pub blacklisted: Option<bool>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneContact {
    pub city: String,
    pub comment: Option<String>,
    pub country: String,
    pub formatted: Option<String>,
    pub number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactsVacancy {
    pub call_tracking_enabled: Option<bool>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub phones: Option<Vec<PhoneContact>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancyCounters {
    pub responses: i64,
    pub total_responses: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancyShort {
    pub id: String,
    pub name: String,
    pub url: String,
    pub alternate_url: String,
    pub apply_alternate_url: Option<String>,
    #[serde(default)]
    pub archived: bool,
    pub area: IdUrlName,
    pub created_at: Option<String>,
    pub published_at: Option<String>,
    pub department: Option<IdName>,
    pub employer: Option<Employer>,
    #[serde(default)]
    pub has_test: bool,
    pub premium: Option<bool>,
    pub relations: Option<Vec<String>>,
    #[serde(default)]
    pub response_letter_required: bool,
    pub response_url: Option<String>,
    pub salary_range: Option<SalaryRange>,
    pub address: Option<Address>,
    #[serde(rename = "type")]
    pub kind: Option<IdName>,
}

/// Vacancy as returned by search and list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vacancy {
    #[serde(flatten)]
    pub short: VacancyShort,
    pub description: Option<String>,
    pub accept_temporary: Option<bool>,
    pub accept_incomplete_resumes: Option<bool>,
    #[serde(default)]
    pub professional_roles: Vec<IdName>,
    pub experience: Option<IdName>,
    pub employment_form: Option<IdName>,
    pub schedule: Option<IdName>,
    pub work_format: Option<Vec<IdName>>,
    pub working_hours: Option<Vec<IdName>>,
    pub work_schedule_by_days: Option<Vec<IdName>>,
    pub contacts: Option<ContactsVacancy>,
    pub counters: Option<VacancyCounters>,
    pub snippet: Option<JsonValue>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancyLanguage {
    pub id: String,
    pub name: String,
    pub level: IdName,
}

/// Full vacancy document (`GET /vacancies/{id}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancyFull {
    #[serde(flatten)]
    pub vacancy: Vacancy,
}

impl VacancyFull {
    pub fn key_skills(&self) -> Vec<String> {
        self.vacancy
            .extra
            .get("key_skills")
            .and_then(|v| v.as_array())
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.get("name").and_then(|n| n.as_str()))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Query for `/vacancies` and the related/similar endpoints.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VacancySearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub search_field: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub experience: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub employment: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub schedule: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub area: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metro: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professional_role: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub industry: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub employer_id: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub excluded_employer_id: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub label: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_with_salary: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_lng: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_lng: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_point_lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_point_lng: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clusters: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub describe_arguments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_magic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responses_count_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_temporary: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub part_time: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_form: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_schedule_by_days: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    pub reason: String,
    pub value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn vacancy_keeps_unknown_fields() {
        let raw = json!({
            "id": "1",
            "name": "Rust developer",
            "url": "https://api.hh.ru/vacancies/1",
            "alternate_url": "https://hh.ru/vacancy/1",
            "area": { "id": "1", "name": "Moscow", "url": "https://api.hh.ru/areas/1" },
            "professional_roles": [{ "id": "96", "name": "Developer" }],
            "key_skills": [{ "name": "Rust" }, { "name": "Tokio" }],
            "approved": true
        });

        let vacancy: VacancyFull = serde_json::from_value(raw).unwrap();
        assert_eq!(vacancy.vacancy.short.name, "Rust developer");
        assert_eq!(vacancy.vacancy.professional_roles.len(), 1);
        assert_eq!(vacancy.key_skills(), vec!["Rust", "Tokio"]);
        assert_eq!(vacancy.vacancy.extra.get("approved"), Some(&json!(true)));
    }
}
