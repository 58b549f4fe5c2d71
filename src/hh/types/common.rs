use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

use super::applicant::MeApplicant;
use super::employer::{MeEmployer, MeEmployerIntegration};
use super::shared::{
    Argument, Cluster, Employer, Extra, Fixes, IdName, IdText, IdTextUrl, IdUrlName,
    MetroLineWithStations, Pagination, SearchSuggests, Vacancy,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppTokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserTokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub refresh_token: String,
    pub expires_in: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancySearchResponse {
    #[serde(flatten)]
    pub page: Pagination<Vacancy>,
    pub alternate_url: Option<String>,
    pub clusters: Option<Vec<Cluster>>,
    pub arguments: Option<Vec<Argument>>,
    pub fixes: Option<Fixes>,
    pub suggests: Option<SearchSuggests>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub current: bool,
}

/// `/dictionaries`: every key maps to a list of `{id, name}`-like entries.
pub type Dictionaries = HashMap<String, Vec<JsonValue>>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageResponse {
    pub id: String,
    pub name: String,
    pub uid: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationalInstitution {
    pub id: String,
    pub acronym: Option<String>,
    pub area: Option<IdName>,
    pub synonyms: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationalInstitutionsResponse {
    pub items: Vec<EducationalInstitution>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemsResponse<T> {
    pub items: Vec<T>,
}

pub type SkillsResponse = ItemsResponse<IdText>;
pub type AreaLeavesSuggestsResponse = ItemsResponse<IdTextUrl>;
pub type AreaSuggestsResponse = ItemsResponse<IdTextUrl>;
pub type SkillsSuggestsResponse = ItemsResponse<IdText>;
pub type FieldsOfStudySuggestsResponse = ItemsResponse<IdText>;
pub type KeywordSuggestsResponse = ItemsResponse<super::shared::Text>;
pub type PositionsSuggestsResponse = ItemsResponse<PositionSuggest>;
pub type VacancyPositionsSuggestsResponse = ItemsResponse<PositionSuggest>;
pub type ProfessionalRolesSuggestsResponse = ItemsResponse<PositionSuggest>;
pub type CompaniesSuggestsResponse = ItemsResponse<CompanySuggest>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfessionalRole {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub accept_incomplete_resumes: bool,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub search_deprecated: bool,
    #[serde(default)]
    pub select_deprecated: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfessionalRoleCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub roles: Vec<ProfessionalRole>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfessionalRolesResponse {
    pub categories: Vec<ProfessionalRoleCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub industries: Vec<IdName>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistrictResponse {
    pub id: String,
    pub name: String,
    pub area_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetroResponse {
    pub id: String,
    pub name: String,
    pub url: Option<String>,
    #[serde(default)]
    pub lines: Vec<MetroLineWithStations>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaResponse {
    pub id: String,
    pub name: String,
    pub name_prepositional: Option<String>,
    pub parent_id: Option<String>,
    pub utc_offset: Option<String>,
    #[serde(default)]
    pub areas: Vec<AreaResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestRole {
    pub id: String,
    #[serde(alias = "text")]
    pub name: String,
    #[serde(default)]
    pub accept_incomplete_resumes: bool,
}

/// Position, vacancy position and professional role suggests share this shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionSuggest {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub professional_roles: Vec<SuggestRole>,
    #[serde(default)]
    pub specializations: Vec<JsonValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanySuggest {
    pub id: String,
    pub text: String,
    pub url: String,
    pub area: Option<IdName>,
    #[serde(default)]
    pub industries: Vec<IdName>,
    pub logo_urls: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsiderInterview {
    pub id: String,
    pub url: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployerResponse {
    #[serde(flatten)]
    pub employer: Employer,
    pub area: Option<IdUrlName>,
    pub description: Option<String>,
    #[serde(default)]
    pub industries: Vec<IdName>,
    #[serde(default)]
    pub insider_interviews: Vec<InsiderInterview>,
    pub site_url: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub branding: Option<JsonValue>,
}

pub type EmployersResponse = Pagination<Employer>;

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetEmployersOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_with_vacancies: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<EmployerSort>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployerSort {
    ByName,
    ByVacanciesOpen,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryEmployeeLevel {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryArea {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub areas: Vec<SalaryArea>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalarySpecialization {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryProfessionalArea {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub specializations: Vec<SalarySpecialization>,
}

pub type SalaryIndustry = IndustryResponse;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeApplication {
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_applicant: bool,
    #[serde(default)]
    pub is_application: bool,
    #[serde(default)]
    pub is_employer: bool,
    #[serde(default)]
    pub is_employer_integration: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

/// `GET /me`; the variant is picked by `auth_type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "auth_type", rename_all = "snake_case")]
pub enum Me {
    Applicant(MeApplicant),
    Application(MeApplication),
    Employer(MeEmployer),
    EmployerIntegration(MeEmployerIntegration),
}

impl Me {
    pub fn auth_type(&self) -> &'static str {
        match self {
            Me::Applicant(_) => "applicant",
            Me::Application(_) => "application",
            Me::Employer(_) => "employer",
            Me::EmployerIntegration(_) => "employer_integration",
        }
    }
}

/// Additional grammatical case for area names.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdditionalCase {
    Prepositional,
}
