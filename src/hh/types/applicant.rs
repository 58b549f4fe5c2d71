use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

use super::shared::{
    Address, CountUrl, Employer, Extra, Id, IdName, IdUrlName, Pagination, VacancyShort,
};

#[derive(Debug, Clone, Serialize)]
pub struct PhoneConfirmationBody {
    pub phone: String,
    pub confirmation_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneInfo {
    pub city: String,
    pub country: String,
    pub formatted: String,
    #[serde(default)]
    pub need_verification: bool,
    pub number: String,
    #[serde(default)]
    pub restricted_country: bool,
    #[serde(default)]
    pub verified: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneInfoResponse {
    pub phone: PhoneInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneSendCodeResponse {
    pub can_request_code_again_in: i64,
    pub code_length: i64,
    pub notification_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeCreationAvailability {
    pub created: i64,
    pub is_creation_available: bool,
    pub max: i64,
    pub remaining: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumePhoto {
    pub id: Option<String>,
    pub small: Option<String>,
    pub medium: Option<String>,
    #[serde(rename = "40")]
    pub size_40: Option<String>,
    #[serde(rename = "100")]
    pub size_100: Option<String>,
    #[serde(rename = "500")]
    pub size_500: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeSalary {
    pub amount: Option<f64>,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalExperience {
    pub months: i64,
}

/// Resume as returned inside lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeItem {
    pub id: String,
    pub title: Option<String>,
    pub url: Option<String>,
    pub alternate_url: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(default)]
    pub finished: bool,
    #[serde(default)]
    pub requires_completion: bool,
    #[serde(default)]
    pub marked: bool,
    pub age: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub gender: Option<IdName>,
    pub photo: Option<ResumePhoto>,
    pub platform: Option<JsonValue>,
    pub salary: Option<ResumeSalary>,
    pub total_experience: Option<TotalExperience>,
    pub area: Option<IdUrlName>,
    pub access: Option<JsonValue>,
    pub status: Option<IdName>,
    #[serde(default)]
    pub hidden_fields: Vec<IdName>,
    pub auto_hide_time: Option<IdUrlName>,
    pub can_view_full_info: Option<bool>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Owner's view of a resume (`/resumes/mine`, suitable resumes, profile).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeItemMiddle {
    #[serde(flatten)]
    pub item: ResumeItem,
    pub new_views: Option<i64>,
    pub total_views: Option<i64>,
    pub next_publish_at: Option<String>,
    pub real_id: Option<String>,
    #[serde(default)]
    pub blocked: bool,
    pub can_publish_or_update: Option<bool>,
    pub views_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<Id>,
}

/// Complete resume document (`GET /resumes/{id}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeItemFull {
    #[serde(flatten)]
    pub resume: ResumeItemMiddle,
    pub has_vehicle: Option<bool>,
    pub favorited: Option<bool>,
    #[serde(default)]
    pub skill_set: Vec<String>,
    pub skills: Option<String>,
    #[serde(default)]
    pub citizenship: Vec<IdUrlName>,
    pub resume_locale: Option<IdName>,
    pub job_search_status: Option<IdName>,
    pub view_without_contacts_reason: Option<String>,
    pub contacts_open_until_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeItemShort {
    pub id: String,
    pub url: String,
    pub title: Option<String>,
    pub alternate_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeShort {
    pub id: String,
    pub photo: Option<ResumePhoto>,
    pub status: IdName,
    pub title: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeCounters {
    #[serde(default)]
    pub already_applied: i64,
    #[serde(default)]
    pub not_published: i64,
    #[serde(default)]
    pub suitable: i64,
    #[serde(default)]
    pub unavailable: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumesByStatusResponse {
    #[serde(default)]
    pub already_applied: Vec<ResumeItem>,
    #[serde(default)]
    pub not_published: Vec<ResumeItem>,
    #[serde(default)]
    pub suitable: Vec<ResumeItem>,
    #[serde(default)]
    pub unavailable: Vec<ResumeItem>,
    #[serde(default)]
    pub counters: ResumeCounters,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationNote {
    pub id: String,
    pub name: String,
    pub field: Option<String>,
    pub pointer: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeProgress {
    pub percentage: Option<i64>,
    #[serde(default)]
    pub mandatory: Vec<IdName>,
    #[serde(default)]
    pub recommended: Vec<IdName>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeStatusResponse {
    #[serde(default)]
    pub blocked: bool,
    pub can_publish_or_update: Option<bool>,
    #[serde(default)]
    pub finished: bool,
    pub status: IdName,
    #[serde(default)]
    pub moderation_note: Vec<ModerationNote>,
    pub progress: Option<ResumeProgress>,
    pub publish_url: Option<String>,
}

pub type MyResumesResponse = Pagination<ResumeItemMiddle>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeOverall {
    #[serde(default)]
    pub already_applied: i64,
    #[serde(default)]
    pub not_published: i64,
    #[serde(default)]
    pub unavailable: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuitableResumesResponse {
    #[serde(flatten)]
    pub page: Pagination<ResumeItemMiddle>,
    #[serde(default)]
    pub overall: ResumeOverall,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeViewItem {
    pub created_at: String,
    pub employer: Employer,
    #[serde(default)]
    pub viewed: bool,
    pub resume: Option<ResumeItemShort>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeViewsResponse {
    #[serde(flatten)]
    pub page: Pagination<ResumeViewItem>,
    pub resume: Option<ResumeItemShort>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetResumeQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_negotiations_history: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_creds: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_job_search_status: Option<bool>,
}

/// Validation rule for one resume field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldCondition {
    pub required: Option<bool>,
    pub min_length: Option<i64>,
    pub max_length: Option<i64>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub min_date: Option<String>,
    pub max_date: Option<String>,
    pub regexp: Option<String>,
    pub min_count: Option<i64>,
    pub max_count: Option<i64>,
    pub fields: Option<HashMap<String, Option<FieldCondition>>>,
}

/// Field name to condition, e.g. `first_name`, `education`, `salary`.
pub type ResumeConditions = HashMap<String, Option<FieldCondition>>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeAccessType {
    pub id: String,
    pub name: String,
    pub active: Option<bool>,
    pub limit: Option<i64>,
    pub list_url: Option<String>,
    pub total: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeAccessTypesResponse {
    #[serde(default)]
    pub auto_hide_time_options: Vec<IdUrlName>,
    pub items: Vec<ResumeAccessType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityListType {
    Whitelist,
    Blacklist,
}

impl VisibilityListType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisibilityListType::Whitelist => "whitelist",
            VisibilityListType::Blacklist => "blacklist",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct VisibilitySearchParams {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisibilityEmployer {
    #[serde(flatten)]
    pub employer: Employer,
    #[serde(default)]
    pub selected: bool,
}

pub type VisibilitySearchResponse = Pagination<VisibilityEmployer>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisibilityListResponse {
    #[serde(flatten)]
    pub page: Pagination<Employer>,
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddToVisibilityListBody {
    pub items: Vec<Id>,
}

/// Body of `POST /negotiations`, sent as multipart.
#[derive(Debug, Clone, Serialize)]
pub struct ApplyVacancyBody {
    pub resume_id: String,
    pub vacancy_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancyListResponse {
    #[serde(flatten)]
    pub page: Pagination<VacancyShort>,
    #[serde(default)]
    pub limit_reached: bool,
}

pub type BlacklistVacanciesResponse = VacancyListResponse;
pub type FavoritedVacanciesResponse = VacancyListResponse;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlacklistEmployersResponse {
    #[serde(flatten)]
    pub page: Pagination<Employer>,
    #[serde(default)]
    pub limit_reached: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedSearch {
    pub id: String,
    pub name: String,
    pub created_at: String,
    #[serde(default)]
    pub subscription: bool,
    pub items: CountUrl,
    pub new_items: CountUrl,
}

pub type SavedSearchesResponse = Pagination<SavedSearch>;

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateSavedSearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeCounters {
    pub new_resume_views: i64,
    pub resumes_count: i64,
    pub unread_negotiations: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeApplicant {
    pub id: String,
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
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub phone: Option<String>,
    pub counters: Option<MeCounters>,
    #[serde(default)]
    pub is_in_search: bool,
    pub negotiations_url: Option<String>,
    pub resumes_url: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Form body of `POST /me`: either the full name or the job search flag.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum UpdateMeBody {
    FullName {
        first_name: String,
        last_name: String,
        middle_name: String,
    },
    InSearch {
        is_in_search: bool,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactConditions {
    pub counters: ArtifactCounters,
    pub fields: Option<HashMap<String, FieldCondition>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactCounters {
    pub max: i64,
    pub uploaded: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactType {
    Photo,
    Portfolio,
}

impl ArtifactType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactType::Photo => "photo",
            ArtifactType::Portfolio => "portfolio",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactState {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    pub id: String,
    pub medium: Option<String>,
    pub small: Option<String>,
    pub state: ArtifactState,
    pub description: Option<String>,
}

pub type PortfolioResponse = Pagination<Artifact>;
pub type PhotoResponse = Pagination<Artifact>;

/// Uploaded file plus metadata for `POST /artifacts`.
#[derive(Debug, Clone)]
pub struct CreateArtifactBody {
    pub kind: ArtifactType,
    pub description: Option<String>,
    pub file_name: String,
    pub file: Vec<u8>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeProfileResponse {
    pub additional_properties: Option<JsonValue>,
    pub conditions: Option<ResumeConditions>,
    pub creds: Option<JsonValue>,
    pub next_incomplete_screen_id: Option<String>,
    pub profile: Option<JsonValue>,
    pub profile_conditions: Option<ResumeConditions>,
    pub resume: Option<ResumeItemMiddle>,
    pub resumes: Option<JsonValue>,
    pub screens: Option<JsonValue>,
    #[serde(default)]
    pub skills_with_levels: Vec<JsonValue>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateResumeProfileBody {
    pub current_screen_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creds: Option<ResumeCreds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume: Option<JsonValue>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ResumeCreds {
    pub question_to_answer_map: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeProfileEntryPoint {
    Default,
    VacancyResponse,
    OnboardingShort,
    OnboardingAreaCreds,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateResumeProfileBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_point: Option<ResumeProfileEntryPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vacancy_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clone_resume_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_profile: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleSuggestions {
    pub items: JsonValue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeProfileDictResponse {
    pub resume_any_job_titles: Option<TitleSuggestions>,
    pub resume_default_titles: Option<TitleSuggestions>,
    pub resume_popular_titles: Option<TitleSuggestions>,
    pub resume_profile_communication_methods: Option<TitleSuggestions>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetNegotiationsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vacancy_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_updates: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_job_search_status: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_generated_collections: Option<bool>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NegotiationCounters {
    pub messages: i64,
    pub unread_messages: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Negotiation {
    pub id: String,
    pub url: Option<String>,
    #[serde(default)]
    pub applicant_question_state: bool,
    pub counters: Option<NegotiationCounters>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub has_updates: bool,
    pub messaging_status: Option<String>,
    #[serde(default)]
    pub professional_roles: Vec<Id>,
    pub source: Option<JsonValue>,
    pub state: IdName,
    #[serde(default)]
    pub viewed_by_opponent: bool,
    #[serde(default)]
    pub decline_allowed: bool,
    #[serde(default)]
    pub hidden: bool,
    pub resume: Option<ResumeItemShort>,
    pub vacancy: Option<VacancyShort>,
    #[serde(flatten)]
    pub extra: Extra,
}

pub type NegotiationsResponse = Pagination<Negotiation>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageAuthor {
    pub participant_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NegotiationMessage {
    pub id: String,
    pub author: MessageAuthor,
    pub created_at: String,
    #[serde(default)]
    pub editable: bool,
    #[serde(default)]
    pub read: bool,
    pub state: IdName,
    pub text: Option<String>,
    #[serde(default)]
    pub viewed_by_me: bool,
    #[serde(default)]
    pub viewed_by_opponent: bool,
    pub address: Option<Address>,
    pub assessments: Option<Vec<JsonValue>>,
}

pub type NegotiationMessagesResponse = Pagination<NegotiationMessage>;
