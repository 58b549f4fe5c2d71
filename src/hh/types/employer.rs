use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::shared::{Extra, Id, IdName, IdUrlName, Name, Pagination, ValidationError, VacancyFull};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoUrls {
    pub big: Option<String>,
    pub small: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalManager {
    pub id: String,
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub is_available: bool,
    pub photo_urls: Option<PhotoUrls>,
    pub unavailable: Option<JsonValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manager {
    pub id: String,
    #[serde(default)]
    pub has_admin_rights: bool,
    #[serde(default)]
    pub has_multiple_manager_accounts: bool,
    #[serde(default)]
    pub is_main_contact_person: bool,
    pub manager_settings_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeEmployer {
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
    pub employer: IdName,
    pub manager: Option<Manager>,
    pub personal_manager: Option<PersonalManager>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeEmployerIntegration {
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
    pub employer: IdName,
    pub personal_manager: Option<PersonalManager>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdNameItems {
    pub items: Vec<IdName>,
}

pub type EmployerTestsResponse = IdNameItems;
pub type EmployerDepartmentsResponse = IdNameItems;
pub type EmployerVacancyAreasResponse = Pagination<IdUrlName>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancyTemplate {
    pub id: String,
    pub name: String,
    pub version_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancyTemplatesResponse {
    pub items: Vec<VacancyTemplate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Auction {
    pub bid_cents: Option<i64>,
    pub budget_cents: Option<i64>,
    #[serde(default)]
    pub checked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoPublication {
    pub bill_uid: Option<String>,
    pub cart_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsufficientPublication {
    pub billing_type: IdName,
    pub count: i64,
    pub vacancy_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftMetaInfo {
    pub auto_publication: Option<AutoPublication>,
    pub completed_fields_percentage: Option<i64>,
    pub draft_id: String,
    #[serde(default)]
    pub insufficient_publications: Vec<InsufficientPublication>,
    #[serde(default)]
    pub insufficient_quotas: Vec<InsufficientPublication>,
    pub last_change_time: Option<String>,
    #[serde(default)]
    pub publication_ready: bool,
    #[serde(default)]
    pub required_publications: Vec<InsufficientPublication>,
    pub scheduled_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignedManager {
    pub id: String,
    pub full_name: String,
    pub auction: Option<Auction>,
}

/// Draft document: a full vacancy plus draft bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancyDraft {
    pub manager: Option<Id>,
    pub response_notifications: Option<bool>,
    pub assigned_manager: Option<AssignedManager>,
    pub branded_template: Option<IdName>,
    pub custom_employer_name: Option<String>,
    pub meta_info: Option<DraftMetaInfo>,
    pub with_zp: Option<bool>,
    #[serde(flatten)]
    pub vacancy: VacancyFull,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftSaveResponse {
    pub id: String,
    pub name: Option<String>,
    #[serde(default)]
    pub ignored_fields: Vec<String>,
    #[serde(default)]
    pub publication_ready: bool,
    pub validation_errors: Option<Vec<ValidationError>>,
}

pub type UpdateDraftResponse = DraftSaveResponse;
pub type CreateDraftResponse = DraftSaveResponse;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishDraftResponse {
    pub vacancy_ids: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftDuplicatesResponse {
    pub found: i64,
    pub has_duplicates: bool,
    #[serde(default)]
    pub items: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftListItem {
    pub name: String,
    pub url: Option<String>,
    pub draft_id: String,
    pub auto_publication: Option<AutoPublication>,
    pub completed_fields_percentage: Option<i64>,
    pub last_change_time: Option<String>,
    #[serde(default)]
    pub publication_ready: bool,
    pub scheduled_at: Option<String>,
    #[serde(default)]
    pub areas: Vec<IdName>,
    pub assigned_manager: Option<AssignedManager>,
    #[serde(default)]
    pub closed_for_applicants: bool,
}

pub type DraftsResponse = Pagination<DraftListItem>;

#[derive(Debug, Clone, Serialize)]
pub struct DraftLanguage {
    pub id: String,
    pub level: Id,
}

/// Body for creating or updating a vacancy draft. Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VacancyDraftBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub areas: Option<Vec<Id>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professional_roles: Option<Vec<Id>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_skills: Option<Vec<Name>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<DraftLanguage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<Vec<Id>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_form: Option<Vec<Id>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_format: Option<Vec<Id>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<Vec<Id>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_schedule_by_days: Option<Vec<Id>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branded_template: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_manager_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_employer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vacancy_properties: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auction: Option<Auction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_for_applicants: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_handicapped: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_incomplete_resumes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_temporary: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internship: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub night_shifts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_letter_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_notifications: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_zp: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Balance {
    pub actual: i64,
    pub initial: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayableApiAction {
    pub id: String,
    pub activated_at: String,
    pub balance: Balance,
    pub expires_at: String,
    pub service_type: IdName,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayableApiActionsResponse {
    pub items: Vec<PayableApiAction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodAccess {
    pub id: String,
    pub access: MethodAccessFlag,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodAccessFlag {
    pub has_access: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodAccessResponse {
    pub items: Vec<MethodAccess>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRegion {
    pub id: String,
    pub areas_url: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuitablePackage {
    pub count: i64,
    #[serde(default)]
    pub invalid: bool,
    #[serde(default)]
    pub price_regions: Vec<PriceRegion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicationAppearance {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicationVariant {
    pub appearance: PublicationAppearance,
    pub available_publications_count: i64,
    #[serde(default)]
    pub suitable_packages: Vec<SuitablePackage>,
    pub vacancy_properties: Option<JsonValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailablePublicationsResponse {
    pub publication_variants: Vec<PublicationVariant>,
}
