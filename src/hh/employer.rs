//! Endpoints that require an employer token.

use super::client::HhClient;
use super::error::HhResult;
use super::types::*;

impl HhClient {
    pub async fn get_employer_tests(
        &self,
        token: &str,
        employer_id: &str,
    ) -> HhResult<EmployerTestsResponse> {
        self.get(format!("/employers/{}/tests", employer_id))
            .token(token)
            .send()
            .await
    }

    pub async fn get_employer_vacancy_areas(
        &self,
        token: &str,
        employer_id: &str,
    ) -> HhResult<EmployerVacancyAreasResponse> {
        self.get(format!("/employers/{}/vacancy_areas/active", employer_id))
            .token(token)
            .send()
            .await
    }

    pub async fn get_employer_departments(
        &self,
        token: &str,
        employer_id: &str,
    ) -> HhResult<EmployerDepartmentsResponse> {
        self.get(format!("/employers/{}/departments", employer_id))
            .token(token)
            .send()
            .await
    }

    pub async fn get_employer_vacancy_templates(
        &self,
        token: &str,
        employer_id: &str,
    ) -> HhResult<VacancyTemplatesResponse> {
        self.get(format!("/employers/{}/vacancy_branded_templates", employer_id))
            .token(token)
            .send()
            .await
    }

    pub async fn get_vacancy_draft(&self, token: &str, draft_id: &str) -> HhResult<VacancyDraft> {
        self.get(format!("/vacancies/drafts/{}", draft_id))
            .token(token)
            .send()
            .await
    }

    pub async fn update_vacancy_draft(
        &self,
        token: &str,
        draft_id: &str,
        body: &VacancyDraftBody,
    ) -> HhResult<UpdateDraftResponse> {
        self.put(format!("/vacancies/drafts/{}", draft_id))
            .token(token)
            .json(body)?
            .send()
            .await
    }

    pub async fn delete_vacancy_draft(&self, token: &str, draft_id: &str) -> HhResult<()> {
        self.delete(format!("/vacancies/drafts/{}", draft_id))
            .token(token)
            .send_empty()
            .await
    }

    pub async fn publish_vacancy_draft(
        &self,
        token: &str,
        draft_id: &str,
    ) -> HhResult<PublishDraftResponse> {
        self.post(format!("/vacancies/drafts/{}/publish", draft_id))
            .token(token)
            .send()
            .await
    }

    pub async fn get_vacancy_draft_duplicates(
        &self,
        token: &str,
        draft_id: &str,
    ) -> HhResult<DraftDuplicatesResponse> {
        self.get(format!("/vacancies/drafts/{}/duplicates", draft_id))
            .token(token)
            .send()
            .await
    }

    pub async fn create_vacancy_draft(
        &self,
        token: &str,
        body: &VacancyDraftBody,
    ) -> HhResult<CreateDraftResponse> {
        self.post("/vacancies/drafts")
            .token(token)
            .json(body)?
            .send()
            .await
    }

    pub async fn get_vacancy_drafts(
        &self,
        token: &str,
        page: u32,
        per_page: u32,
    ) -> HhResult<DraftsResponse> {
        self.get("/vacancies/drafts")
            .token(token)
            .params(&PaginationRequest {
                page: Some(page),
                per_page: Some(per_page),
            })?
            .send()
            .await
    }

    pub async fn delete_vacancy_auto_publication(
        &self,
        token: &str,
        draft_id: &str,
    ) -> HhResult<()> {
        self.delete("/vacancies/auto_publication")
            .token(token)
            .query(vec![("draft_id".to_string(), draft_id.to_string())])
            .send_empty()
            .await
    }

    pub async fn get_employer_payable_api_actions(
        &self,
        token: &str,
        employer_id: &str,
    ) -> HhResult<PayableApiActionsResponse> {
        self.get(format!(
            "/employers/{}/services/payable_api_actions/active",
            employer_id
        ))
        .token(token)
        .send()
        .await
    }

    pub async fn get_employer_method_access(
        &self,
        token: &str,
        employer_id: &str,
        manager_id: &str,
    ) -> HhResult<MethodAccessResponse> {
        self.get(format!(
            "/employers/{}/managers/{}/method_access",
            employer_id, manager_id
        ))
        .token(token)
        .send()
        .await
    }

    pub async fn get_employer_available_publications(
        &self,
        token: &str,
        employer_id: &str,
        area_id: Option<&str>,
        professional_role_id: Option<&str>,
    ) -> HhResult<AvailablePublicationsResponse> {
        self.get(format!(
            "/employers/{}/services/available_publications",
            employer_id
        ))
        .token(token)
        .params(&serde_json::json!({
            "area_id": area_id,
            "professional_role_id": professional_role_id,
        }))?
        .send()
        .await
    }
}
