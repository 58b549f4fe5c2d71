//! Endpoints that require an applicant token.

use reqwest::multipart::{Form, Part};

use super::client::HhClient;
use super::error::{HhError, HhResult};
use super::query;
use super::types::*;

fn form_of<T: serde::Serialize>(body: &T) -> HhResult<Vec<(String, String)>> {
    query::to_pairs(body)
}

/// Builds a multipart form from the flattened fields of `body`.
fn multipart_of<T: serde::Serialize>(body: &T) -> HhResult<Form> {
    Ok(query::to_pairs(body)?
        .into_iter()
        .fold(Form::new(), |form, (k, v)| form.text(k, v)))
}

impl HhClient {
    pub async fn confirm_phone(&self, token: &str, body: &PhoneConfirmationBody) -> HhResult<()> {
        self.post("/resume_phone_confirm")
            .token(token)
            .form(form_of(body)?)
            .send_empty()
            .await
    }

    pub async fn get_phone_info(&self, token: &str, phone: &str) -> HhResult<PhoneInfoResponse> {
        self.get("/resume_should_send_sms")
            .token(token)
            .query(vec![("phone".to_string(), phone.to_string())])
            .send()
            .await
    }

    pub async fn send_phone_confirmation_code(
        &self,
        token: &str,
        phone: &str,
    ) -> HhResult<PhoneSendCodeResponse> {
        self.post("/resume_phone_generate_code")
            .token(token)
            .form(vec![("phone".to_string(), phone.to_string())])
            .send()
            .await
    }

    pub async fn delete_resume(&self, token: &str, resume_id: &str) -> HhResult<()> {
        self.delete(format!("/resumes/{}", resume_id))
            .token(token)
            .send_empty()
            .await
    }

    pub async fn check_resume_creation(&self, token: &str) -> HhResult<ResumeCreationAvailability> {
        self.get("/resumes/creation_availability")
            .token(token)
            .send()
            .await
    }

    pub async fn publish_resume(&self, token: &str, resume_id: &str) -> HhResult<()> {
        self.post(format!("/resumes/{}/publish", resume_id))
            .token(token)
            .send_empty()
            .await
    }

    pub async fn get_resumes_by_status(
        &self,
        token: &str,
        vacancy_id: &str,
    ) -> HhResult<ResumesByStatusResponse> {
        self.get(format!("/vacancies/{}/resumes_by_status", vacancy_id))
            .token(token)
            .send()
            .await
    }

    pub async fn get_resume_status(
        &self,
        token: &str,
        resume_id: &str,
    ) -> HhResult<ResumeStatusResponse> {
        self.get(format!("/resumes/{}/status", resume_id))
            .token(token)
            .send()
            .await
    }

    pub async fn get_my_resumes(&self, token: &str) -> HhResult<MyResumesResponse> {
        self.get("/resumes/mine").token(token).send().await
    }

    pub async fn get_suitable_resumes(
        &self,
        token: &str,
        vacancy_id: &str,
    ) -> HhResult<SuitableResumesResponse> {
        self.get(format!("/vacancies/{}/suitable_resumes", vacancy_id))
            .token(token)
            .send()
            .await
    }

    /// `with_employer_logo` is only sent when true.
    pub async fn get_resume_views(
        &self,
        token: &str,
        resume_id: &str,
        with_employer_logo: bool,
    ) -> HhResult<ResumeViewsResponse> {
        let mut request = self
            .get(format!("/resumes/{}/views", resume_id))
            .token(token);
        if with_employer_logo {
            request = request.query(vec![(
                "with_employer_logo".to_string(),
                "true".to_string(),
            )]);
        }
        request.send().await
    }

    pub async fn get_resume(
        &self,
        token: &str,
        resume_id: &str,
        query: &GetResumeQuery,
    ) -> HhResult<ResumeItemFull> {
        self.get(format!("/resumes/{}", resume_id))
            .token(token)
            .params(query)?
            .send()
            .await
    }

    pub async fn get_resume_conditions(&self, token: &str) -> HhResult<ResumeConditions> {
        self.get("/resume_conditions").token(token).send().await
    }

    pub async fn get_resume_conditions_by_id(
        &self,
        token: &str,
        resume_id: &str,
    ) -> HhResult<ResumeConditions> {
        self.get(format!("/resumes/{}/conditions", resume_id))
            .token(token)
            .send()
            .await
    }

    pub async fn get_access_types(
        &self,
        token: &str,
        resume_id: &str,
    ) -> HhResult<ResumeAccessTypesResponse> {
        self.get(format!("/resumes/{}/access_types", resume_id))
            .token(token)
            .send()
            .await
    }

    pub async fn search_visibility_employers(
        &self,
        token: &str,
        resume_id: &str,
        list: VisibilityListType,
        params: &VisibilitySearchParams,
    ) -> HhResult<VisibilitySearchResponse> {
        self.get(format!("/resumes/{}/{}/search", resume_id, list.as_str()))
            .token(token)
            .params(params)?
            .send()
            .await
    }

    pub async fn get_visibility_list(
        &self,
        token: &str,
        resume_id: &str,
        list: VisibilityListType,
    ) -> HhResult<VisibilityListResponse> {
        self.get(format!("/resumes/{}/{}", resume_id, list.as_str()))
            .token(token)
            .send()
            .await
    }

    pub async fn add_to_visibility_list(
        &self,
        token: &str,
        resume_id: &str,
        list: VisibilityListType,
        body: &AddToVisibilityListBody,
    ) -> HhResult<VisibilitySearchResponse> {
        self.post(format!("/resumes/{}/{}", resume_id, list.as_str()))
            .token(token)
            .json(body)?
            .send()
            .await
    }

    pub async fn clear_visibility_list(
        &self,
        token: &str,
        resume_id: &str,
        list: VisibilityListType,
    ) -> HhResult<()> {
        self.delete(format!("/resumes/{}/{}", resume_id, list.as_str()))
            .token(token)
            .send_empty()
            .await
    }

    pub async fn remove_from_visibility_list(
        &self,
        token: &str,
        resume_id: &str,
        list: VisibilityListType,
        employer_ids: &[impl AsRef<str>],
    ) -> HhResult<()> {
        self.delete(format!("/resumes/{}/{}/employer", resume_id, list.as_str()))
            .token(token)
            .query(query::repeated("id", employer_ids))
            .send_empty()
            .await
    }

    pub async fn get_vacancy(&self, token: &str, vacancy_id: &str) -> HhResult<VacancyFull> {
        self.get(format!("/vacancies/{}", vacancy_id))
            .token(token)
            .send()
            .await
    }

    pub async fn apply_vacancy(&self, token: &str, body: &ApplyVacancyBody) -> HhResult<()> {
        self.post("/negotiations")
            .token(token)
            .multipart(multipart_of(body)?)
            .send_empty()
            .await
    }

    pub async fn get_blacklisted_vacancies(
        &self,
        token: &str,
    ) -> HhResult<BlacklistVacanciesResponse> {
        self.get("/vacancies/blacklisted").token(token).send().await
    }

    pub async fn add_vacancy_to_blacklist(&self, token: &str, vacancy_id: &str) -> HhResult<()> {
        self.put(format!("/vacancies/blacklisted/{}", vacancy_id))
            .token(token)
            .send_empty()
            .await
    }

    pub async fn remove_vacancy_from_blacklist(
        &self,
        token: &str,
        vacancy_id: &str,
    ) -> HhResult<()> {
        self.delete(format!("/vacancies/blacklisted/{}", vacancy_id))
            .token(token)
            .send_empty()
            .await
    }

    pub async fn get_blacklisted_employers(
        &self,
        token: &str,
    ) -> HhResult<BlacklistEmployersResponse> {
        self.get("/employers/blacklisted").token(token).send().await
    }

    pub async fn add_employer_to_blacklist(&self, token: &str, employer_id: &str) -> HhResult<()> {
        self.put(format!("/employers/blacklisted/{}", employer_id))
            .token(token)
            .send_empty()
            .await
    }

    pub async fn remove_employer_from_blacklist(
        &self,
        token: &str,
        employer_id: &str,
    ) -> HhResult<()> {
        self.delete(format!("/employers/blacklisted/{}", employer_id))
            .token(token)
            .send_empty()
            .await
    }

    pub async fn get_favorited_vacancies(
        &self,
        token: &str,
    ) -> HhResult<FavoritedVacanciesResponse> {
        self.get("/vacancies/favorited").token(token).send().await
    }

    pub async fn add_vacancy_to_favorites(&self, token: &str, vacancy_id: &str) -> HhResult<()> {
        self.put(format!("/vacancies/favorited/{}", vacancy_id))
            .token(token)
            .send_empty()
            .await
    }

    pub async fn remove_vacancy_from_favorites(
        &self,
        token: &str,
        vacancy_id: &str,
    ) -> HhResult<()> {
        self.delete(format!("/vacancies/favorited/{}", vacancy_id))
            .token(token)
            .send_empty()
            .await
    }

    pub async fn get_saved_searches(
        &self,
        token: &str,
        page: u32,
        per_page: u32,
    ) -> HhResult<SavedSearchesResponse> {
        self.get("/saved_searches/vacancies")
            .token(token)
            .params(&PaginationRequest {
                page: Some(page),
                per_page: Some(per_page),
            })?
            .send()
            .await
    }

    /// The search itself travels as query parameters, not as a body.
    pub async fn create_saved_search(
        &self,
        token: &str,
        params: &VacancySearchParams,
    ) -> HhResult<()> {
        self.post("/saved_searches/vacancies")
            .token(token)
            .params(params)?
            .send_empty()
            .await
    }

    pub async fn get_saved_search(&self, token: &str, id: &str) -> HhResult<SavedSearch> {
        self.get(format!("/saved_searches/vacancies/{}", id))
            .token(token)
            .send()
            .await
    }

    pub async fn update_saved_search(
        &self,
        token: &str,
        id: &str,
        update: &UpdateSavedSearch,
    ) -> HhResult<()> {
        self.put(format!("/saved_searches/vacancies/{}", id))
            .token(token)
            .params(update)?
            .send_empty()
            .await
    }

    pub async fn delete_saved_search(&self, token: &str, id: &str) -> HhResult<()> {
        self.delete(format!("/saved_searches/vacancies/{}", id))
            .token(token)
            .send_empty()
            .await
    }

    pub async fn update_me(&self, token: &str, body: &UpdateMeBody) -> HhResult<()> {
        self.post("/me")
            .token(token)
            .form(form_of(body)?)
            .send_empty()
            .await
    }

    pub async fn get_portfolio_conditions(&self, token: &str) -> HhResult<ArtifactConditions> {
        self.get("/artifacts/portfolio/conditions")
            .token(token)
            .send()
            .await
    }

    pub async fn get_portfolio(&self, token: &str) -> HhResult<PortfolioResponse> {
        self.get("/artifacts/portfolio").token(token).send().await
    }

    pub async fn update_portfolio(
        &self,
        token: &str,
        artifact_id: &str,
        description: &str,
    ) -> HhResult<()> {
        let form = Form::new().text("description", description.to_string());
        self.post(format!("/artifacts/{}", artifact_id))
            .token(token)
            .multipart(form)
            .send_empty()
            .await
    }

    pub async fn delete_portfolio(&self, token: &str, artifact_id: &str) -> HhResult<()> {
        self.delete(format!("/artifacts/{}", artifact_id))
            .token(token)
            .send_empty()
            .await
    }

    pub async fn create_portfolio(
        &self,
        token: &str,
        body: CreateArtifactBody,
    ) -> HhResult<Artifact> {
        let part = Part::bytes(body.file)
            .file_name(body.file_name)
            .mime_str("application/octet-stream")
            .map_err(|e| HhError::InvalidRequest(e.to_string()))?;

        let mut form = Form::new()
            .text("type", body.kind.as_str())
            .part("file", part);
        if let Some(description) = body.description {
            form = form.text("description", description);
        }

        self.post("/artifacts")
            .token(token)
            .multipart(form)
            .send()
            .await
    }

    pub async fn get_photo_conditions(&self, token: &str) -> HhResult<ArtifactConditions> {
        self.get("/artifacts/photo/conditions")
            .token(token)
            .send()
            .await
    }

    pub async fn get_photo(&self, token: &str) -> HhResult<PhotoResponse> {
        self.get("/artifacts/photo").token(token).send().await
    }

    pub async fn get_resume_profile(
        &self,
        token: &str,
        resume_id: &str,
    ) -> HhResult<ResumeProfileResponse> {
        self.get(format!("/resume_profile/{}", resume_id))
            .token(token)
            .send()
            .await
    }

    pub async fn update_resume_profile(
        &self,
        token: &str,
        resume_id: &str,
        body: &UpdateResumeProfileBody,
    ) -> HhResult<ResumeProfileResponse> {
        self.put(format!("/resume_profile/{}", resume_id))
            .token(token)
            .json(body)?
            .send()
            .await
    }

    pub async fn create_resume_profile(
        &self,
        token: &str,
        resume_id: &str,
        body: &CreateResumeProfileBody,
    ) -> HhResult<ResumeProfileResponse> {
        self.post(format!("/resume_profile/{}", resume_id))
            .token(token)
            .json(body)?
            .send()
            .await
    }

    pub async fn get_resume_profile_dictionaries(
        &self,
        token: &str,
    ) -> HhResult<ResumeProfileDictResponse> {
        self.get("/resume_profile/dictionaries")
            .token(token)
            .send()
            .await
    }

    pub async fn get_negotiations(
        &self,
        token: &str,
        query: &GetNegotiationsQuery,
    ) -> HhResult<NegotiationsResponse> {
        self.get("/negotiations")
            .token(token)
            .params(query)?
            .send()
            .await
    }

    /// Marks a message as read.
    pub async fn mark_negotiation_message_read(
        &self,
        token: &str,
        negotiation_id: &str,
        message_id: &str,
    ) -> HhResult<()> {
        self.put(format!(
            "/negotiations/{}/messages/{}",
            negotiation_id, message_id
        ))
        .token(token)
        .send_empty()
        .await
    }

    pub async fn delete_negotiation(
        &self,
        token: &str,
        negotiation_id: &str,
        with_decline_message: bool,
    ) -> HhResult<()> {
        self.delete(format!("/negotiations/active/{}", negotiation_id))
            .token(token)
            .query(vec![(
                "with_decline_message".to_string(),
                with_decline_message.to_string(),
            )])
            .send_empty()
            .await
    }

    pub async fn get_negotiation(&self, token: &str, negotiation_id: &str) -> HhResult<Negotiation> {
        self.get(format!("/negotiations/{}", negotiation_id))
            .token(token)
            .send()
            .await
    }

    pub async fn send_negotiation_message(
        &self,
        token: &str,
        negotiation_id: &str,
        message: &str,
    ) -> HhResult<NegotiationMessage> {
        self.post(format!("/negotiations/{}/messages", negotiation_id))
            .token(token)
            .form(vec![("message".to_string(), message.to_string())])
            .send()
            .await
    }

    pub async fn get_negotiation_messages(
        &self,
        token: &str,
        negotiation_id: &str,
        with_text_only: bool,
    ) -> HhResult<NegotiationMessagesResponse> {
        self.get(format!("/negotiations/{}/messages", negotiation_id))
            .token(token)
            .query(vec![(
                "with_text_only".to_string(),
                with_text_only.to_string(),
            )])
            .send()
            .await
    }
}
