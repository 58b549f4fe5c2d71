//! Endpoints available to every client: OAuth, vacancy search,
//! dictionaries, suggests, employers and the current account.

use super::client::HhClient;
use super::error::HhResult;
use super::query;
use super::types::*;

fn pairs<const N: usize>(items: [(&str, &str); N]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl HhClient {
    /// Client-credentials grant.
    pub async fn get_app_token(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> HhResult<AppTokenResponse> {
        self.post("/oauth/token")
            .oauth()
            .form(pairs([
                ("grant_type", "client_credentials"),
                ("client_id", client_id),
                ("client_secret", client_secret),
            ]))
            .send()
            .await
    }

    /// Authorization-code grant. A missing redirect URI is sent as an empty value.
    pub async fn get_user_token(
        &self,
        client_id: &str,
        client_secret: &str,
        code: &str,
        redirect_uri: Option<&str>,
    ) -> HhResult<UserTokenResponse> {
        self.post("/oauth/token")
            .oauth()
            .form(pairs([
                ("grant_type", "authorization_code"),
                ("client_id", client_id),
                ("client_secret", client_secret),
                ("code", code),
                ("redirect_uri", redirect_uri.unwrap_or("")),
            ]))
            .send()
            .await
    }

    pub async fn refresh_user_token(
        &self,
        client_id: &str,
        client_secret: &str,
        refresh_token: &str,
    ) -> HhResult<UserTokenResponse> {
        self.post("/oauth/token")
            .oauth()
            .form(pairs([
                ("grant_type", "refresh_token"),
                ("client_id", client_id),
                ("client_secret", client_secret),
                ("refresh_token", refresh_token),
            ]))
            .send()
            .await
    }

    pub async fn search_vacancies(
        &self,
        token: &str,
        params: &VacancySearchParams,
    ) -> HhResult<VacancySearchResponse> {
        self.get("/vacancies").token(token).params(params)?.send().await
    }

    pub async fn search_suitable_vacancies(
        &self,
        token: &str,
        vacancy_id: &str,
        params: &VacancySearchParams,
    ) -> HhResult<VacancySearchResponse> {
        self.get(format!("/vacancies/{}/related_vacancies", vacancy_id))
            .token(token)
            .params(params)?
            .send()
            .await
    }

    pub async fn search_similar_vacancies(
        &self,
        token: &str,
        vacancy_id: &str,
        params: &VacancySearchParams,
    ) -> HhResult<VacancySearchResponse> {
        self.get(format!("/vacancies/{}/similar_vacancies", vacancy_id))
            .token(token)
            .params(params)?
            .send()
            .await
    }

    pub async fn get_resume_locales(&self) -> HhResult<Vec<IdName>> {
        self.get("/locales/resume").send().await
    }

    pub async fn get_locales(&self) -> HhResult<Vec<LocaleResponse>> {
        self.get("/locales").send().await
    }

    pub async fn get_dictionaries(&self) -> HhResult<Dictionaries> {
        self.get("/dictionaries").send().await
    }

    pub async fn get_languages(&self) -> HhResult<Vec<LanguageResponse>> {
        self.get("/languages").send().await
    }

    pub async fn get_educational_institutions(
        &self,
        ids: &[impl AsRef<str>],
    ) -> HhResult<EducationalInstitutionsResponse> {
        self.get("/educational_institutions")
            .query(query::repeated("id", ids))
            .send()
            .await
    }

    pub async fn get_skills(&self, ids: &[impl AsRef<str>]) -> HhResult<SkillsResponse> {
        self.get("/skills")
            .query(query::repeated("id", ids))
            .send()
            .await
    }

    pub async fn get_professional_roles(&self) -> HhResult<ProfessionalRolesResponse> {
        self.get("/professional_roles").send().await
    }

    pub async fn get_educational_institution_faculties(
        &self,
        institution_id: &str,
    ) -> HhResult<Vec<IdName>> {
        self.get(format!("/educational_institutions/{}/faculties", institution_id))
            .send()
            .await
    }

    pub async fn get_industries(&self) -> HhResult<Vec<IndustryResponse>> {
        self.get("/industries").send().await
    }

    pub async fn get_districts(&self) -> HhResult<Vec<DistrictResponse>> {
        self.get("/districts").send().await
    }

    pub async fn get_metro(&self) -> HhResult<Vec<MetroResponse>> {
        self.get("/metro").send().await
    }

    pub async fn get_city_metro(&self, city_id: &str) -> HhResult<MetroResponse> {
        self.get(format!("/metro/{}", city_id)).send().await
    }

    pub async fn get_countries(&self) -> HhResult<Vec<IdUrlName>> {
        self.get("/areas/countries").send().await
    }

    pub async fn get_regions(
        &self,
        additional_case: Option<AdditionalCase>,
    ) -> HhResult<Vec<AreaResponse>> {
        self.get("/areas")
            .params(&serde_json::json!({ "additional_case": additional_case }))?
            .send()
            .await
    }

    pub async fn get_region(
        &self,
        area_id: &str,
        additional_case: Option<AdditionalCase>,
    ) -> HhResult<AreaResponse> {
        self.get(format!("/areas/{}", area_id))
            .params(&serde_json::json!({ "additional_case": additional_case }))?
            .send()
            .await
    }

    pub async fn get_positions_suggests(&self, text: &str) -> HhResult<PositionsSuggestsResponse> {
        self.suggest("positions", text).await
    }

    pub async fn get_educational_institutions_suggests(
        &self,
        text: &str,
    ) -> HhResult<EducationalInstitutionsResponse> {
        self.suggest("educational_institutions", text).await
    }

    pub async fn get_area_leaves_suggests(
        &self,
        text: &str,
        area_id: Option<&str>,
    ) -> HhResult<AreaLeavesSuggestsResponse> {
        self.get("/suggests/area_leaves")
            .params(&serde_json::json!({ "text": text, "area_id": area_id }))?
            .send()
            .await
    }

    pub async fn get_skills_suggests(&self, text: &str) -> HhResult<SkillsSuggestsResponse> {
        self.suggest("skill_set", text).await
    }

    pub async fn get_vacancy_positions_suggests(
        &self,
        text: &str,
    ) -> HhResult<VacancyPositionsSuggestsResponse> {
        self.suggest("vacancy_positions", text).await
    }

    pub async fn get_professional_roles_suggests(
        &self,
        text: &str,
    ) -> HhResult<ProfessionalRolesSuggestsResponse> {
        self.suggest("professional_roles", text).await
    }

    pub async fn get_resume_search_keyword_suggests(
        &self,
        text: &str,
    ) -> HhResult<KeywordSuggestsResponse> {
        self.suggest("resume_search_keyword", text).await
    }

    pub async fn get_areas_suggests(
        &self,
        text: &str,
        area_id: Option<&str>,
        include_parent: Option<bool>,
    ) -> HhResult<AreaSuggestsResponse> {
        self.get("/suggests/areas")
            .params(&serde_json::json!({
                "text": text,
                "area_id": area_id,
                "include_parent": include_parent,
            }))?
            .send()
            .await
    }

    pub async fn get_vacancy_search_keyword_suggests(
        &self,
        text: &str,
    ) -> HhResult<KeywordSuggestsResponse> {
        self.suggest("vacancy_search_keyword", text).await
    }

    pub async fn get_fields_of_study_suggests(
        &self,
        text: &str,
    ) -> HhResult<FieldsOfStudySuggestsResponse> {
        self.suggest("fields_of_study", text).await
    }

    pub async fn get_companies_suggests(&self, text: &str) -> HhResult<CompaniesSuggestsResponse> {
        self.suggest("companies", text).await
    }

    async fn suggest<T: serde::de::DeserializeOwned>(&self, kind: &str, text: &str) -> HhResult<T> {
        self.get(format!("/suggests/{}", kind))
            .query(pairs([("text", text)]))
            .send()
            .await
    }

    pub async fn get_employer(&self, employer_id: &str) -> HhResult<EmployerResponse> {
        self.get(format!("/employers/{}", employer_id)).send().await
    }

    pub async fn get_employers(&self, options: &GetEmployersOptions) -> HhResult<EmployersResponse> {
        self.get("/employers").params(options)?.send().await
    }

    pub async fn get_salary_employee_levels(&self) -> HhResult<Vec<SalaryEmployeeLevel>> {
        self.get("/salary_statistics/dictionaries/employee_levels")
            .send()
            .await
    }

    pub async fn get_salary_areas(&self) -> HhResult<Vec<SalaryArea>> {
        self.get("/salary_statistics/dictionaries/salary_areas")
            .send()
            .await
    }

    pub async fn get_salary_professional_areas(&self) -> HhResult<Vec<SalaryProfessionalArea>> {
        self.get("/salary_statistics/dictionaries/professional_areas")
            .send()
            .await
    }

    pub async fn get_salary_industries(&self) -> HhResult<Vec<SalaryIndustry>> {
        self.get("/salary_statistics/dictionaries/salary_industries")
            .send()
            .await
    }

    pub async fn get_me(&self, token: &str) -> HhResult<Me> {
        self.get("/me").token(token).send().await
    }
}
