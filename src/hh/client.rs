use reqwest::{multipart::Form, Client, Method};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use super::error::{HhApiError, HhError, HhResult};
use super::query;

#[derive(Debug, Clone)]
pub struct HhConfig {
    pub api_base_url: String,
    /// OAuth token endpoints live on the site host, not on the API host.
    pub oauth_base_url: String,
    pub user_agent: String,
    pub locale: Option<String>,
    pub host: Option<String>,
    pub timeout: Duration,
}

impl Default for HhConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.hh.ru".to_string(),
            oauth_base_url: "https://hh.ru".to_string(),
            user_agent: "NodeHH-API/1.0".to_string(),
            locale: None,
            host: None,
            timeout: Duration::from_secs(30),
        }
    }
}

impl HhConfig {
    /// Points both hosts at one base URL, which is what a mock server needs.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            api_base_url: base_url.clone(),
            oauth_base_url: base_url,
            ..Self::default()
        }
    }
}

#[derive(Clone)]
pub struct HhClient {
    http: Client,
    config: Arc<HhConfig>,
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Host {
    Api,
    OAuth,
}

pub(crate) enum Body {
    Empty,
    Json(serde_json::Value),
    Form(Vec<(String, String)>),
    Multipart(Form),
}

pub(crate) struct HhRequest<'a> {
    client: &'a HhClient,
    method: Method,
    path: String,
    host: Host,
    token: Option<&'a str>,
    query: Vec<(String, String)>,
    body: Body,
}

impl HhClient {
    pub fn new(config: HhConfig) -> HhResult<Self> {
        for base in [&config.api_base_url, &config.oauth_base_url] {
            Url::parse(base).map_err(|e| {
                HhError::InvalidRequest(format!("Invalid base URL {}: {}", base, e))
            })?;
        }
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_http(http, config))
    }

    pub fn with_http(http: Client, config: HhConfig) -> Self {
        Self {
            http,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &HhConfig {
        &self.config
    }

    pub(crate) fn request(&self, method: Method, path: impl Into<String>) -> HhRequest<'_> {
        HhRequest {
            client: self,
            method,
            path: path.into(),
            host: Host::Api,
            token: None,
            query: Vec::new(),
            body: Body::Empty,
        }
    }

    pub(crate) fn get(&self, path: impl Into<String>) -> HhRequest<'_> {
        self.request(Method::GET, path)
    }

    pub(crate) fn post(&self, path: impl Into<String>) -> HhRequest<'_> {
        self.request(Method::POST, path)
    }

    pub(crate) fn put(&self, path: impl Into<String>) -> HhRequest<'_> {
        self.request(Method::PUT, path)
    }

    pub(crate) fn delete(&self, path: impl Into<String>) -> HhRequest<'_> {
        self.request(Method::DELETE, path)
    }
}

impl<'a> HhRequest<'a> {
    pub(crate) fn oauth(mut self) -> Self {
        self.host = Host::OAuth;
        self
    }

    pub(crate) fn token(mut self, token: &'a str) -> Self {
        self.token = Some(token);
        self
    }

    pub(crate) fn query(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    pub(crate) fn params<P: Serialize + ?Sized>(self, params: &P) -> HhResult<Self> {
        let pairs = query::to_pairs(params)?;
        Ok(self.query(pairs))
    }

    pub(crate) fn json<B: Serialize + ?Sized>(mut self, body: &B) -> HhResult<Self> {
        self.body = Body::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    pub(crate) fn form(mut self, pairs: Vec<(String, String)>) -> Self {
        self.body = Body::Form(pairs);
        self
    }

    pub(crate) fn multipart(mut self, form: Form) -> Self {
        self.body = Body::Multipart(form);
        self
    }

    fn url(&self) -> String {
        let base = match self.host {
            Host::Api => &self.client.config.api_base_url,
            Host::OAuth => &self.client.config.oauth_base_url,
        };
        format!("{}{}", base.trim_end_matches('/'), self.path)
    }

    async fn execute(self) -> HhResult<bytes::Bytes> {
        let url = self.url();
        let config = &self.client.config;

        let mut query = self.query;
        if let Some(locale) = &config.locale {
            query.push(("locale".to_string(), locale.clone()));
        }
        if let Some(host) = &config.host {
            query.push(("host".to_string(), host.clone()));
        }

        debug!("HH {} {}", self.method, url);

        let mut builder = self
            .client
            .http
            .request(self.method.clone(), &url)
            .header("HH-User-Agent", &config.user_agent);

        if !query.is_empty() {
            builder = builder.query(&query);
        }
        if let Some(token) = self.token {
            builder = builder.bearer_auth(token);
        }

        builder = match self.body {
            Body::Empty => builder,
            Body::Json(value) => builder.json(&value),
            Body::Form(pairs) => builder.form(&pairs),
            Body::Multipart(form) => builder.multipart(form),
        };

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let error = serde_json::from_slice::<HhApiError>(&body).unwrap_or_default();
            warn!(
                "HH API {} {} failed with status {}",
                self.method,
                url,
                status.as_u16()
            );
            return Err(HhError::Api {
                status: status.as_u16(),
                error,
            });
        }

        Ok(body)
    }

    pub(crate) async fn send<T: DeserializeOwned>(self) -> HhResult<T> {
        let body = self.execute().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// For endpoints that answer 204 or whose body carries nothing useful.
    pub(crate) async fn send_empty(self) -> HhResult<()> {
        self.execute().await.map(|_| ())
    }
}
