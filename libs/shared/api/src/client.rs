use std::time::Duration;

use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue, CONTENT_TYPE, AUTHORIZATION},
    Method,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, error, warn};

use shared_config::AppConfig;

use crate::error::ApiError;
use crate::resource::{ListFilters, Resource};
use crate::response::{ListEnvelope, Page};

pub struct ClinicApiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl ClinicApiClient {
    pub fn new(config: &AppConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.api_timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                error!("Failed to build HTTP client with timeout, using defaults: {}", e);
                Client::new()
            });

        Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key().map(str::to_string),
        }
    }

    fn get_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(key) = &self.api_key {
            let value = HeaderValue::from_str(&format!("Bearer {}", key))
                .map_err(|e| ApiError::InvalidHeader(e.to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }

    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<reqwest::Response, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making {} request to {}", method, url);

        let mut req = self.client.request(method, &url)
            .headers(self.get_headers()?);

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("API error ({}): {}", status, error_text);

            return Err(match status.as_u16() {
                401 | 403 => ApiError::Auth(error_text),
                404 => ApiError::NotFound(error_text),
                code => ApiError::Status { status: code, message: error_text },
            });
        }

        Ok(response)
    }

    pub async fn request<T>(&self, method: Method, path: &str, body: Option<Value>) -> Result<T, ApiError>
    where T: DeserializeOwned {
        let response = self.send(method, path, body).await?;
        let bytes = response.bytes().await?;
        let data = serde_json::from_slice::<T>(&bytes)?;
        Ok(data)
    }

    /// Sends a request whose response body is ignored (DELETE may answer 204).
    pub async fn request_empty(&self, method: Method, path: &str, body: Option<Value>) -> Result<(), ApiError> {
        self.send(method, path, body).await?;
        Ok(())
    }

    async fn fetch_list(&self, resource: Resource, filters: &ListFilters) -> Result<ListEnvelope, ApiError> {
        let path = format!("/{}{}", resource.path(), filters.to_query_string());
        self.request(Method::GET, &path, None).await
    }

    /// Lists a resource. Bodies that are not a list, including bodies that
    /// are not JSON at all, come back as an empty page.
    pub async fn list<T>(&self, resource: Resource, filters: &ListFilters) -> Result<Page<T>, ApiError>
    where T: DeserializeOwned {
        match self.fetch_list(resource, filters).await {
            Ok(envelope) => Ok(envelope.into_page()),
            Err(ApiError::Decode(e)) => {
                warn!("{} list body was not JSON, treating as empty: {}", resource, e);
                Ok(Page::empty())
            }
            Err(e) => Err(e),
        }
    }

    /// Lists a resource where a missing record must not be mistaken for an
    /// absent one. Any body that is not a fully readable list is an error.
    pub async fn list_complete<T>(&self, resource: Resource, filters: &ListFilters) -> Result<Page<T>, ApiError>
    where T: DeserializeOwned {
        let envelope = self.fetch_list(resource, filters).await?;
        if !envelope.is_list() {
            return Err(ApiError::UnexpectedShape(format!("{} did not return a list", resource)));
        }

        let page = envelope.into_page::<T>();
        if page.skipped > 0 {
            return Err(ApiError::UnexpectedShape(format!(
                "{} of the {} records could not be read",
                page.skipped, resource
            )));
        }

        Ok(page)
    }

    pub async fn get<T>(&self, resource: Resource, id: &str) -> Result<T, ApiError>
    where T: DeserializeOwned {
        let path = format!("/{}/{}", resource.path(), urlencoding::encode(id));
        self.request(Method::GET, &path, None).await
    }

    pub async fn create<T>(&self, resource: Resource, body: Value) -> Result<T, ApiError>
    where T: DeserializeOwned {
        let path = format!("/{}", resource.path());
        self.request(Method::POST, &path, Some(body)).await
    }

    pub async fn update<T>(&self, resource: Resource, id: &str, body: Value) -> Result<T, ApiError>
    where T: DeserializeOwned {
        let path = format!("/{}/{}", resource.path(), urlencoding::encode(id));
        self.request(Method::PUT, &path, Some(body)).await
    }

    pub async fn update_status<T>(&self, resource: Resource, id: &str, status: &str) -> Result<T, ApiError>
    where T: DeserializeOwned {
        let path = format!("/{}/{}/status", resource.path(), urlencoding::encode(id));
        self.request(Method::PATCH, &path, Some(json!({ "status": status }))).await
    }

    /// Patients and practitioners are soft-deleted by the backend; the call
    /// is the same DELETE for every resource.
    pub async fn delete(&self, resource: Resource, id: &str) -> Result<(), ApiError> {
        let path = format!("/{}/{}", resource.path(), urlencoding::encode(id));
        self.request_empty(Method::DELETE, &path, None).await
    }

    pub async fn dashboard<T>(&self) -> Result<T, ApiError>
    where T: DeserializeOwned {
        self.request(Method::GET, "/dashboard", None).await
    }
}
