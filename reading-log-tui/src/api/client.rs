use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use super::dto::{EntryPayload, MutationResponse};
use super::EntryApi;
use crate::types::{Entry, Suggestions};

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .with_context(|| format!("Invalid API URL: {}", base_url))?;
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("Failed to build URL for path {}", path))
    }

    /// `/api/entries`, carrying `?q=` only for a non-empty query.
    pub(crate) fn entries_url(&self, query: Option<&str>) -> Result<Url> {
        let mut url = self.endpoint("/api/entries")?;
        if let Some(query) = query.filter(|query| !query.is_empty()) {
            url.query_pairs_mut().append_pair("q", query);
        }
        Ok(url)
    }

    pub(crate) fn update_url(&self, id: &str) -> Result<Url> {
        self.endpoint(&format!("/api/update/{}", id))
    }

    pub(crate) fn delete_url(&self, id: &str) -> Result<Url> {
        self.endpoint(&format!("/api/delete/{}", id))
    }

    async fn send(&self, request: RequestBuilder, call_name: &str) -> Result<Response> {
        request
            .send()
            .await
            .with_context(|| format!("Failed to call {}", call_name))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        call_name: &str,
    ) -> Result<T> {
        let response = self.send(request, call_name).await?;
        response
            .error_for_status_ref()
            .with_context(|| format!("{} returned error", call_name))?;
        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse {} response", call_name))
    }

    /// Mutations answer with the `{success, error}` envelope on 4xx and 5xx
    /// as well, so the body is read whatever the status.
    async fn mutate(&self, request: RequestBuilder, call_name: &str) -> Result<MutationResponse> {
        let response = self.send(request, call_name).await?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read {} response", call_name))?;

        serde_json::from_slice(&body)
            .with_context(|| format!("{} returned {} with an unreadable body", call_name, status))
    }
}

#[async_trait]
impl EntryApi for ApiClient {
    async fn list_entries(&self, query: Option<&str>) -> Result<Vec<Entry>> {
        self.get_json(self.client.get(self.entries_url(query)?), "GET /api/entries")
            .await
    }

    async fn create_entry(&self, payload: &EntryPayload) -> Result<MutationResponse> {
        self.mutate(
            self.client.post(self.endpoint("/api/save")?).json(payload),
            "POST /api/save",
        )
        .await
    }

    async fn update_entry(&self, id: &str, payload: &EntryPayload) -> Result<MutationResponse> {
        self.mutate(
            self.client.put(self.update_url(id)?).json(payload),
            "PUT /api/update/:id",
        )
        .await
    }

    async fn delete_entry(&self, id: &str) -> Result<MutationResponse> {
        self.mutate(
            self.client.delete(self.delete_url(id)?),
            "DELETE /api/delete/:id",
        )
        .await
    }

    async fn autocomplete(&self) -> Result<Suggestions> {
        self.get_json(
            self.client.get(self.endpoint("/api/autocomplete")?),
            "GET /api/autocomplete",
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new("http://127.0.0.1:5000/").unwrap()
    }

    #[test]
    fn empty_query_requests_unfiltered_collection() {
        let client = client();

        assert_eq!(
            client.entries_url(Some("")).unwrap().as_str(),
            "http://127.0.0.1:5000/api/entries"
        );
        assert_eq!(
            client.entries_url(None).unwrap().as_str(),
            "http://127.0.0.1:5000/api/entries"
        );
    }

    #[test]
    fn search_term_is_encoded_into_query() {
        let url = client().entries_url(Some("dune & co")).unwrap();

        assert_eq!(url.path(), "/api/entries");
        assert_eq!(url.query(), Some("q=dune+%26+co"));
    }

    #[test]
    fn entry_id_travels_in_path() {
        let client = client();

        assert_eq!(
            client.update_url("42").unwrap().as_str(),
            "http://127.0.0.1:5000/api/update/42"
        );
        assert_eq!(
            client.delete_url("42").unwrap().as_str(),
            "http://127.0.0.1:5000/api/delete/42"
        );
    }

    #[test]
    fn rejects_invalid_base_url() {
        let error = ApiClient::new("not a url").unwrap_err();
        assert!(format!("{:#}", error).contains("Invalid API URL"));
    }
}
