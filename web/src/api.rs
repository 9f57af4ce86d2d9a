use gloo::net::http::{Request, Response};
use quizboard_core::{CategoryId, CategoryPayload, CategorySummary, DataError, DataResult, QuizApi};
use serde::de::DeserializeOwned;

pub(crate) const DEFAULT_API_URL: &str = "https://jservice.io/api";

/// [`QuizApi`] over the browser's fetch, against a jService-compatible host.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HttpQuizApi {
    base_url: String,
}

impl HttpQuizApi {
    pub(crate) fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get(&self, path: &str, query: &[(&str, String)]) -> DataResult<Response> {
        let url = self.url(path);
        log::trace!("GET {} {:?}", url, query);

        Request::get(&url)
            .query(query.iter().map(|(key, value)| (*key, value.as_str())))
            .send()
            .await
            .map_err(|err| DataError::Network(format!("GET {url}: {err}")))
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> DataResult<T> {
    if !response.ok() {
        return Err(DataError::Network(format!(
            "HTTP {} from {}",
            response.status(),
            response.url()
        )));
    }

    response
        .json()
        .await
        .map_err(|err| DataError::Decode(err.to_string()))
}

impl QuizApi for HttpQuizApi {
    async fn categories(&self, count: u32, offset: u32) -> DataResult<Vec<CategorySummary>> {
        let query = [("count", count.to_string()), ("offset", offset.to_string())];
        decode(self.get("categories", &query).await?).await
    }

    async fn category(&self, id: CategoryId) -> DataResult<CategoryPayload> {
        let response = self.get("category", &[("id", id.to_string())]).await?;
        if response.status() == 404 {
            return Err(DataError::NotFound(id));
        }
        decode(response).await
    }
}
