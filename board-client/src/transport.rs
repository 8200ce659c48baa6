use std::time::Duration;

use reqwest::{Client, Method};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::error::{BoardClientError, BoardClientResult};

#[derive(Debug, Deserialize)]
struct ErrorBodyDto {
    message: Option<String>,
}

#[derive(Debug, Clone)]
/// HTTP-транспорт: базовый URL, общий `reqwest::Client` и подстановка
/// bearer-токена в заголовок `Authorization`.
///
/// Токен передаётся явным параметром; транспорт сам никакое состояние не
/// читает. Без токена запрос уходит неаутентифицированным.
pub struct HttpTransport {
    base_url: String,
    client: Client,
}

impl HttpTransport {
    /// Создаёт транспорт с базовым URL сервера.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()
            .expect("failed to build reqwest client");

        Self {
            base_url: base_url.into(),
            client,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn decode_error(response: reqwest::Response) -> BoardClientError {
        let status = response.status();

        let message = match response.json::<ErrorBodyDto>().await {
            Ok(body) => body.message,
            Err(_) => None,
        };
        tracing::warn!(%status, "server returned error status");
        BoardClientError::from_http_status(status, message)
    }

    async fn execute<TRes>(&self, request: reqwest::RequestBuilder) -> BoardClientResult<TRes>
    where
        TRes: DeserializeOwned,
    {
        let response = request
            .send()
            .await
            .map_err(BoardClientError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        response
            .json::<TRes>()
            .await
            .map_err(BoardClientError::from_reqwest)
    }

    /// Отправляет запрос с JSON-телом.
    pub(crate) async fn send_json<TReq, TRes>(
        &self,
        method: Method,
        path: &str,
        body: &TReq,
        token: Option<&str>,
    ) -> BoardClientResult<TRes>
    where
        TReq: Serialize,
        TRes: DeserializeOwned,
    {
        let url = self.endpoint(path);
        tracing::debug!(%method, path, authenticated = token.is_some(), "sending request");

        let mut request = self.client.request(method, url).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        self.execute(request).await
    }

    /// Отправляет запрос без тела.
    pub(crate) async fn send<TRes>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
    ) -> BoardClientResult<TRes>
    where
        TRes: DeserializeOwned,
    {
        let url = self.endpoint(path);
        tracing::debug!(%method, path, authenticated = token.is_some(), "sending request");

        let mut request = self.client.request(method, url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_normalizes_slashes() {
        let transport = HttpTransport::new("http://localhost:3000/");
        let full = transport.endpoint("/posts");
        assert_eq!(full, "http://localhost:3000/posts");
    }

    #[test]
    fn endpoint_joins_bare_parts() {
        let transport = HttpTransport::new("http://localhost:3000");
        let full = transport.endpoint("posts/p1/comments");
        assert_eq!(full, "http://localhost:3000/posts/p1/comments");
    }
}
