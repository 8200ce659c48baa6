use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
/// Ошибки клиентской библиотеки `board-client`.
pub enum BoardClientError {
    /// Запрос не дошёл до сервера (DNS, соединение, таймаут).
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Сервер отклонил учётные данные или токен (401/403).
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Запрошенный ресурс не найден.
    #[error("not found")]
    NotFound,

    /// Некорректный запрос или иная бизнес-ошибка сервера.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Успешный ответ сервера не соответствует ожидаемой схеме.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Локальная проверка входных данных не прошла.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Ошибка локального хранилища токена.
    #[error("storage error: {0}")]
    Storage(String),

    /// Прочие неожиданные ошибки.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

/// Результат операций `board-client`.
pub type BoardClientResult<T> = Result<T, BoardClientError>;

impl BoardClientError {
    pub(crate) fn from_http_status(status: reqwest::StatusCode, message: Option<String>) -> Self {
        let message = message.unwrap_or_else(|| format!("http status {status}"));
        match status {
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                Self::Unauthorized(message)
            }
            reqwest::StatusCode::NOT_FOUND => Self::NotFound,
            _ => Self::InvalidRequest(message),
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_http_status(status, None);
        }
        if err.is_decode() {
            return Self::MalformedResponse(err.to_string());
        }
        if err.is_connect() || err.is_timeout() || err.is_request() {
            return Self::Network(err);
        }
        Self::Unexpected(err.to_string())
    }
}
