use reqwest::Method;
use serde::Deserialize;
use validator::Validate;

use crate::error::{BoardClientError, BoardClientResult};
use crate::models::{AuthResponse, Credentials};
use crate::storage::TokenStore;
use crate::transport::HttpTransport;

const LOGIN_PATH: &str = "/auth/login";

#[derive(Debug, Deserialize)]
struct AuthResponseDto {
    token: String,
    id: String,
    name: String,
    email: String,
}

impl From<AuthResponseDto> for AuthResponse {
    fn from(value: AuthResponseDto) -> Self {
        Self {
            token: value.token,
            id: value.id,
            name: value.name,
            email: value.email,
        }
    }
}

#[derive(Debug)]
/// Служба сессии: вход, выход и доступ к сохранённому токену.
pub struct SessionService<S: TokenStore> {
    http: HttpTransport,
    store: S,
}

impl<S: TokenStore> SessionService<S> {
    /// Создаёт службу сессии поверх транспорта и хранилища токена.
    pub(crate) fn new(http: HttpTransport, store: S) -> Self {
        Self { http, store }
    }

    /// Выполняет вход: проверяет учётные данные локально, отправляет их на
    /// сервер и сохраняет выданный токен в хранилище.
    ///
    /// Возвращает полный ответ сервера, чтобы вызывающая сторона могла
    /// заполнить своё состояние пользователя.
    pub async fn login(&self, credentials: &Credentials) -> BoardClientResult<AuthResponse> {
        credentials.validate()?;

        let dto: AuthResponseDto = self
            .http
            .send_json(Method::POST, LOGIN_PATH, credentials, None)
            .await?;

        self.store
            .save(&dto.token)
            .map_err(BoardClientError::Storage)?;
        tracing::info!(user = %dto.email, "login succeeded");

        Ok(dto.into())
    }

    /// Завершает сессию, удаляя токен из всех мест хранения.
    ///
    /// Сетевого вызова нет: сервер ничего не знает о выходе.
    pub fn logout(&self) -> BoardClientResult<()> {
        self.store.clear().map_err(BoardClientError::Storage)
    }

    /// Возвращает сохранённый токен без обращения к сети.
    pub fn token(&self) -> Option<String> {
        self.store.load()
    }
}
