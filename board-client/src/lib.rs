//! Клиентская библиотека для дашборда постов и комментариев.
//!
//! Инкапсулирует работу с REST API сервера: вход по учётным данным,
//! хранение bearer-токена, подстановку его в заголовок `Authorization` и
//! адаптацию серверных ответов под модели интерфейса.
//!
//! Токен живёт за узким интерфейсом [`TokenStore`], поэтому физическое
//! хранилище (память, файл, их комбинация) выбирается при создании клиента
//! и не влияет на места вызова.
#![warn(missing_docs)]

mod error;
mod models;
mod resources;
mod session;
mod storage;
mod transport;

pub use error::{BoardClientError, BoardClientResult};
pub use models::{
    AuthResponse, Comment, CommentRecord, CreatedAt, Credentials, Post, PostRecord,
};
pub use storage::{FileTokenStore, MemoryTokenStore, MirroredTokenStore, TokenStore};

use session::SessionService;
use transport::HttpTransport;

#[derive(Debug)]
/// Клиент доски: сессия плюс операции над постами и комментариями.
///
/// Перед каждым запросом токен читается из хранилища; без токена запрос
/// уходит неаутентифицированным.
pub struct BoardClient<S: TokenStore> {
    session: SessionService<S>,
    http: HttpTransport,
}

impl<S: TokenStore> BoardClient<S> {
    /// Создаёт клиент с базовым URL сервера и хранилищем токена.
    pub fn new(base_url: impl Into<String>, store: S) -> Self {
        let http = HttpTransport::new(base_url);
        let session = SessionService::new(http.clone(), store);
        Self { session, http }
    }

    /// Выполняет вход и сохраняет выданный токен.
    pub async fn login(&self, credentials: &Credentials) -> BoardClientResult<AuthResponse> {
        self.session.login(credentials).await
    }

    /// Завершает сессию, удаляя токен из всех мест хранения.
    pub fn logout(&self) -> BoardClientResult<()> {
        self.session.logout()
    }

    /// Возвращает сохранённый токен, если пользователь вошёл.
    pub fn token(&self) -> Option<String> {
        self.session.token()
    }
}
