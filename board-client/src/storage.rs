use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Узкий интерфейс хранилища токена сессии.
///
/// Где токен живёт физически, решает реализация: память процесса, файл или
/// их комбинация. Места вызова от выбора хранилища не зависят.
pub trait TokenStore {
    /// Возвращает сохранённый токен, если он есть.
    fn load(&self) -> Option<String>;

    /// Сохраняет токен. Пустой токен отклоняется.
    fn save(&self, token: &str) -> Result<(), String>;

    /// Удаляет токен из всех мест, куда он был записан.
    fn clear(&self) -> Result<(), String>;
}

fn parse_token(raw: &str) -> Option<String> {
    let token = raw.trim().to_string();
    if token.is_empty() {
        return None;
    }
    Some(token)
}

#[derive(Debug, Default)]
/// Хранилище токена в памяти процесса.
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    /// Создаёт пустое хранилище.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().ok().and_then(|guard| guard.clone())
    }

    fn save(&self, token: &str) -> Result<(), String> {
        let token = parse_token(token).ok_or_else(|| "token must not be blank".to_string())?;
        let mut guard = self
            .token
            .lock()
            .map_err(|_| "token store is poisoned".to_string())?;
        *guard = Some(token);
        Ok(())
    }

    fn clear(&self) -> Result<(), String> {
        let mut guard = self
            .token
            .lock()
            .map_err(|_| "token store is poisoned".to_string())?;
        *guard = None;
        Ok(())
    }
}

#[derive(Debug, Clone)]
/// Хранилище токена в файле. Содержимое обрезается по пробелам при чтении;
/// отсутствие файла при очистке ошибкой не считается.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Создаёт хранилище поверх указанного пути.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Путь к файлу с токеном.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        parse_token(&raw)
    }

    fn save(&self, token: &str) -> Result<(), String> {
        let token = parse_token(token).ok_or_else(|| "token must not be blank".to_string())?;
        fs::write(&self.path, token)
            .map_err(|err| format!("failed to write {}: {err}", self.path.display()))
    }

    fn clear(&self) -> Result<(), String> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(format!("failed to remove {}: {err}", self.path.display())),
        }
    }
}

#[derive(Debug)]
/// Зеркалирует токен в два хранилища: основное и дублирующее.
///
/// Чтение предпочитает основное хранилище. Очистка всегда затрагивает оба,
/// даже если первая из них завершилась ошибкой.
pub struct MirroredTokenStore<P, S> {
    primary: P,
    secondary: S,
}

impl<P: TokenStore, S: TokenStore> MirroredTokenStore<P, S> {
    /// Создаёт зеркалирующее хранилище.
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

impl<P: TokenStore, S: TokenStore> TokenStore for MirroredTokenStore<P, S> {
    fn load(&self) -> Option<String> {
        self.primary.load().or_else(|| self.secondary.load())
    }

    fn save(&self, token: &str) -> Result<(), String> {
        self.primary.save(token)?;
        self.secondary.save(token)
    }

    fn clear(&self) -> Result<(), String> {
        let primary = self.primary.clear();
        let secondary = self.secondary.clear();
        primary?;
        secondary
    }
}
