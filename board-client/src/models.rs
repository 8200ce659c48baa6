use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

// Сервер пока не присылает автора в записях постов и комментариев.
// TODO: убрать фоллбеки, когда бекенд начнёт отдавать поле `author`.
const FALLBACK_POST_AUTHOR: &str = "Admin";
const FALLBACK_COMMENT_AUTHOR: &str = "User";

#[derive(Debug, Clone, Serialize, Validate)]
/// Учётные данные для входа. Никогда не сохраняются.
pub struct Credentials {
    /// Email пользователя.
    #[validate(email)]
    pub email: String,
    /// Пароль, минимум 6 символов.
    #[validate(length(min = 6))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Ответ сервера после успешного входа.
pub struct AuthResponse {
    /// Bearer-токен для последующих запросов.
    pub token: String,
    /// Идентификатор пользователя.
    pub id: String,
    /// Отображаемое имя пользователя.
    pub name: String,
    /// Email пользователя.
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Пост в том виде, в котором его потребляет интерфейс.
pub struct Post {
    /// Идентификатор поста.
    pub id: String,
    /// Заголовок.
    pub title: String,
    /// Текст поста.
    pub description: String,
    /// Отображаемое имя автора.
    pub author: String,
    /// Дата создания; пустая строка, если сервер её не прислал.
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Комментарий в том виде, в котором его потребляет интерфейс.
pub struct Comment {
    /// Идентификатор комментария.
    pub id: String,
    /// Текст комментария.
    pub text: String,
    /// Отображаемое имя автора.
    pub author: String,
    /// Дата создания; пустая строка, если сервер её не прислал.
    pub date: String,
}

#[derive(Debug, Clone, Deserialize)]
/// Отметка времени создания в серверном формате.
pub struct CreatedAt {
    /// Unix-время в секундах.
    #[serde(rename = "_seconds")]
    pub seconds: i64,
}

#[derive(Debug, Clone, Deserialize)]
/// Пост в серверном формате, без адаптации под интерфейс.
pub struct PostRecord {
    /// Идентификатор поста.
    pub id: String,
    /// Заголовок.
    pub title: String,
    /// Содержимое поста.
    pub content: String,
    /// Имя автора, если сервер его прислал.
    #[serde(default)]
    pub author: Option<String>,
    /// Время создания, если сервер его прислал.
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<CreatedAt>,
}

#[derive(Debug, Clone, Deserialize)]
/// Комментарий в серверном формате, без адаптации под интерфейс.
pub struct CommentRecord {
    /// Идентификатор комментария.
    pub id: String,
    /// Содержимое комментария.
    pub content: String,
    /// Имя автора, если сервер его прислал.
    #[serde(default)]
    pub author: Option<String>,
    /// Время создания, если сервер его прислал.
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<CreatedAt>,
}

fn format_created_at(created_at: Option<&CreatedAt>) -> String {
    created_at
        .and_then(|ts| Utc.timestamp_opt(ts.seconds, 0).single())
        .map(|dt| dt.format("%d.%m.%Y").to_string())
        .unwrap_or_default()
}

impl From<PostRecord> for Post {
    fn from(value: PostRecord) -> Self {
        let date = format_created_at(value.created_at.as_ref());
        Self {
            id: value.id,
            title: value.title,
            description: value.content,
            author: value
                .author
                .unwrap_or_else(|| FALLBACK_POST_AUTHOR.to_string()),
            date,
        }
    }
}

impl From<CommentRecord> for Comment {
    fn from(value: CommentRecord) -> Self {
        let date = format_created_at(value.created_at.as_ref());
        Self {
            id: value.id,
            text: value.content,
            author: value
                .author
                .unwrap_or_else(|| FALLBACK_COMMENT_AUTHOR.to_string()),
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_record_maps_content_to_description() {
        let record: PostRecord = serde_json::from_str(
            r#"{"id":"p1","title":"Hello","content":"World","createdAt":{"_seconds":1700000000,"_nanoseconds":0}}"#,
        )
        .expect("record should parse");

        let post = Post::from(record);
        assert_eq!(post.id, "p1");
        assert_eq!(post.title, "Hello");
        assert_eq!(post.description, "World");
        assert_eq!(post.date, "14.11.2023");
    }

    #[test]
    fn post_date_is_empty_without_created_at() {
        let record: PostRecord =
            serde_json::from_str(r#"{"id":"p1","title":"t","content":"c"}"#)
                .expect("record should parse");

        let post = Post::from(record);
        assert_eq!(post.date, "");
    }

    #[test]
    fn post_author_falls_back_when_server_omits_it() {
        let record: PostRecord =
            serde_json::from_str(r#"{"id":"p1","title":"t","content":"c"}"#)
                .expect("record should parse");

        let post = Post::from(record);
        assert_eq!(post.author, "Admin");
    }

    #[test]
    fn post_author_prefers_server_value() {
        let record: PostRecord = serde_json::from_str(
            r#"{"id":"p1","title":"t","content":"c","author":"maria"}"#,
        )
        .expect("record should parse");

        let post = Post::from(record);
        assert_eq!(post.author, "maria");
    }

    #[test]
    fn comment_record_maps_content_to_text() {
        let record: CommentRecord = serde_json::from_str(
            r#"{"id":"c1","content":"nice post","createdAt":{"_seconds":1700000000}}"#,
        )
        .expect("record should parse");

        let comment = Comment::from(record);
        assert_eq!(comment.text, "nice post");
        assert_eq!(comment.author, "User");
        assert_eq!(comment.date, "14.11.2023");
    }

    #[test]
    fn credentials_reject_invalid_email() {
        let credentials = Credentials {
            email: "not-an-email".to_string(),
            password: "secret1".to_string(),
        };
        assert!(credentials.validate().is_err());
    }

    #[test]
    fn credentials_reject_short_password() {
        let credentials = Credentials {
            email: "a@b.com".to_string(),
            password: "123".to_string(),
        };
        assert!(credentials.validate().is_err());
    }

    #[test]
    fn credentials_accept_valid_input() {
        let credentials = Credentials {
            email: "a@b.com".to_string(),
            password: "secret1".to_string(),
        };
        assert!(credentials.validate().is_ok());
    }
}
