use std::process;

use anyhow::Result;
use board_client::{
    AuthResponse, BoardClient, BoardClientError, Comment, Credentials, FileTokenStore, Post,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

const TOKEN_FILE: &str = ".board_token";
const DEFAULT_SERVER: &str = "http://127.0.0.1:3000";

#[derive(Debug, Parser)]
#[command(name = "board-cli", version, about = "CLI клиент для доски постов и комментариев")]
struct Cli {
    /// Адрес сервера (по умолчанию BOARD_SERVER или локальный).
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Вход по email и паролю.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Выход: удаляет сохранённый токен.
    Logout,
    /// Список постов.
    Posts,
    /// Создание поста (требует токен).
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
    },
    /// Комментарии к посту.
    Comments {
        #[arg(long)]
        post: String,
    },
    /// Добавление комментария к посту (требует токен).
    Comment {
        #[arg(long)]
        post: String,
        #[arg(long)]
        text: String,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_logging();

    if let Err(err) = run().await {
        eprintln!("Ошибка: {err}");
        process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let server = resolve_server(cli.server);
    let client = BoardClient::new(server, FileTokenStore::new(TOKEN_FILE));

    match cli.command {
        Command::Login { email, password } => {
            let auth = client
                .login(&Credentials { email, password })
                .await
                .map_err(map_client_error)?;
            print_auth("Вход выполнен", &auth);
            println!("Токен сохранён в {TOKEN_FILE}");
        }
        Command::Logout => {
            client.logout().map_err(map_client_error)?;
            println!("Токен удалён");
        }
        Command::Posts => {
            let posts = client.get_posts().await.map_err(map_client_error)?;
            print_posts(&posts);
        }
        Command::Create { title, description } => {
            let created = client
                .create_post(&title, &description)
                .await
                .map_err(map_client_error)?;
            println!("Пост создан: id={}", created.id);
        }
        Command::Comments { post } => {
            let comments = client.get_comments(&post).await.map_err(map_client_error)?;
            print_comments(&comments);
        }
        Command::Comment { post, text } => {
            let comment = client
                .add_comment(&post, &text)
                .await
                .map_err(map_client_error)?;
            println!("Комментарий добавлен: id={}", comment.id);
        }
    }

    Ok(())
}

fn resolve_server(server: Option<String>) -> String {
    let raw = server
        .or_else(|| std::env::var("BOARD_SERVER").ok())
        .unwrap_or_else(|| DEFAULT_SERVER.to_string());
    normalize_server(raw)
}

fn normalize_server(server: String) -> String {
    if server.starts_with("http://") || server.starts_with("https://") {
        return server;
    }

    format!("http://{server}")
}

fn map_client_error(err: BoardClientError) -> anyhow::Error {
    let message = match err {
        BoardClientError::Unauthorized(message) => {
            format!("доступ отклонён: {message}; выполните `board-cli login ...`")
        }
        BoardClientError::NotFound => "ресурс не найден".to_string(),
        BoardClientError::InvalidRequest(message) => format!("сервер отклонил запрос: {message}"),
        BoardClientError::Network(err) => format!("сервер недоступен: {err}"),
        BoardClientError::MalformedResponse(message) => {
            format!("некорректный ответ сервера: {message}")
        }
        BoardClientError::Validation(errors) => format!("проверьте введённые данные: {errors}"),
        BoardClientError::Storage(message) => format!("ошибка хранилища токена: {message}"),
        BoardClientError::Unexpected(message) => format!("непредвиденная ошибка: {message}"),
    };
    anyhow::anyhow!(message)
}

fn print_auth(title: &str, auth: &AuthResponse) {
    println!("{title}");
    println!("id: {}", auth.id);
    println!("name: {}", auth.name);
    println!("email: {}", auth.email);
}

fn print_posts(posts: &[Post]) {
    println!("Постов: {}", posts.len());

    for post in posts {
        println!("- [{}] {} ({}, {})", post.id, post.title, post.author, post.date);
        println!("  {}", post.description);
    }
}

fn print_comments(comments: &[Comment]) {
    println!("Комментариев: {}", comments.len());

    for comment in comments {
        println!(
            "- [{}] {} ({}, {})",
            comment.id, comment.text, comment.author, comment.date
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_server_keeps_scheme() {
        let s = normalize_server("https://example.com:3000".to_string());
        assert_eq!(s, "https://example.com:3000");
    }

    #[test]
    fn normalize_server_adds_http_scheme() {
        let s = normalize_server("127.0.0.1:3000".to_string());
        assert_eq!(s, "http://127.0.0.1:3000");
    }

    #[test]
    fn resolve_server_prefers_explicit_flag() {
        let s = resolve_server(Some("localhost:9999".to_string()));
        assert_eq!(s, "http://localhost:9999");
    }

    #[test]
    fn map_client_error_mentions_login_for_unauthorized() {
        let err = map_client_error(BoardClientError::Unauthorized("no token".to_string()));
        assert!(err.to_string().contains("board-cli login"));
    }
}
