use std::time::{SystemTime, UNIX_EPOCH};

use board_client::{BoardClient, Credentials, MemoryTokenStore};

fn unique_suffix() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock must be after unix epoch")
        .as_nanos();
    format!("{nanos}")
}

#[tokio::test]
#[ignore = "requires running HTTP server"]
async fn http_board_flow() {
    let base_url =
        std::env::var("BOARD_HTTP_URL").unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());
    let email = std::env::var("BOARD_EMAIL").unwrap_or_else(|_| "a@b.com".to_string());
    let password = std::env::var("BOARD_PASSWORD").unwrap_or_else(|_| "secret1".to_string());

    let client = BoardClient::new(base_url, MemoryTokenStore::new());

    let auth = client
        .login(&Credentials {
            email: email.clone(),
            password,
        })
        .await
        .expect("login must succeed");
    assert!(!auth.token.is_empty());
    assert_eq!(auth.email, email);
    assert_eq!(client.token().as_deref(), Some(auth.token.as_str()));

    let suffix = unique_suffix();
    let title = format!("smoke title {suffix}");
    let description = format!("smoke description {suffix}");

    let created = client
        .create_post(&title, &description)
        .await
        .expect("create_post must succeed");
    assert_eq!(created.title, title);
    assert_eq!(created.content, description);

    let posts = client.get_posts().await.expect("get_posts must succeed");
    let post = posts
        .iter()
        .find(|post| post.title == title)
        .expect("created post must be listed");
    assert_eq!(post.description, description);

    let text = format!("nice post {suffix}");
    client
        .add_comment(&post.id, &text)
        .await
        .expect("add_comment must succeed");

    let comments = client
        .get_comments(&post.id)
        .await
        .expect("get_comments must succeed");
    assert!(comments.iter().any(|comment| comment.text == text));

    client.logout().expect("logout must succeed");
    assert!(client.token().is_none());
}
