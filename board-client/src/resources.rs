use reqwest::Method;
use serde::Serialize;

use crate::BoardClient;
use crate::error::BoardClientResult;
use crate::models::{Comment, CommentRecord, Post, PostRecord};
use crate::storage::TokenStore;

const POSTS_PATH: &str = "/posts";

#[derive(Debug, Serialize)]
struct CreatePostDto<'a> {
    title: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct AddCommentDto<'a> {
    content: &'a str,
}

fn comments_path(post_id: &str) -> String {
    format!("/posts/{post_id}/comments")
}

impl<S: TokenStore> BoardClient<S> {
    /// Создаёт пост.
    ///
    /// Возвращает запись в серверном формате; адаптированную модель даёт
    /// повторное чтение списка через [`BoardClient::get_posts`].
    pub async fn create_post(
        &self,
        title: &str,
        description: &str,
    ) -> BoardClientResult<PostRecord> {
        let payload = CreatePostDto {
            title,
            content: description,
        };
        self.http
            .send_json(Method::POST, POSTS_PATH, &payload, self.token().as_deref())
            .await
    }

    /// Возвращает все посты в порядке, выданном сервером, адаптированные
    /// под модель интерфейса.
    pub async fn get_posts(&self) -> BoardClientResult<Vec<Post>> {
        let records: Vec<PostRecord> = self
            .http
            .send(Method::GET, POSTS_PATH, self.token().as_deref())
            .await?;
        Ok(records.into_iter().map(Post::from).collect())
    }

    /// Возвращает комментарии к посту, адаптированные под модель интерфейса.
    pub async fn get_comments(&self, post_id: &str) -> BoardClientResult<Vec<Comment>> {
        let records: Vec<CommentRecord> = self
            .http
            .send(Method::GET, &comments_path(post_id), self.token().as_deref())
            .await?;
        Ok(records.into_iter().map(Comment::from).collect())
    }

    /// Добавляет комментарий к посту.
    ///
    /// Возвращает запись в серверном формате, как и [`BoardClient::create_post`].
    pub async fn add_comment(
        &self,
        post_id: &str,
        text: &str,
    ) -> BoardClientResult<CommentRecord> {
        let payload = AddCommentDto { content: text };
        self.http
            .send_json(
                Method::POST,
                &comments_path(post_id),
                &payload,
                self.token().as_deref(),
            )
            .await
    }
}
