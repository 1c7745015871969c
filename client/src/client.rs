//! HTTP client for the Scribe API
//!
//! Every request goes through [`authorize`] with the currently stored token.
//! Calls that issue a token (register, login, me) persist it before
//! returning.

use reqwest::{
    multipart::{Form, Part},
    Client, Method, RequestBuilder, Response, StatusCode,
};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use sb_shared::errors::ErrorResponse;
use sb_shared::types::{
    AuthCredentials, CommentView, CreateCommentRequest, DeletePostResponse, LoginResponse,
    MeResponse, PostView, PostsOverview, RegisterResponse, UserProfile,
};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::interceptor::authorize;
use crate::store::TokenStore;

/// Title, text and optional image of a post to create or edit
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub title: String,
    pub text: String,
    /// Original file name and contents
    pub image: Option<(String, Vec<u8>)>,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.image = Some((file_name.into(), bytes));
        self
    }

    fn into_form(self) -> Form {
        let form = Form::new().text("title", self.title).text("text", self.text);
        match self.image {
            Some((file_name, bytes)) => form.part("image", Part::bytes(bytes).file_name(file_name)),
            None => form,
        }
    }
}

/// API client bound to one token store
pub struct ApiClient<S: TokenStore> {
    http: Client,
    config: ClientConfig,
    store: S,
}

impl<S: TokenStore> ApiClient<S> {
    pub fn new(config: ClientConfig, store: S) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            config,
            store,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether a token is stored. Says nothing about its validity.
    pub fn has_session(&self) -> Result<bool, ClientError> {
        Ok(self.store.load()?.is_some())
    }

    /// Re-establish the session from a stored token
    ///
    /// Returns `None` without touching the network when nothing is stored.
    /// A rejected token is cleared and also yields `None`; other failures
    /// are returned and leave the token in place.
    pub async fn bootstrap(&self) -> Result<Option<UserProfile>, ClientError> {
        if !self.has_session()? {
            return Ok(None);
        }

        match self.me().await {
            Ok(me) => Ok(Some(me.user)),
            Err(ClientError::Unauthorized { message }) => {
                log::info!("Stored session rejected ({}), signing out", message);
                self.store.clear()?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    pub async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<RegisterResponse, ClientError> {
        let response: RegisterResponse = self
            .send(
                self.request(Method::POST, "/api/auth/register")?
                    .json(&AuthCredentials::new(username, password)),
            )
            .await?;
        self.store.save(&response.token)?;
        Ok(response)
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ClientError> {
        let response: LoginResponse = self
            .send(
                self.request(Method::POST, "/api/auth/login")?
                    .json(&AuthCredentials::new(username, password)),
            )
            .await?;
        self.store.save(&response.token)?;
        Ok(response)
    }

    /// Who am I. Stores the re-issued token.
    pub async fn me(&self) -> Result<MeResponse, ClientError> {
        let response: MeResponse = self.send(self.request(Method::GET, "/api/auth/me")?).await?;
        self.store.save(&response.token)?;
        Ok(response)
    }

    /// Forget the local token. The token itself stays valid until it expires.
    pub fn logout(&self) -> Result<(), ClientError> {
        self.store.clear()
    }

    pub async fn list_posts(&self) -> Result<PostsOverview, ClientError> {
        self.send(self.request(Method::GET, "/api/posts")?).await
    }

    /// Fetch one post, counting a view
    pub async fn get_post(&self, id: Uuid) -> Result<PostView, ClientError> {
        self.send(self.request(Method::GET, &format!("/api/posts/{}", id))?)
            .await
    }

    pub async fn my_posts(&self) -> Result<Vec<PostView>, ClientError> {
        self.send(self.request(Method::GET, "/api/posts/user/myposts")?)
            .await
    }

    pub async fn create_post(&self, draft: PostDraft) -> Result<PostView, ClientError> {
        self.send(
            self.request(Method::POST, "/api/posts")?
                .multipart(draft.into_form()),
        )
        .await
    }

    pub async fn update_post(&self, id: Uuid, draft: PostDraft) -> Result<PostView, ClientError> {
        self.send(
            self.request(Method::PUT, &format!("/api/posts/{}", id))?
                .multipart(draft.into_form()),
        )
        .await
    }

    pub async fn delete_post(&self, id: Uuid) -> Result<DeletePostResponse, ClientError> {
        self.send(self.request(Method::DELETE, &format!("/api/posts/{}", id))?)
            .await
    }

    pub async fn post_comments(&self, post_id: Uuid) -> Result<Vec<CommentView>, ClientError> {
        self.send(self.request(Method::GET, &format!("/api/posts/{}/comments", post_id))?)
            .await
    }

    pub async fn create_comment(
        &self,
        post_id: Uuid,
        comment: &str,
    ) -> Result<CommentView, ClientError> {
        let body = CreateCommentRequest {
            comment: comment.to_string(),
        };
        self.send(
            self.request(Method::POST, &format!("/api/comments/{}", post_id))?
                .json(&body),
        )
        .await
    }

    /// Raw bytes of a stored post image
    pub async fn fetch_image(&self, file_name: &str) -> Result<Vec<u8>, ClientError> {
        let response = self
            .request(Method::GET, &format!("/uploads/{}", file_name))?
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Build a request with the stored token attached
    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ClientError> {
        let token = self.store.load()?;
        Ok(authorize(
            self.http.request(method, self.config.url(path)),
            token.as_deref(),
        ))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = Self::check(request.send().await?).await?;
        Ok(response.json::<T>().await?)
    }

    /// Turn non-success statuses into errors carrying the server's message
    async fn check(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&text)
            .map(|body| body.message)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });

        if status == StatusCode::UNAUTHORIZED {
            Err(ClientError::Unauthorized { message })
        } else {
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
