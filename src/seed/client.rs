use anyhow::{bail, Context, Result};
use reqwest::{Client, Method, Response, StatusCode};
use serde_json::{json, Value};

/// One seeded account with its own cookie-carrying HTTP session
pub struct SeedUser {
    pub username: String,
    password: String,
    base_url: String,
    client: Client,
}

impl SeedUser {
    pub fn new(base_url: &str, username: String, password: String) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            username,
            password,
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub async fn register(&self, email: &str) -> Result<()> {
        let body = json!({
            "username": self.username,
            "password": self.password,
            "email": email,
        });
        self.send(Method::POST, "/auth/register", Some(body), &[StatusCode::CREATED])
            .await?;
        Ok(())
    }

    /// Log in; the session cookie is kept by the client's cookie store
    pub async fn login(&self) -> Result<()> {
        let body = json!({
            "username": self.username,
            "password": self.password,
        });
        self.send(Method::POST, "/auth/login", Some(body), &[StatusCode::OK])
            .await?;
        Ok(())
    }

    pub async fn update_profile(&self, display_name: &str, bio: &str) -> Result<()> {
        let body = json!({ "display_name": display_name, "bio": bio });
        self.send(Method::PATCH, "/users/me", Some(body), &[StatusCode::OK])
            .await?;
        Ok(())
    }

    /// Create a post and return its id
    pub async fn create_post(&self, content: &str) -> Result<String> {
        let body = json!({ "post_content": content });
        let response = self
            .send(Method::POST, "/posts", Some(body), &[StatusCode::CREATED])
            .await?;
        response
            .json::<String>()
            .await
            .context("Create post returned an unexpected body")
    }

    /// Like a post. Returns true when the like was new.
    pub async fn like_post(&self, post_id: &str) -> Result<bool> {
        let response = self
            .send(
                Method::POST,
                &format!("/posts/{}/like", post_id),
                None,
                &[StatusCode::CREATED, StatusCode::OK],
            )
            .await?;
        Ok(response.status() == StatusCode::CREATED)
    }

    pub async fn comment_on_post(&self, post_id: &str, content: &str) -> Result<String> {
        let body = json!({ "comment_content": content });
        let response = self
            .send(
                Method::POST,
                &format!("/posts/{}/comment", post_id),
                Some(body),
                &[StatusCode::CREATED],
            )
            .await?;
        response
            .json::<String>()
            .await
            .context("Create comment returned an unexpected body")
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        expected: &[StatusCode],
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("{} {} failed", method, url))?;

        let status = response.status();
        if !expected.contains(&status) {
            let text = response.text().await.unwrap_or_default();
            bail!("{} {} returned {}: {}", method, url, status, text);
        }

        tracing::debug!(user = %self.username, %method, path, status = status.as_u16(), "Seed request");
        Ok(response)
    }
}
