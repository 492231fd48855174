use async_trait::async_trait;
use reqwest::{header, Client, Response};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::github::api::RepositoryApi;
use crate::models::{Collaborator, Comment, Issue, IssueComment};

pub struct GitHubClient {
    client: Client,
    repo_url: String,
}

impl GitHubClient {
    pub fn new(config: &Config, token: &str) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("token {}", token))?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("election-helper/0.1"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            repo_url: config.api_repo_url(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let response = ensure_success(response, url).await?;
        Ok(response.json().await?)
    }
}

async fn ensure_success(response: Response, endpoint: &str) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(Error::Http {
        status,
        endpoint: endpoint.to_string(),
        body,
    })
}

#[async_trait]
impl RepositoryApi for GitHubClient {
    async fn list_comments(&self) -> Result<Vec<Comment>> {
        let url = format!("{}/issues/comments", self.repo_url);
        tracing::info!("Fetching issue comments");

        let comments: Vec<IssueComment> = self.get_json(&url).await?;
        Ok(comments.into_iter().map(Comment::from).collect())
    }

    async fn list_collaborators(&self) -> Result<Vec<String>> {
        let url = format!("{}/collaborators", self.repo_url);
        tracing::info!("Fetching collaborators");

        let collaborators: Vec<Collaborator> = self.get_json(&url).await?;
        Ok(collaborators.into_iter().map(|c| c.login).collect())
    }

    async fn get_issue(&self, issue: &str) -> Result<Issue> {
        let url = format!("{}/issues/{}", self.repo_url, issue);
        self.get_json(&url).await
    }

    async fn delete_comment(&self, comment_url: &str) -> Result<()> {
        tracing::debug!("DELETE {}", comment_url);
        let response = self.client.delete(comment_url).send().await?;
        ensure_success(response, comment_url).await?;
        Ok(())
    }
}
