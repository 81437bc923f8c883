//! ClickUp REST client
//!
//! Async HTTP client for the handful of ClickUp v2 endpoints the plugin touches.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, RETRY_AFTER},
    Client, Response, StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::ClickUpConfig;
use crate::error::{ClickUpError, Result};
use crate::types::{
    Folder, FoldersResponse, ListsResponse, Member, Space, SpacesResponse, TaskList,
    TaskQueryParams, TeamsResponse, Workspace,
};

const DEFAULT_RATE_LIMIT_WAIT_SECS: u64 = 60;

/// Operations the plugin needs from ClickUp.
///
/// Actions and option providers depend on this trait rather than on
/// [`ClickUpClient`] so that hosts and tests can substitute their own transport.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickUpApi: Send + Sync {
    /// `GET /list/{list_id}/task`. The body is returned as parsed, untouched.
    async fn get_tasks(&self, list_id: &str, params: &TaskQueryParams) -> Result<Value>;

    async fn get_workspaces(&self) -> Result<Vec<Workspace>>;

    async fn get_spaces(&self, workspace_id: &str) -> Result<Vec<Space>>;

    async fn get_folders(&self, space_id: &str) -> Result<Vec<Folder>>;

    async fn get_lists(&self, folder_id: &str) -> Result<Vec<TaskList>>;

    /// Lists that sit directly under a space, outside any folder.
    async fn get_folderless_lists(&self, space_id: &str) -> Result<Vec<TaskList>>;

    async fn get_workspace_members(&self, workspace_id: &str) -> Result<Vec<Member>>;
}

/// reqwest-backed [`ClickUpApi`].
#[derive(Debug, Clone)]
pub struct ClickUpClient {
    client: Client,
    config: ClickUpConfig,
}

impl ClickUpClient {
    /// Create a new ClickUp client.
    pub fn new(config: ClickUpConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        // Personal tokens go in raw, without a Bearer prefix.
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&config.api_token)
                .map_err(|e| ClickUpError::Config(format!("Invalid API token: {}", e)))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Create a client from `CLICKUP_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClickUpConfig::from_env()?)
    }

    pub fn config(&self) -> &ClickUpConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(String, String)],
    ) -> Result<T> {
        let url = self.config.endpoint(segments)?;
        let path = url.path().to_string();
        debug!(%url, ?query, "ClickUp GET");

        let response = self.client.get(url).query(query).send().await?;
        let response = check_response(response, &path).await?;
        Ok(response.json().await?)
    }
}

fn unarchived() -> Vec<(String, String)> {
    vec![("archived".to_string(), "false".to_string())]
}

/// Turn non-success statuses into typed errors.
async fn check_response(response: Response, path: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let retry_after_secs = response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_RATE_LIMIT_WAIT_SECS);

    let body = response.text().await.unwrap_or_default();
    // ClickUp reports failures as {"err": "...", "ECODE": "..."}
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|v| v.get("err").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or(body);

    Err(match status {
        StatusCode::UNAUTHORIZED => ClickUpError::Authentication(message),
        StatusCode::NOT_FOUND => ClickUpError::NotFound(format!("{}: {}", path, message)),
        StatusCode::TOO_MANY_REQUESTS => ClickUpError::RateLimited { retry_after_secs },
        _ => ClickUpError::Api {
            status: status.as_u16(),
            message,
        },
    })
}

#[async_trait]
impl ClickUpApi for ClickUpClient {
    async fn get_tasks(&self, list_id: &str, params: &TaskQueryParams) -> Result<Value> {
        debug!(list_id, order_by = %params.order_by, page = params.page, "Fetching ClickUp tasks");
        self.get_json(&["list", list_id, "task"], &params.to_query_pairs())
            .await
    }

    async fn get_workspaces(&self) -> Result<Vec<Workspace>> {
        let response: TeamsResponse = self.get_json(&["team"], &[]).await?;
        Ok(response.teams)
    }

    async fn get_spaces(&self, workspace_id: &str) -> Result<Vec<Space>> {
        let response: SpacesResponse = self
            .get_json(&["team", workspace_id, "space"], &unarchived())
            .await?;
        Ok(response.spaces)
    }

    async fn get_folders(&self, space_id: &str) -> Result<Vec<Folder>> {
        let response: FoldersResponse = self
            .get_json(&["space", space_id, "folder"], &unarchived())
            .await?;
        Ok(response.folders)
    }

    async fn get_lists(&self, folder_id: &str) -> Result<Vec<TaskList>> {
        let response: ListsResponse = self
            .get_json(&["folder", folder_id, "list"], &unarchived())
            .await?;
        Ok(response.lists)
    }

    async fn get_folderless_lists(&self, space_id: &str) -> Result<Vec<TaskList>> {
        let response: ListsResponse = self
            .get_json(&["space", space_id, "list"], &unarchived())
            .await?;
        Ok(response.lists)
    }

    async fn get_workspace_members(&self, workspace_id: &str) -> Result<Vec<Member>> {
        self.get_workspaces()
            .await?
            .into_iter()
            .find(|w| w.id == workspace_id)
            .map(|w| w.members)
            .ok_or_else(|| ClickUpError::NotFound(format!("workspace {}", workspace_id)))
    }
}
