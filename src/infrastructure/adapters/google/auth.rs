//! Google Cloud 认证
//!
//! 支持 API Key、固定访问令牌，以及通过 GCE / Cloud Run 元数据服务器获取服务账号令牌

use chrono::{DateTime, TimeDelta, Utc};
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use tokio::sync::RwLock;

use super::read_json;
use crate::application::ports::CapabilityError;
use crate::config::GoogleConfig;

/// 令牌提前刷新的余量（秒）
const TOKEN_REFRESH_MARGIN_SECS: i64 = 60;

/// 放在请求头而非查询参数，URL 会出现在错误信息和日志中
const API_KEY_HEADER: &str = "x-goog-api-key";

const METADATA_TOKEN_PATH: &str = "/computeMetadata/v1/instance/service-accounts/default/token";

/// 认证凭据
#[derive(Debug, Clone)]
pub enum Credentials {
    /// `x-goog-api-key` 请求头
    ApiKey(String),
    /// 固定 Bearer 令牌
    AccessToken(String),
    /// 托管平台服务账号
    MetadataServer { base_url: String },
}

impl Credentials {
    /// 按优先级从配置中选择：api_key > access_token > 元数据服务器
    pub fn from_config(config: &GoogleConfig) -> Self {
        let non_empty = |v: &Option<String>| v.clone().filter(|s| !s.is_empty());

        if let Some(key) = non_empty(&config.api_key) {
            Credentials::ApiKey(key)
        } else if let Some(token) = non_empty(&config.access_token) {
            Credentials::AccessToken(token)
        } else {
            Credentials::MetadataServer {
                base_url: config.metadata_base_url.trim_end_matches('/').to_string(),
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct MetadataToken {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn is_valid(&self) -> bool {
        self.expires_at > Utc::now()
    }
}

/// Google 请求认证器
///
/// 初始化后只读（令牌缓存除外），可在请求间共享
pub struct GoogleAuth {
    credentials: Credentials,
    project_id: Option<String>,
    http: Client,
    cached_token: RwLock<Option<CachedToken>>,
}

impl GoogleAuth {
    pub fn new(credentials: Credentials, project_id: Option<String>, http: Client) -> Self {
        Self {
            credentials,
            project_id,
            http,
            cached_token: RwLock::new(None),
        }
    }

    pub fn from_config(config: &GoogleConfig, http: Client) -> Self {
        Self::new(
            Credentials::from_config(config),
            config.project_id.clone(),
            http,
        )
    }

    /// 为请求附加认证信息
    pub async fn authorize(&self, builder: RequestBuilder) -> Result<RequestBuilder, CapabilityError> {
        match &self.credentials {
            Credentials::ApiKey(key) => Ok(builder.header(API_KEY_HEADER, key)),
            Credentials::AccessToken(token) => Ok(self.with_project(builder.bearer_auth(token))),
            Credentials::MetadataServer { base_url } => {
                let token = self.metadata_token(base_url).await?;
                Ok(self.with_project(builder.bearer_auth(token)))
            }
        }
    }

    /// 使用 Bearer 令牌时由项目承担配额
    fn with_project(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.project_id {
            Some(project_id) => builder.header("x-goog-user-project", project_id),
            None => builder,
        }
    }

    async fn metadata_token(&self, base_url: &str) -> Result<String, CapabilityError> {
        if let Some(token) = self.cached_token.read().await.as_ref() {
            if token.is_valid() {
                return Ok(token.access_token.clone());
            }
        }

        let mut cached = self.cached_token.write().await;
        // 等待写锁期间可能已被其他请求刷新
        if let Some(token) = cached.as_ref() {
            if token.is_valid() {
                return Ok(token.access_token.clone());
            }
        }

        let url = format!("{}{}", base_url, METADATA_TOKEN_PATH);
        tracing::debug!(url = %url, "Fetching access token from metadata server");

        let response = self
            .http
            .get(&url)
            .header("Metadata-Flavor", "Google")
            .send()
            .await
            .map_err(|e| {
                CapabilityError::Auth(format!("Cannot reach metadata server: {}", e))
            })?;

        let token: MetadataToken = read_json(response).await.map_err(|e| match e {
            CapabilityError::Auth(msg) => CapabilityError::Auth(msg),
            other => CapabilityError::Auth(format!("Failed to obtain access token: {}", other)),
        })?;

        let expires_at = token_expiry(Utc::now(), token.expires_in)?;
        let entry = CachedToken {
            access_token: token.access_token,
            expires_at,
        };

        tracing::info!(expires_at = %entry.expires_at, "Access token refreshed");

        let access_token = entry.access_token.clone();
        *cached = Some(entry);
        Ok(access_token)
    }
}

/// 计算缓存过期时间，预留刷新余量
fn token_expiry(now: DateTime<Utc>, expires_in: i64) -> Result<DateTime<Utc>, CapabilityError> {
    let lifetime = expires_in.saturating_sub(TOKEN_REFRESH_MARGIN_SECS).max(0);
    TimeDelta::try_seconds(lifetime)
        .and_then(|delta| now.checked_add_signed(delta))
        .ok_or_else(|| {
            CapabilityError::Auth(format!("Invalid token lifetime: {}s", expires_in))
        })
}
