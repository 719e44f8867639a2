// 목적:
// - 검색 파이프라인 전체 설정 페이로드를 정의한다.
//
// 설명:
// - 모든 필드는 기본값을 가지므로 빈 JSON(`{}`)만으로도 동작한다.
// - GitHub HTTP 설정, 디바운스 간격, 공백 질의 정책, 카드 템플릿을 묶는다.
//
// 디자인 패턴:
// - 설정 페이로드(Config Payload) + 실패 빠르게(Fail Fast) 검증.
//
// 참조:
// - src_rs/core/github_http.rs
// - src_rs/core/query_filter.rs
// - src_rs/render/card.rs

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::errors::{CoreError, CoreResult};
use crate::core::query_filter::BlankQueryPolicy;

pub const DEFAULT_DEBOUNCE_MS: u64 = 1000;
pub const DEFAULT_GITHUB_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_LINK_LABEL: &str = "Open GitHub";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubHttpConfigPayload {
    pub base_url: String,
    pub timeout_ms: u64,
    pub user_agent: String,
    pub auth_token: Option<String>,
}

impl Default for GithubHttpConfigPayload {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GITHUB_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: format!("live-user-search/{}", env!("CARGO_PKG_VERSION")),
            auth_token: None,
        }
    }
}

impl GithubHttpConfigPayload {
    pub fn validate(&self) -> CoreResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "github.base_url은 비어 있을 수 없습니다".to_string(),
            ));
        }

        if self.timeout_ms == 0 {
            return Err(CoreError::InvalidConfig(
                "github.timeout_ms는 1 이상이어야 합니다".to_string(),
            ));
        }

        if self.user_agent.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "github.user_agent는 비어 있을 수 없습니다".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CardTemplateConfig {
    pub link_label: String,
}

impl Default for CardTemplateConfig {
    fn default() -> Self {
        Self {
            link_label: DEFAULT_LINK_LABEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfigPayload {
    pub debounce_ms: u64,
    pub blank_query_policy: BlankQueryPolicy,
    pub github: GithubHttpConfigPayload,
    pub card: CardTemplateConfig,
}

impl Default for PipelineConfigPayload {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            blank_query_policy: BlankQueryPolicy::default(),
            github: GithubHttpConfigPayload::default(),
            card: CardTemplateConfig::default(),
        }
    }
}

impl PipelineConfigPayload {
    /// JSON 문자열에서 설정을 읽는다. 누락된 필드는 기본값으로 채운다.
    pub fn from_json(raw: &str) -> CoreResult<Self> {
        serde_json::from_str(raw).map_err(|error| {
            CoreError::Serialization(format!("설정 JSON 파싱에 실패했습니다: {}", error))
        })
    }

    pub fn validate(&self) -> CoreResult<()> {
        self.github.validate()
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
