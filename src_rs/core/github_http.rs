// 목적:
// - GitHub 사용자 검색 API 호출을 담당한다.
//
// 설명:
// - 질의 문자열을 `/search/users?q=` 로 전달하고 응답의 `items`만 추출한다.
// - 질의는 reqwest 쿼리 직렬화로 퍼센트 인코딩된다.
// - 파이프라인은 `UserSearchApi` 트레이트에만 의존하므로 테스트에서 가짜 구현으로 교체할 수 있다.
//
// 디자인 패턴:
// - 어댑터(Adapter).
//
// 참조:
// - src_rs/core/config.rs
// - src_rs/core/search_pipeline.rs

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Request};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;

use crate::core::config::GithubHttpConfigPayload;
use crate::core::errors::{CoreError, CoreResult};

const SEARCH_USERS_PATH: &str = "/search/users";
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// 검색 결과 한 건에 해당하는 GitHub 사용자다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
}

/// `/search/users` 응답 본문이다. `items`가 없으면 빈 목록으로 취급한다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<User>,
}

/// 사용자 검색 백엔드 경계다.
pub trait UserSearchApi: Send + Sync + 'static {
    fn search_users(&self, query: &str)
        -> impl Future<Output = CoreResult<SearchResponse>> + Send;
}

#[derive(Debug, Clone)]
pub struct GithubSearchClient {
    client: Client,
    config: GithubHttpConfigPayload,
}

impl GithubSearchClient {
    pub fn new(config: GithubHttpConfigPayload) -> CoreResult<Self> {
        config.validate()?;

        let user_agent = HeaderValue::from_str(&config.user_agent).map_err(|error| {
            CoreError::InvalidConfig(format!("github.user_agent 헤더 값이 잘못되었습니다: {}", error))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, user_agent);
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .default_headers(headers)
            .build()
            .map_err(|error| CoreError::Http(format!("HTTP 클라이언트 생성 실패: {}", error)))?;

        Ok(Self { client, config })
    }

    /// 검색 요청을 만든다. 네트워크를 사용하지 않는다.
    pub fn build_request(&self, query: &str) -> CoreResult<Request> {
        if query.is_empty() {
            return Err(CoreError::InvalidInput(
                "query는 비어 있을 수 없습니다".to_string(),
            ));
        }

        let url = format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            SEARCH_USERS_PATH
        );

        let mut request_builder = self.client.get(url).query(&[("q", query)]);
        if let Some(token) = self.config.auth_token.as_ref() {
            request_builder = request_builder.bearer_auth(token);
        }

        request_builder
            .build()
            .map_err(|error| CoreError::Http(format!("검색 요청 생성 실패: {}", error)))
    }

    async fn execute(&self, query: &str) -> CoreResult<SearchResponse> {
        let request = self.build_request(query)?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|error| CoreError::Http(format!("검색 HTTP 요청 실패: {}", error)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| CoreError::Http(format!("검색 HTTP 본문 읽기 실패: {}", error)))?;

        if !status.is_success() {
            return Err(CoreError::Http(format!(
                "검색 HTTP 상태 오류: status={}, body={}",
                status, body
            )));
        }

        parse_search_response(&body)
    }
}

impl UserSearchApi for GithubSearchClient {
    fn search_users(
        &self,
        query: &str,
    ) -> impl Future<Output = CoreResult<SearchResponse>> + Send {
        self.execute(query)
    }
}

/// 응답 본문을 파싱한다. 알 수 없는 필드는 무시한다.
pub fn parse_search_response(body: &str) -> CoreResult<SearchResponse> {
    serde_json::from_str(body.trim()).map_err(|error| {
        CoreError::Serialization(format!("검색 응답 파싱 실패: {}, body={}", error, body))
    })
}
