// 목적:
// - 호스트(UI/터미널)에서 사용하는 검색 브릿지 객체를 제공한다.
//
// 설명:
// - 입력 변경 알림을 받아 파이프라인 채널로 전달하고,
//   파이프라인 작업의 시작과 종료를 관리한다.
// - 현재 tokio 런타임 위에서 실행되어야 한다.
//
// 디자인 패턴:
// - 파사드(Facade) + 실패 빠르게(Fail Fast).
//
// 참조:
// - src_rs/core/search_pipeline.rs
// - src_rs/main.rs

use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::core::config::PipelineConfigPayload;
use crate::core::errors::{CoreError, CoreResult};
use crate::core::github_http::{GithubSearchClient, UserSearchApi};
use crate::core::search_pipeline::SearchPipeline;
use crate::render::container::ResultContainer;

/// 입력 이벤트를 검색 파이프라인에 연결하는 브릿지다.
pub struct SearchBridge<C> {
    input: UnboundedSender<String>,
    worker: JoinHandle<C>,
}

impl<C: ResultContainer> SearchBridge<C> {
    /// 설정을 검증하고 파이프라인 작업을 띄운다.
    pub fn start<A: UserSearchApi>(
        config: PipelineConfigPayload,
        api: Arc<A>,
        container: C,
    ) -> CoreResult<Self> {
        config.validate()?;

        let (input, receiver) = mpsc::unbounded_channel();
        let pipeline = SearchPipeline::new(config, api, container, receiver);
        let worker = tokio::spawn(pipeline.run());

        Ok(Self { input, worker })
    }

    /// 설정의 GitHub 항목으로 HTTP 클라이언트를 만든 뒤 파이프라인을 띄운다.
    pub fn with_github(config: PipelineConfigPayload, container: C) -> CoreResult<Self> {
        let client = GithubSearchClient::new(config.github.clone())?;
        Self::start(config, Arc::new(client), container)
    }

    /// 입력 변경 알림을 받아 현재 텍스트 값을 파이프라인으로 넘긴다.
    pub fn on_input(&self, value: impl Into<String>) -> CoreResult<()> {
        self.input.send(value.into()).map_err(|_| {
            CoreError::Runtime("검색 파이프라인이 이미 종료되었습니다".to_string())
        })
    }

    /// 입력을 닫고 파이프라인이 남은 작업을 마칠 때까지 기다린다.
    pub async fn shutdown(self) -> CoreResult<C> {
        let Self { input, worker } = self;
        drop(input);
        debug!("검색 브릿지 입력을 닫았습니다");

        worker
            .await
            .map_err(|error| CoreError::Runtime(format!("검색 파이프라인 조인 실패: {}", error)))
    }
}
