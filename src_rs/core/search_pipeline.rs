// 목적:
// - 입력 이벤트를 결과 카드로 바꾸는 검색 파이프라인을 실행한다.
//
// 설명:
// - 디바운스 -> 중복 제거 -> 컨테이너 비우기 -> 공백 필터 -> 이전 요청 취소 후 조회
//   -> 실패 흡수 -> items 추출 -> 항목별 카드 렌더링 순서로 처리한다.
// - 하나의 tokio 작업 안에서 select 루프로 동작하므로 컨테이너 접근에 잠금이 필요 없다.
// - 입력 채널이 닫히면 대기 중인 값을 즉시 내보내고, 마지막 요청이 끝난 뒤 종료한다.
//
// 디자인 패턴:
// - 파이프라인(Pipeline) + 명시적 상태 기계(State Machine).
//
// 참조:
// - src_rs/core/debounce.rs
// - src_rs/core/distinct.rs
// - src_rs/core/latest_request.rs
// - src_rs/core/github_http.rs
// - src_rs/render/container.rs

use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinError;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info, warn};

use crate::core::config::PipelineConfigPayload;
use crate::core::debounce::Debouncer;
use crate::core::distinct::DistinctUntilChanged;
use crate::core::errors::CoreResult;
use crate::core::github_http::{SearchResponse, UserSearchApi};
use crate::core::latest_request::LatestRequest;
use crate::render::card::render_card;
use crate::render::container::ResultContainer;

enum PipelineEvent {
    Input(Option<String>),
    DebounceElapsed,
    Settled(Result<CoreResult<SearchResponse>, JoinError>),
}

pub struct SearchPipeline<A, C> {
    config: PipelineConfigPayload,
    api: Arc<A>,
    container: C,
    input: UnboundedReceiver<String>,
    input_open: bool,
    debouncer: Debouncer,
    distinct: DistinctUntilChanged<String>,
    latest: LatestRequest<CoreResult<SearchResponse>>,
}

impl<A, C> SearchPipeline<A, C>
where
    A: UserSearchApi,
    C: ResultContainer,
{
    pub fn new(
        config: PipelineConfigPayload,
        api: Arc<A>,
        container: C,
        input: UnboundedReceiver<String>,
    ) -> Self {
        let debouncer = Debouncer::new(config.debounce());
        Self {
            config,
            api,
            container,
            input,
            input_open: true,
            debouncer,
            distinct: DistinctUntilChanged::new(),
            latest: LatestRequest::new(),
        }
    }

    /// 입력이 닫히고 남은 작업이 모두 끝날 때까지 파이프라인을 돌린다.
    /// 컨테이너를 돌려준다.
    pub async fn run(mut self) -> C {
        while self.input_open || self.debouncer.is_pending() || self.latest.is_active() {
            let deadline = self.debouncer.deadline();
            let event = tokio::select! {
                value = self.input.recv(), if self.input_open => PipelineEvent::Input(value),
                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    PipelineEvent::DebounceElapsed
                }
                settled = self.latest.settled(), if self.latest.is_active() => {
                    PipelineEvent::Settled(settled)
                }
            };

            match event {
                PipelineEvent::Input(Some(value)) => {
                    self.debouncer.push(value, Instant::now());
                }
                PipelineEvent::Input(None) => {
                    debug!("입력 채널이 닫혔습니다");
                    self.input_open = false;
                    if let Some(value) = self.debouncer.flush() {
                        self.on_debounced(value);
                    }
                }
                PipelineEvent::DebounceElapsed => {
                    if let Some(value) = self.debouncer.take_due(Instant::now()) {
                        self.on_debounced(value);
                    }
                }
                PipelineEvent::Settled(settled) => self.on_settled(settled),
            }
        }

        debug!("검색 파이프라인을 종료합니다");
        self.container
    }

    fn on_debounced(&mut self, value: String) {
        if !self.distinct.accept(&value) {
            debug!(query = %value, "직전 질의와 같아 무시합니다");
            return;
        }

        self.container.clear();

        if !self.config.blank_query_policy.admits(&value) {
            debug!(query = %value, "빈 질의라 조회하지 않습니다");
            return;
        }

        info!(query = %value, "사용자 검색을 요청합니다");
        let api = Arc::clone(&self.api);
        let handle = tokio::spawn(async move { api.search_users(&value).await });
        if self.latest.replace(handle) {
            debug!("진행 중이던 이전 요청을 취소했습니다");
        }
    }

    fn on_settled(&mut self, settled: Result<CoreResult<SearchResponse>, JoinError>) {
        let response = match settled {
            Ok(Ok(response)) => response,
            Ok(Err(error)) => {
                warn!(%error, "사용자 검색에 실패해 결과를 비워 둡니다");
                return;
            }
            Err(error) => {
                warn!(%error, "사용자 검색 작업이 비정상 종료되었습니다");
                return;
            }
        };

        info!(count = response.items.len(), "검색 결과를 렌더링합니다");
        for user in &response.items {
            self.container
                .append_html(&render_card(user, &self.config.card));
        }
    }
}
