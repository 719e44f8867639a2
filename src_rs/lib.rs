// 목적:
// - 실시간 GitHub 사용자 검색 라이브러리의 진입점을 제공한다.
//
// 설명:
// - 입력 변경 알림을 디바운스하고 GitHub 사용자 검색 결과를 카드로 렌더링한다.
// - 입력 채널과 출력 컨테이너는 모두 생성 시 주입되므로 실제 UI 없이 테스트할 수 있다.
//
// 디자인 패턴:
// - 계층형 모듈 구조(api/core/render).
//
// 참조:
// - src_rs/api/search_bridge.rs
// - src_rs/core/search_pipeline.rs

pub mod api;
pub mod core;
pub mod render;

pub use crate::api::search_bridge::SearchBridge;
pub use crate::core::config::PipelineConfigPayload;
pub use crate::core::errors::{CoreError, CoreResult};
pub use crate::core::github_http::{GithubSearchClient, SearchResponse, User, UserSearchApi};
pub use crate::render::container::{ResultContainer, SharedContainer, WriterContainer};
