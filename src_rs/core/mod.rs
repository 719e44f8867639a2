// 목적:
// - 핵심 런타임 계층 모듈을 선언한다.
//
// 설명:
// - 파이프라인 단계(디바운스/중복 제거/공백 필터/요청 교체)와
//   GitHub 어댑터, 설정, 공통 오류 모델을 분리해 유지보수성을 높인다.
//
// 디자인 패턴:
// - 명시적 오류 모델(Explicit Error Model).
//
// 참조:
// - src_rs/core/errors.rs
// - src_rs/core/search_pipeline.rs

pub mod config;
pub mod debounce;
pub mod distinct;
pub mod errors;
pub mod github_http;
pub mod latest_request;
pub mod query_filter;
pub mod search_pipeline;
