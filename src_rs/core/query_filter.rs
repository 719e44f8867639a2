// 목적:
// - 공백 질의를 걸러내는 필터 단계를 정의한다.
//
// 설명:
// - 기본 정책은 앞뒤 공백을 제거한 결과가 비어 있으면 요청하지 않는다.
// - `Untrimmed` 정책은 원본 값이 빈 문자열일 때만 거른다.
//   공백만 있는 질의도 그대로 요청되던 이전 동작을 재현할 때 사용한다.
//
// 디자인 패턴:
// - 가드 함수(Guard Function).
//
// 참조:
// - src_rs/core/search_pipeline.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlankQueryPolicy {
    #[default]
    Trimmed,
    Untrimmed,
}

impl BlankQueryPolicy {
    /// 질의가 조회 단계로 넘어갈 수 있는지 판정한다.
    pub fn admits(self, value: &str) -> bool {
        match self {
            Self::Trimmed => !value.trim().is_empty(),
            Self::Untrimmed => !value.is_empty(),
        }
    }
}
