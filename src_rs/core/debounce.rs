// 목적:
// - 입력값 디바운스 타이머를 제공한다.
//
// 설명:
// - 새 값이 들어올 때마다 마감 시각을 다시 잡고, 마지막 값만 보관한다.
// - 실제 대기는 호출 측 이벤트 루프가 `deadline()`으로 수행한다.
//
// 디자인 패턴:
// - 상태 보관 타이머(Stateful Timer).
//
// 참조:
// - src_rs/core/search_pipeline.rs

use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<String>,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            deadline: None,
        }
    }

    /// 새 값을 보관하고 마감 시각을 `now + delay`로 재설정한다.
    pub fn push(&mut self, value: String, now: Instant) {
        self.pending = Some(value);
        self.deadline = Some(now + self.delay);
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// 마감 시각이 지났으면 보관 중인 값을 꺼낸다.
    pub fn take_due(&mut self, now: Instant) -> Option<String> {
        match self.deadline {
            Some(deadline) if deadline <= now => self.flush(),
            _ => None,
        }
    }

    /// 마감 시각과 무관하게 보관 중인 값을 꺼낸다.
    pub fn flush(&mut self) -> Option<String> {
        self.deadline = None;
        self.pending.take()
    }
}
