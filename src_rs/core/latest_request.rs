// 목적:
// - 진행 중인 요청을 하나만 유지하는 슬롯을 제공한다.
//
// 설명:
// - 새 요청 핸들로 교체하면 이전 작업은 abort 되고 결과는 버려진다.
// - 슬롯이 비어 있으면 `settled()`는 영원히 대기하므로 select 분기 조건과 함께 쓴다.
//
// 디자인 패턴:
// - 단일 슬롯 교체(Switch Latest).
//
// 참조:
// - src_rs/core/search_pipeline.rs

use tokio::task::{JoinError, JoinHandle};

#[derive(Debug)]
pub struct LatestRequest<T> {
    slot: Option<JoinHandle<T>>,
}

impl<T> Default for LatestRequest<T> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<T> LatestRequest<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.slot.is_some()
    }

    /// 새 핸들을 보관한다. 이전 핸들이 있으면 abort 했는지 여부를 반환한다.
    pub fn replace(&mut self, handle: JoinHandle<T>) -> bool {
        let previous = self.slot.replace(handle);
        match previous {
            Some(previous) => {
                previous.abort();
                true
            }
            None => false,
        }
    }

    pub fn abort(&mut self) {
        if let Some(handle) = self.slot.take() {
            handle.abort();
        }
    }

    /// 현재 요청이 끝날 때까지 기다리고 슬롯을 비운다.
    pub async fn settled(&mut self) -> Result<T, JoinError> {
        let Some(handle) = self.slot.as_mut() else {
            return std::future::pending().await;
        };

        let joined = handle.await;
        self.slot = None;
        joined
    }
}

impl<T> Drop for LatestRequest<T> {
    fn drop(&mut self) {
        self.abort();
    }
}
