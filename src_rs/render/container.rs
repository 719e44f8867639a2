// 목적:
// - 결과 카드가 그려지는 출력 컨테이너 경계를 정의한다.
//
// 설명:
// - 파이프라인은 `ResultContainer`만 알고, 실제 출력 대상은 생성 시 주입된다.
// - `SharedContainer`는 메모리에 조각을 모으며 복제본끼리 같은 버퍼를 공유한다.
// - `WriterContainer`는 임의의 `io::Write`로 조각을 흘려보낸다. 쓰기 실패는 로그만 남긴다.
//
// 디자인 패턴:
// - 포트/어댑터(Port & Adapter).
//
// 참조:
// - src_rs/core/search_pipeline.rs
// - src_rs/main.rs

use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::warn;

pub const CLEAR_MARKER: &str = "<!-- results cleared -->";

/// 결과 카드가 추가되는 컨테이너다.
pub trait ResultContainer: Send + 'static {
    /// 컨테이너 내용을 모두 비운다.
    fn clear(&mut self);

    /// HTML 조각을 컨테이너 끝에 덧붙인다.
    fn append_html(&mut self, fragment: &str);
}

#[derive(Debug, Default)]
struct SharedState {
    fragments: Vec<String>,
    clear_count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct SharedContainer {
    state: Arc<Mutex<SharedState>>,
}

impl SharedContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 현재 컨테이너에 남아 있는 조각의 복사본이다.
    pub fn fragments(&self) -> Vec<String> {
        self.lock().fragments.clone()
    }

    pub fn len(&self) -> usize {
        self.lock().fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear_count(&self) -> usize {
        self.lock().clear_count
    }

    fn lock(&self) -> MutexGuard<'_, SharedState> {
        // 포이즌 상태여도 내용은 유효하다.
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ResultContainer for SharedContainer {
    fn clear(&mut self) {
        let mut state = self.lock();
        state.fragments.clear();
        state.clear_count += 1;
    }

    fn append_html(&mut self, fragment: &str) {
        self.lock().fragments.push(fragment.to_string());
    }
}

#[derive(Debug)]
pub struct WriterContainer<W> {
    writer: W,
}

impl<W: Write + Send + 'static> WriterContainer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(&mut self, text: &str) {
        let written = writeln!(self.writer, "{}", text.trim_end()).and_then(|_| self.writer.flush());
        if let Err(error) = written {
            warn!(%error, "결과 출력에 실패했습니다");
        }
    }
}

impl<W: Write + Send + 'static> ResultContainer for WriterContainer<W> {
    fn clear(&mut self) {
        self.write_line(CLEAR_MARKER);
    }

    fn append_html(&mut self, fragment: &str) {
        self.write_line(fragment);
    }
}
