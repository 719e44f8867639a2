// 목적:
// - 직전 값과 같은 값을 걸러내는 캐시를 제공한다.

/// 마지막으로 통과한 값을 기억해 연속 중복을 막는다.
#[derive(Debug)]
pub struct DistinctUntilChanged<T> {
    last: Option<T>,
}

impl<T> Default for DistinctUntilChanged<T> {
    fn default() -> Self {
        Self { last: None }
    }
}

impl<T: PartialEq + Clone> DistinctUntilChanged<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 직전 값과 다르면 기록하고 `true`를 반환한다. 첫 값은 항상 통과한다.
    pub fn accept(&mut self, value: &T) -> bool {
        if self.last.as_ref() == Some(value) {
            return false;
        }
        self.last = Some(value.clone());
        true
    }
}
