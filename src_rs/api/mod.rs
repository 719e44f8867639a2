// 목적:
// - 호스트 경계 모듈을 선언한다.
//
// 설명:
// - 입력 이벤트를 받아 파이프라인을 구동하는 브릿지를 노출한다.
//
// 디자인 패턴:
// - 모듈 분리(Module Separation).
//
// 참조:
// - src_rs/api/search_bridge.rs

pub mod search_bridge;
