// 목적:
// - 결과 렌더링 계층 모듈을 선언한다.
//
// 설명:
// - 카드 HTML 생성과 출력 컨테이너 경계를 분리한다.
//
// 참조:
// - src_rs/render/card.rs
// - src_rs/render/container.rs

pub mod card;
pub mod container;
