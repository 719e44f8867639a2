// 목적:
// - 사용자 한 명을 결과 카드 HTML 조각으로 만든다.
//
// 설명:
// - 아바타 이미지, 로그인 이름, 프로필 링크를 담는다.
// - 삽입되는 값은 모두 HTML 이스케이프한다.
//
// 참조:
// - src_rs/render/container.rs

use crate::core::config::CardTemplateConfig;
use crate::core::github_http::User;

/// 결과 카드 HTML 조각을 만든다.
pub fn render_card(user: &User, template: &CardTemplateConfig) -> String {
    format!(
        r#"<div class="card">
  <div class="card-image">
    <img src="{avatar_url}" />
    <span class="card-title">{login}</span>
  </div>
  <div class="card-action">
    <a href="{html_url}" target="_blank">{link_label}</a>
  </div>
</div>
"#,
        avatar_url = html_escape(&user.avatar_url),
        login = html_escape(&user.login),
        html_url = html_escape(&user.html_url),
        link_label = html_escape(&template.link_label),
    )
}

/// HTML 특수 문자를 이스케이프한다.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
