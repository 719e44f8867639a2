// 목적:
// - 터미널에서 검색 파이프라인을 구동하는 데모 실행 파일을 제공한다.
//
// 설명:
// - 표준 입력의 각 줄을 입력 변경 알림으로 취급하고, 렌더링된 카드 HTML을 표준 출력에 쓴다.
// - 첫 번째 인자로 설정 JSON 파일 경로를 받을 수 있다. `GITHUB_TOKEN`이 있으면 인증 토큰으로 쓴다.
// - 로그는 `RUST_LOG`로 조절하며 표준 오류로 출력된다.
//
// 참조:
// - src_rs/api/search_bridge.rs

use std::io;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::runtime::{Builder, Runtime};
use tracing::info;
use tracing_subscriber::EnvFilter;

use live_user_search::{CoreError, CoreResult, PipelineConfigPayload, SearchBridge, WriterContainer};

fn main() -> CoreResult<()> {
    init_tracing();

    let mut config = load_config(std::env::args().nth(1))?;
    if let Some(token) = std::env::var("GITHUB_TOKEN").ok().filter(|token| !token.is_empty()) {
        config.github.auth_token = Some(token);
    }

    let runtime = create_runtime()?;
    runtime.block_on(run(config))
}

async fn run(config: PipelineConfigPayload) -> CoreResult<()> {
    let bridge = SearchBridge::with_github(config, WriterContainer::new(io::stdout()))?;
    info!("입력을 기다립니다 (한 줄 = 입력 변경 한 번)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|error| CoreError::Runtime(format!("표준 입력 읽기 실패: {}", error)))?
    {
        bridge.on_input(line)?;
    }

    bridge.shutdown().await?;
    Ok(())
}

fn load_config(path: Option<String>) -> CoreResult<PipelineConfigPayload> {
    let Some(path) = path else {
        return Ok(PipelineConfigPayload::default());
    };

    let raw = std::fs::read_to_string(&path).map_err(|error| {
        CoreError::InvalidConfig(format!("설정 파일을 읽을 수 없습니다: path={}, {}", path, error))
    })?;
    PipelineConfigPayload::from_json(&raw)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn create_runtime() -> CoreResult<Runtime> {
    Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|error| CoreError::Runtime(format!("Tokio 런타임 생성 실패: {}", error)))
}
