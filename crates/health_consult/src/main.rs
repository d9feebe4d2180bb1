mod api;
mod config;
mod consult;
mod database;
mod llm;
mod registry;
mod store;
#[cfg(test)]
mod testing;
mod utils;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::config::{Args, Config};
use crate::consult::ConsultationService;
use crate::database::setup_database;
use crate::llm::OpenAiChatClient;
use crate::registry::RegistryClient;
use crate::store::ConsultationStore;
use crate::utils::init_logger;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(&args.log_level);

    let config = Config::from(args);
    debug!("설정: {}", serde_json::to_string(&config)?);

    let connection = setup_database(&config.server.database_path).await?;
    let store = ConsultationStore::new(connection);

    let model = OpenAiChatClient::new(&config.llm).context("LLM 클라이언트 초기화 실패")?;
    let registry = RegistryClient::new(config.registry.clone()).context("식약처 API 클라이언트 초기화 실패")?;
    let service = Arc::new(ConsultationService::new(
        Arc::new(model),
        Arc::new(registry),
        config.consult.clone(),
    ));

    let listener = TcpListener::bind(config.server.bind_address)
        .await
        .with_context(|| format!("포트 바인딩 실패: {}", config.server.bind_address))?;
    let url = browser_url(config.server.bind_address);
    info!("서버 시작: {} (API 문서: {}/swagger-ui)", url, url);

    if config.server.open_browser {
        if let Err(e) = webbrowser::open(&url) {
            warn!("브라우저를 열지 못했습니다: {}", e);
        }
    }

    axum::serve(listener, api::router(service, store))
        .with_graceful_shutdown(utils::signal::terminate())
        .await?;

    info!("서버 종료");
    Ok(())
}

// 0.0.0.0 으로 바인딩한 경우 브라우저에는 루프백 주소를 준다
fn browser_url(addr: SocketAddr) -> String {
    let ip = if addr.ip().is_unspecified() {
        IpAddr::V4(Ipv4Addr::LOCALHOST)
    } else {
        addr.ip()
    };
    format!("http://{}", SocketAddr::new(ip, addr.port()))
}
