mod cli;
mod server;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use nogs_engine::{load_ignore_rules, load_templates, FetchSettings, ProxyEngine, ReqwestFetcher};
use nogs_logging::{nogs_info, LogDestination};

use crate::cli::Cli;
use crate::server::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    nogs_logging::initialize(LogDestination::Both(cli.log_file.clone()), cli.log_level);

    let domain = cli.link_domain();
    nogs_info!("Domain: {}", domain);

    let template = load_templates(&cli.templates_dir)
        .with_context(|| format!("loading page templates from {:?}", cli.templates_dir))?;
    let rules = load_ignore_rules(&cli.ignore_site, &cli.ignore_title);

    let settings = FetchSettings::with_request_timeout(Duration::from_secs(cli.timeout_secs));
    let fetcher = ReqwestFetcher::new(settings).context("building the upstream HTTP client")?;
    let engine = ProxyEngine::new(Arc::new(fetcher), cli.upstream.clone(), Arc::new(rules), template);
    let router = build_router(Arc::new(AppState { engine, domain }));

    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    nogs_info!("Listening on {}", addr);
    axum::serve(listener, router).await.context("serving HTTP")?;
    Ok(())
}
