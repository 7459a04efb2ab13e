use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

use alchemist_api::create_app;
use alchemist_config::ApiConfig;

use crate::cli::ServeArgs;
use crate::shutdown::wait_for_shutdown_signal;

/// 启动HTTP服务，直到收到关闭信号
pub async fn run_serve(args: &ServeArgs, config: &ApiConfig) -> Result<()> {
    let mut api_config = config.clone();
    if let Some(bind) = &args.bind {
        api_config.bind_address = bind.clone();
    }

    let app = create_app(&api_config);
    let listener = TcpListener::bind(&api_config.bind_address)
        .await
        .with_context(|| format!("绑定地址失败: {}", api_config.bind_address))?;

    info!("API服务器启动在: {}", api_config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .context("API服务器运行失败")?;

    info!("API服务器已优雅关闭");
    Ok(())
}
