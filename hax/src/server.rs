//! axumサーバー起動・シャットダウンハンドリング

use crate::shutdown::ShutdownController;
use crate::AppState;
use hax_common::error::{HaxError, HaxResult};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

/// アドレスにバインドしてサーバーを起動し、シャットダウンまで待機する
pub async fn run(state: AppState, bind_addr: &str, shutdown: ShutdownController) -> HaxResult<()> {
    let listener = TcpListener::bind(bind_addr)
        .await
        .map_err(|err| HaxError::Internal(format!("Failed to bind to {bind_addr}: {err}")))?;

    serve(state, listener, shutdown).await
}

/// バインド済みリスナーでサーバーを起動する
pub async fn serve(
    state: AppState,
    listener: TcpListener,
    shutdown: ShutdownController,
) -> HaxResult<()> {
    let app = crate::api::create_app(state);

    if let Ok(addr) = listener.local_addr() {
        info!("Starting HTTP server on {}", addr);
    }

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal(shutdown))
    .await
    .map_err(|err| HaxError::Internal(format!("Server error: {err}")))?;

    info!("The http server has stopped");
    Ok(())
}

/// シャットダウンシグナルを待機
async fn shutdown_signal(shutdown: ShutdownController) {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            // ハンドラー登録に失敗した場合はコントローラーのみで停止する
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down...");
        }
        _ = shutdown.wait() => {
            info!("Shutdown requested, shutting down...");
        }
    }
}
