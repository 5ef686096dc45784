//! HTTP server lifecycle - explicit start and stop.

use std::io;
use std::net::SocketAddr;

use actix_rt::task::JoinHandle;
use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use crate::config::AppConfig;
use crate::handlers;
use crate::observability::RequestIdMiddleware;
use crate::state::AppState;

/// A started server. Pass it to [`close_server`] to shut it down.
pub struct RunningServer {
    addr: SocketAddr,
    handle: ServerHandle,
    task: JoinHandle<io::Result<()>>,
}

impl RunningServer {
    /// The address the server is listening on.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

/// Bind `config.host:config.port` and start serving in the background.
///
/// Port `0` picks a free port; read it back from [`RunningServer::addr`].
/// Must be called from within an actix system.
pub fn run_server(config: &AppConfig, state: AppState) -> io::Result<RunningServer> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .disable_signals()
    .bind((config.host.as_str(), config.port))?;

    let addr = server
        .addrs()
        .first()
        .copied()
        .ok_or_else(|| io::Error::other("server bound no address"))?;

    let server = server.run();
    let handle = server.handle();
    let task = actix_rt::spawn(server);

    tracing::info!(%addr, "Your app is listening on port {}", addr.port());

    Ok(RunningServer { addr, handle, task })
}

/// Gracefully stop a server started by [`run_server`].
pub async fn close_server(server: RunningServer) -> io::Result<()> {
    tracing::info!("Closing server");
    server.handle.stop(true).await;
    server.task.await.map_err(io::Error::other)?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_start_serve_and_stop() {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            database: None,
        };

        let server = run_server(&config, AppState::in_memory()).unwrap();
        let base = format!("http://{}", server.addr());

        let res = reqwest::get(format!("{base}/posts")).await.unwrap();
        assert_eq!(res.status(), reqwest::StatusCode::OK);
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body, serde_json::json!({ "blogPost": [] }));

        close_server(server).await.unwrap();
        assert!(reqwest::get(format!("{base}/posts")).await.is_err());
    }
}
