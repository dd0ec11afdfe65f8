use std::process::ExitCode;

use configs::AppConfig;
use tracing::{error, info};
use uuid::Uuid;

fn main() -> ExitCode {
    // .env first so RUST_LOG, LOG_FORMAT and DATABASE_URL take effect
    dotenvy::dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let instance_id = Uuid::new_v4();
    std::panic::set_hook(Box::new(move |info| {
        error!(event = "panic", %instance_id, message = %info, "unhandled panic occurred");
    }));

    let cfg = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(event = "config_invalid", error = %e, "refusing to start");
            return ExitCode::FAILURE;
        }
    };

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = cfg.server.worker_threads {
        builder.worker_threads(w);
    }
    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        event = "start",
        %instance_id,
        version = env!("CARGO_PKG_VERSION"),
        threads = cfg.server.worker_threads.unwrap_or_default(),
        "stock manager starting"
    );
    match rt.block_on(server::run(cfg)) {
        Ok(()) => {
            info!(event = "stop", %instance_id, "stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(event = "run_failed", error = %e, "server exited with error");
            ExitCode::FAILURE
        }
    }
}
