use dotenvy::dotenv;
use server::errors::StartupError;
use tracing::{error, info};
use uuid::Uuid;

fn main() -> std::process::ExitCode {
    dotenv().ok();

    let cfg = configs::AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()));
    let format = cfg.as_ref().map(|c| c.logging.format.as_str()).unwrap_or("compact");
    common::utils::logging::init_logging(format);
    info!(service = "contact-api", event = "logger_init", format, "tracing subscriber initialized");

    let cfg = match cfg {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = "contact-api", event = "config_invalid", error = %e, "cannot start");
            return std::process::ExitCode::FAILURE;
        }
    };

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(service = "contact-api", event = "panic", %service_id, pid, message = %info, "unhandled panic occurred");
    }));

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = cfg.server.worker_threads {
        builder.worker_threads(w);
    }
    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "contact-api", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "contact-api",
        event = "start",
        %service_id,
        pid,
        version,
        threads = cfg.server.worker_threads.unwrap_or_default(),
        "server starting"
    );

    rt.block_on(async move {
        // run() returns after Ctrl+C once in-flight requests drain
        match tokio::spawn(server::run(cfg)).await {
            Ok(Ok(())) => {
                info!(service = "contact-api", event = "stop", %service_id, pid, "server stopped normally");
                std::process::ExitCode::SUCCESS
            }
            Ok(Err(e)) => {
                error!(service = "contact-api", event = "run_failed", error = %e, "server::run returned error");
                std::process::ExitCode::FAILURE
            }
            Err(e) => {
                error!(service = "contact-api", event = "task_join_error", error = %e, "server task join error");
                std::process::ExitCode::FAILURE
            }
        }
    })
}
