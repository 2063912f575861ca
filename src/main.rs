//! Tomato Timer - a Pomodoro countdown timer
//!
//! This is the main entry point for the tomato-timer application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use tomato_timer::{
    api::create_router,
    config::Config,
    display::terminal_clock_task,
    state::AppState,
    tasks::spawn_timer_task,
    timer::{Action, LONG_BREAK_MIN, REPS_PER_CYCLE, SHORT_BREAK_MIN, WORK_MIN},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so the clock face owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(format!("tomato_timer={},tower_http=info", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting tomato-timer v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Cycle: {} repetitions, work={}min, short break={}min, long break={}min",
        REPS_PER_CYCLE, WORK_MIN, SHORT_BREAK_MIN, LONG_BREAK_MIN
    );

    // Start the timer background task
    let timer = spawn_timer_task();

    if !config.no_clock {
        let snapshots = timer.subscribe();
        tokio::spawn(async move {
            terminal_clock_task(snapshots).await;
        });
    }

    let state = Arc::new(AppState::new(config.port, config.host.clone(), timer));

    if config.autostart {
        state.apply(Action::Start).await?;
    }

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start  - Start the next phase (resumes when paused)");
    info!("  POST /pause  - Pause the countdown");
    info!("  POST /resume - Resume a paused countdown");
    info!("  POST /reset  - Reset the timer and the cycle");
    info!("  GET  /status - Clock face and server status");
    info!("  GET  /health - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    state.apply(Action::Reset).await?;
    println!();
    info!("Server shutdown complete");
    Ok(())
}
