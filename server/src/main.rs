mod db;
mod error;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let pool = db::init_pool(&database_url)
        .await
        .expect("database init failed");

    // All shared handles (health store, realtime hub) are built here,
    // before the router exists, so no handler can ever observe an
    // uninitialized one.
    let monitor = services::monitor::load_config();
    tracing::info!(targets = monitor.targets.len(), "monitor configured");
    let state = state::AppState::new(pool, monitor);

    // Spawn the background health-probe task.
    let _monitor = services::monitor::spawn_monitor_task(state.clone());

    let app = routes::leptos_app(state).expect("router assembly failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "pulseboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
