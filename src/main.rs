use axum::routing::get;
use axum::Router;
use lobby_relay::config::ServerConfig;
use lobby_relay::relay::{run_relay, RelayBroadcast, RelayCommand};
use lobby_relay::ws::{ws_handler, AppState};
use tokio::sync::{broadcast, mpsc};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env();

    // Validate configuration before starting
    if let Err(e) = config.validate() {
        eprintln!("Invalid server configuration: {}", e);
        std::process::exit(1);
    }

    let (relay_tx, relay_rx) = mpsc::channel::<RelayCommand>(config.command_channel_capacity);
    let (broadcast_tx, _) = broadcast::channel::<RelayBroadcast>(config.broadcast_channel_capacity);

    // Spawn the relay loop
    let bc_tx = broadcast_tx.clone();
    tokio::spawn(async move {
        run_relay(relay_rx, bc_tx).await;
    });

    // Axum app: lobby channel plus the game's static pages
    let app_state = AppState {
        relay_tx,
        broadcast_tx,
    };
    let app = Router::new()
        .route("/ws", get(ws_handler))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    tracing::info!("Starting lobby relay on {}", config.listen_addr);
    println!("Lobby relay listening on {}", config.listen_addr);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .unwrap();
    axum::serve(listener, app).await.unwrap();
}
