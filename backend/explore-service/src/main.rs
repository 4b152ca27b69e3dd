use actix_web::{middleware::Logger, web, App, HttpServer};
use explore_service::{configure_routes, metrics, Config, ExploreState};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("ERROR: Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{},actix_web=info", config.app.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting explore-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    let explore_state = match ExploreState::from_config(&config.explore) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Invalid explore configuration: {:#}", e);
            return Err(io::Error::new(io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    tracing::info!(
        pair_threshold = explore_state.engine.pair_threshold(),
        breakpoint_sm = explore_state.breakpoints.small(),
        breakpoint_lg = explore_state.breakpoints.large(),
        max_posts = explore_state.max_posts,
        "Explore layout configured"
    );

    let explore_data = web::Data::new(explore_state);
    let bind_address = (config.app.host.clone(), config.app.port);

    tracing::info!("HTTP server listening on {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .app_data(explore_data.clone())
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .route("/metrics", web::get().to(metrics::serve_metrics))
            .configure(configure_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}
