use actix_web::{web, App, HttpResponse, HttpServer};
use hospitality::config::{Config, LogFormat};
use hospitality::middleware::RequestId;
use hospitality::persistence::Store;
use hospitality::modules;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;
    config.validate()?;

    init_tracing(&config);

    tracing::info!("Starting hospitality catalogue service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let store = config.database.connect().await?;
    tracing::info!(backend = store.backend(), "Persistence store ready");

    let bind_address = config.server.bind_address();
    let store = web::Data::new(store);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .app_data(store.clone())
            .route("/health", web::get().to(health_check))
            .configure(modules::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("hospitality={},actix_web=info", config.app.log_level).into()
    });
    let registry = tracing_subscriber::registry().with(filter);

    match config.app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn health_check(store: web::Data<Store>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "hospitality",
        "store": store.backend(),
    }))
}
