use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use dotenv::dotenv;
use log::info;

use sf_core::services::auth::AuthService;
use sf_core::services::token::{
    KeyStore, TokenCleanupConfig, TokenCleanupService, TokenCodec, TokenConfig,
};
use sf_infra::database::{create_pool, DatabaseConfig, MySqlTokenRepository, MySqlUserRepository};

use sf_api::config::ServerConfig;
use sf_api::middleware::{cors, CookieAuth};
use sf_api::routes::auth::{login, logout, refresh, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Storefront API server");

    let server_config = ServerConfig::from_env();
    let token_config = TokenConfig::from_env();
    let database_config = DatabaseConfig::from_env();

    let pool = create_pool(&database_config)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    // Key material is loaded once; a failure here is fatal to startup
    let keys = KeyStore::from_files(&token_config.private_key_path, &token_config.public_key_path)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
    let codec = Arc::new(TokenCodec::new(
        keys,
        &token_config.issuer,
        &token_config.audience,
    ));

    let user_repository = Arc::new(MySqlUserRepository::new(pool.clone()));
    let token_repository = Arc::new(MySqlTokenRepository::new(pool));

    let auth_service = Arc::new(AuthService::new(
        user_repository.clone(),
        token_repository.clone(),
        codec.clone(),
        token_config,
    ));

    // Hourly sweep of expired refresh token records
    let cleanup = Arc::new(TokenCleanupService::new(
        token_repository,
        TokenCleanupConfig::default(),
    ));
    cleanup.start_background_task();

    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    let app_state = web::Data::new(AppState { auth_service });

    HttpServer::new(move || {
        let cors = cors::create_cors();
        let auth_guard = CookieAuth::new(codec.clone(), user_repository.clone());

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(app_state.clone())
            .route("/health", web::get().to(health_check))
            .service(
                web::scope("/api/v1/auth")
                    .route(
                        "/login",
                        web::post()
                            .to(login::login::<MySqlUserRepository, MySqlTokenRepository>),
                    )
                    .route(
                        "/refresh",
                        web::post()
                            .to(refresh::refresh::<MySqlUserRepository, MySqlTokenRepository>),
                    )
                    .service(
                        web::resource("/logout").wrap(auth_guard).route(
                            web::post()
                                .to(logout::logout::<MySqlUserRepository, MySqlTokenRepository>),
                        ),
                    ),
            )
            .default_service(web::route().to(not_found))
    })
    .bind(&bind_address)?
    .run()
    .await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "storefront-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "NOT_FOUND",
        "message": "The requested resource was not found"
    }))
}
