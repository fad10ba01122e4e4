mod model;
mod server;

use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{
    config::Config,
    error::AppError,
    router::router,
    service::{password::PasswordHasher, token::TokenService},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let hasher = PasswordHasher::new(config.bcrypt_cost);
    let tokens = TokenService::new(&config.jwt_secret, config.token_ttl_minutes);

    if config.seed_demo_data {
        startup::seed_demo_data(&db, &hasher).await?;
    }

    let app = router()
        .with_state(AppState::new(db, tokens, hasher, config.registration_bonus))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
