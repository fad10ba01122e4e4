use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing_subscriber::EnvFilter;

use crate::{
    model::{menu::MealType, user::Role},
    server::{
        config::Config,
        data::{inventory::InventoryRepository, menu_item::MenuItemRepository, user::UserRepository},
        error::AppError,
        model::{
            inventory::CreateInventoryParams,
            menu::{CreateMenuItemParams, RecipeLine},
            user::CreateUserParams,
        },
        service::password::PasswordHasher,
    },
};

const DEMO_PASSWORD: &str = "password123";

/// Installs the global tracing subscriber.
///
/// Filtering follows `RUST_LOG` and falls back to `info` when it is unset or invalid.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then runs
/// all pending SeaORM migrations so the schema is current before any request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Fills an empty database with demo accounts, stock and a dish.
///
/// Creates an admin, a cook and a student (all with password `password123`), flour and
/// cheese stock, and a pizza on today's lunch menu whose recipe uses both. Does nothing
/// when any user already exists.
///
/// # Returns
/// - `Ok(true)` - Demo data was inserted
/// - `Ok(false)` - Database already had users
/// - `Err(AppError)` - Hashing or a database write failed; nothing is persisted
pub async fn seed_demo_data(
    db: &DatabaseConnection,
    hasher: &PasswordHasher,
) -> Result<bool, AppError> {
    if UserRepository::new(db).any_exist().await? {
        return Ok(false);
    }

    let password_hash = hasher.hash(DEMO_PASSWORD)?;
    let txn = db.begin().await?;

    let user_repo = UserRepository::new(&txn);
    for (username, role, food_preferences, balance) in [
        ("admin", Role::Admin, None, 0.0),
        ("cook", Role::Cook, None, 0.0),
        ("student", Role::Student, Some("аллергия на орехи"), 1000.0),
    ] {
        user_repo
            .create(CreateUserParams {
                username: username.to_string(),
                password_hash: password_hash.clone(),
                email: None,
                role,
                food_preferences: food_preferences.map(str::to_string),
                balance,
            })
            .await?;
    }

    let inventory_repo = InventoryRepository::new(&txn);
    let flour = inventory_repo
        .create(CreateInventoryParams {
            product_name: "Мука".to_string(),
            quantity: 10.0,
            unit: "кг".to_string(),
        })
        .await?;
    let cheese = inventory_repo
        .create(CreateInventoryParams {
            product_name: "Сыр".to_string(),
            quantity: 5.0,
            unit: "кг".to_string(),
        })
        .await?;

    MenuItemRepository::new(&txn)
        .create(CreateMenuItemParams {
            name: "Пицца".to_string(),
            description: Some("Вкусная пицца, содержит сыр и муку. Без орехов.".to_string()),
            price: 70.0,
            meal_type: MealType::Lunch,
            date: Utc::now().date_naive(),
            is_available: true,
            ingredients: vec![
                RecipeLine {
                    inventory_id: flour.id,
                    quantity_required: 0.2,
                },
                RecipeLine {
                    inventory_id: cheese.id,
                    quantity_required: 0.1,
                },
            ],
        })
        .await?;

    txn.commit().await?;

    tracing::info!("Seeded demo data (admin, cook, student; password '{DEMO_PASSWORD}')");

    Ok(true)
}
