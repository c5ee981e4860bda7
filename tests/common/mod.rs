use axum::Router;
use cafeteria_menu::config::{Config, DatabaseConfig, MenuConfig, ObservabilityConfig, ServerConfig};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

pub async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .unwrap();

    sqlx::migrate!("./migrations").run(&pool).await.unwrap();

    pool
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        menu: MenuConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub fn create_test_app(pool: SqlitePool) -> Router {
    cafeteria_menu::create_app(pool, test_config())
}

pub async fn insert_main(
    pool: &SqlitePool,
    date: &str,
    meal_type: &str,
    corner: &str,
    corner_name: &str,
    name: &str,
) -> i64 {
    sqlx::query(
        "INSERT INTO main_menu (date, meal_type, meal_time, corner, corner_name, main_menu)
         VALUES (?, ?, '1120~1300', ?, ?, ?)",
    )
    .bind(date)
    .bind(meal_type)
    .bind(corner)
    .bind(corner_name)
    .bind(name)
    .execute(pool)
    .await
    .unwrap()
    .last_insert_rowid()
}

pub async fn insert_sub(pool: &SqlitePool, main_menu_id: i64, name: &str) -> i64 {
    sqlx::query("INSERT INTO sub_menu (main_menu_id, menu_name) VALUES (?, ?)")
        .bind(main_menu_id)
        .bind(name)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn insert_translation(
    pool: &SqlitePool,
    menu_id: i64,
    language: &str,
    translated_name: &str,
    description: &str,
) {
    sqlx::query(
        "INSERT INTO menu_translations (menu_id, language, translated_name, description, created_at)
         VALUES (?, ?, ?, ?, datetime('now'))",
    )
    .bind(menu_id)
    .bind(language)
    .bind(translated_name)
    .bind(description)
    .execute(pool)
    .await
    .unwrap();
}
