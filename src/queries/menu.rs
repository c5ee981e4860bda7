//! Read queries against the menu store
//!
//! Both queries join the translation overlay for the requested language;
//! rows without a translation come back with NULL overlay columns and the
//! aggregator handles the fallback. Ordering follows insertion order so
//! the output lists are stable.

use crate::menu::{MainMenuRow, SubMenuRow};
use sqlx::SqlitePool;

/// All main menu rows for one date, with the translation overlay joined.
pub async fn fetch_main_rows(
    pool: &SqlitePool,
    date: &str,
    language: &str,
) -> Result<Vec<MainMenuRow>, sqlx::Error> {
    sqlx::query_as::<_, MainMenuRow>(
        "SELECT m.id, m.main_menu AS name, m.meal_type, m.corner_name,
                t.translated_name, t.description
         FROM main_menu m
         LEFT JOIN menu_translations t ON m.id = t.menu_id AND t.language = ?
         WHERE m.date = ?
         ORDER BY m.id",
    )
    .bind(language)
    .bind(date)
    .fetch_all(pool)
    .await
}

/// All sub menu rows owned by the date's main rows.
pub async fn fetch_sub_rows(
    pool: &SqlitePool,
    date: &str,
    language: &str,
) -> Result<Vec<SubMenuRow>, sqlx::Error> {
    sqlx::query_as::<_, SubMenuRow>(
        "SELECT s.id, s.menu_name AS name, s.main_menu_id, t.translated_name
         FROM sub_menu s
         LEFT JOIN menu_translations t ON s.id = t.menu_id AND t.language = ?
         WHERE s.main_menu_id IN (SELECT id FROM main_menu WHERE date = ?)
         ORDER BY s.id",
    )
    .bind(language)
    .bind(date)
    .fetch_all(pool)
    .await
}

/// Most recent date with any menu rows, if the store has data at all.
pub async fn latest_menu_date(pool: &SqlitePool) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar("SELECT MAX(date) FROM main_menu")
        .fetch_one(pool)
        .await
}
