use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::menu::{self, week, DayMenu};
use crate::queries;
use crate::routes::AppState;

#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    pub lang: Option<String>,
}

/// GET /api/menu/{date}?lang=xx
///
/// Returns the categorized menu for one date. The date accepts `YYYYMMDD`
/// or `YYYY-MM-DD`; `lang` defaults to the base language. Unknown
/// language codes behave as "no translation found" and are not rejected.
#[tracing::instrument(skip(state))]
pub async fn get_menu(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Query(query): Query<MenuQuery>,
) -> Result<Json<DayMenu>, AppError> {
    let language = query
        .lang
        .unwrap_or_else(|| state.config.menu.base_language.clone());

    let date = week::parse_menu_date(&date).ok_or(AppError::InvalidDate(date))?;
    let date = week::format_menu_date(date);

    let menu = fetch_day_menu(&state, &date, &language).await?;

    Ok(Json(menu))
}

/// Fetch and aggregate one day's menu. Shared by the JSON endpoint and
/// the weekly page; the store round trip stays here so the aggregator
/// itself remains a pure function over rows.
pub(crate) async fn fetch_day_menu(
    state: &AppState,
    date: &str,
    language: &str,
) -> Result<DayMenu, AppError> {
    let main_rows = queries::menu::fetch_main_rows(&state.pool, date, language).await?;
    let sub_rows = queries::menu::fetch_sub_rows(&state.pool, date, language).await?;

    Ok(menu::aggregate(
        date,
        language,
        &state.config.menu.base_language,
        &main_rows,
        &sub_rows,
    ))
}
