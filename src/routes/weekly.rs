use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use time::{Date, OffsetDateTime};

use crate::menu::week::{business_week, format_menu_date, parse_menu_date};
use crate::menu::DayMenu;
use crate::queries;
use crate::routes::menu_api::fetch_day_menu;
use crate::routes::AppState;
use crate::template::{filters, Template, SUPPORTED_LANGUAGES};

#[derive(Debug, Deserialize)]
pub struct WeeklyQuery {
    // `lang` is handled by the Template extractor
    pub date: Option<String>,
}

#[derive(askama::Template)]
#[template(path = "weekly.html")]
pub struct WeeklyTemplate {
    pub language: String,
    pub languages: Vec<LanguageLink>,
    pub days: Vec<DayView>,
}

pub struct LanguageLink {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

pub struct DayView {
    pub date: String,
    pub weekday: String,
    pub display_date: String,
    pub is_today: bool,
    pub menu: DayMenu,
}

/// GET / - weekly menu page
///
/// Composes five business days starting at the `date` anchor (today by
/// default; weekend anchors realign to Monday). Each day is fetched
/// independently and a failed day degrades to an empty placeholder, so a
/// single bad date never takes the page down.
#[tracing::instrument(skip(template, state))]
pub async fn page(
    template: Template,
    State(state): State<AppState>,
    Query(query): Query<WeeklyQuery>,
) -> impl IntoResponse {
    let language = template.language.clone();
    let today = OffsetDateTime::now_utc().date();

    let anchor = query
        .date
        .as_deref()
        .and_then(parse_menu_date)
        .unwrap_or(today);

    let mut days = Vec::with_capacity(5);
    for date in business_week(anchor) {
        let date_str = format_menu_date(date);

        let menu = match fetch_day_menu(&state, &date_str, &language).await {
            Ok(menu) => menu,
            Err(err) => {
                tracing::warn!(date = %date_str, error = %err, "day lookup failed, using empty placeholder");
                DayMenu::empty(&date_str, &language)
            }
        };

        days.push(day_view(date, &date_str, today, menu));
    }

    if days.iter().all(|day| day.menu.is_empty()) {
        if let Ok(Some(latest)) = queries::menu::latest_menu_date(&state.pool).await {
            tracing::info!(latest = %latest, "no menu rows for requested week");
        }
    }

    let languages = language_links(&language, query.date.as_deref());

    template.render(WeeklyTemplate {
        language,
        languages,
        days,
    })
}

fn day_view(date: Date, date_str: &str, today: Date, menu: DayMenu) -> DayView {
    DayView {
        date: date_str.to_string(),
        weekday: date.weekday().to_string(),
        display_date: format!("{:02}.{:02}", date.month() as u8, date.day()),
        is_today: date == today,
        menu,
    }
}

fn language_links(current: &str, anchor: Option<&str>) -> Vec<LanguageLink> {
    SUPPORTED_LANGUAGES
        .iter()
        .map(|&(code, label)| {
            let href = match anchor {
                Some(date) => format!("/?lang={code}&date={date}"),
                None => format!("/?lang={code}"),
            };
            LanguageLink {
                label,
                href,
                active: code == current,
            }
        })
        .collect()
}
