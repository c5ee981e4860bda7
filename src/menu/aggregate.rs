use super::classify::{classify, Category};
use super::model::{DayMenu, MainMenuRow, MenuItem, SubMenuRow};

/// Resolve the display name for one row.
///
/// The base language always uses the raw name. Any other language uses
/// the translation when one exists, falling back to the raw name.
fn resolve_name(language: &str, base_language: &str, raw: &str, translated: Option<&str>) -> String {
    if language == base_language {
        return raw.to_string();
    }

    translated
        .filter(|name| !name.is_empty())
        .unwrap_or(raw)
        .to_string()
}

/// Build the categorized menu for one (date, language) pair from raw rows.
///
/// Inputs are expected to be pre-filtered by date: `main_rows` are the
/// date's main menu rows, `sub_rows` the sub rows owned by them, both in
/// store return order. The function never touches the store and never
/// mutates its inputs.
pub fn aggregate(
    date: &str,
    language: &str,
    base_language: &str,
    main_rows: &[MainMenuRow],
    sub_rows: &[SubMenuRow],
) -> DayMenu {
    let resolved_subs: Vec<(i64, String)> = sub_rows
        .iter()
        .map(|row| {
            let name = resolve_name(
                language,
                base_language,
                row.name.as_deref().unwrap_or_default(),
                row.translated_name.as_deref(),
            );
            (row.main_menu_id, name)
        })
        .collect();

    let sub_menus_of = |main_id: i64| -> Vec<String> {
        resolved_subs
            .iter()
            .filter(|(owner, _)| *owner == main_id)
            .map(|(_, name)| name.clone())
            .collect()
    };

    let mut menu = DayMenu::empty(date, language);

    for row in main_rows {
        let name = resolve_name(
            language,
            base_language,
            row.name.as_deref().unwrap_or_default(),
            row.translated_name.as_deref(),
        );
        let meal_type = row.meal_type.clone().unwrap_or_default();
        let corner_name = row.corner_name.clone().unwrap_or_default();

        let Some(category) = classify(&meal_type, &corner_name, &name) else {
            tracing::debug!(id = row.id, name = %name, "menu row matched no category, dropped");
            continue;
        };

        let item = MenuItem {
            id: row.id,
            name,
            meal_type,
            corner_name,
            description: row.description.clone().unwrap_or_default(),
            sub_menus: sub_menus_of(row.id),
        };

        tracing::trace!(id = item.id, category = %category, "classified menu row");

        match category {
            Category::Lunch => menu.lunch.push(item),
            Category::Dinner => menu.dinner.push(item),
            Category::Dessert => merge_singleton(&mut menu.dessert, item),
            Category::Salad => merge_singleton(&mut menu.salad, item),
        }
    }

    menu
}

/// Singleton semantics for dessert/salad: the first row is canonical,
/// later rows only contribute their sub-items. The union keeps first-seen
/// order and drops duplicates, so complementary duplicate rows collapse
/// into one item.
fn merge_singleton(slot: &mut Option<MenuItem>, item: MenuItem) {
    match slot {
        None => *slot = Some(item),
        Some(existing) => {
            for sub in item.sub_menus {
                if !existing.sub_menus.contains(&sub) {
                    existing.sub_menus.push(sub);
                }
            }
        }
    }
}
