use serde::Serialize;

/// Main menu row for one date, with the translation overlay for the
/// requested language already joined in (NULL when no translation exists).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MainMenuRow {
    pub id: i64,
    pub name: Option<String>,
    pub meal_type: Option<String>,
    pub corner_name: Option<String>,
    pub translated_name: Option<String>,
    pub description: Option<String>,
}

/// Sub menu row belonging to one of the date's main rows.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SubMenuRow {
    pub id: i64,
    pub name: Option<String>,
    pub main_menu_id: i64,
    pub translated_name: Option<String>,
}

/// One categorized menu entry as served to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub meal_type: String,
    pub corner_name: String,
    pub description: String,
    pub sub_menus: Vec<String>,
}

/// Categorized menu for one (date, language) pair.
///
/// Lunch and dinner keep every matching row in store order; dessert and
/// salad are singletons merged across duplicate rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayMenu {
    pub date: String,
    pub language: String,
    pub lunch: Vec<MenuItem>,
    pub dinner: Vec<MenuItem>,
    pub dessert: Option<MenuItem>,
    pub salad: Option<MenuItem>,
}

impl DayMenu {
    pub fn empty(date: &str, language: &str) -> Self {
        Self {
            date: date.to_string(),
            language: language.to_string(),
            lunch: Vec::new(),
            dinner: Vec::new(),
            dessert: None,
            salad: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lunch.is_empty()
            && self.dinner.is_empty()
            && self.dessert.is_none()
            && self.salad.is_none()
    }
}
