//! Keyword classification of raw menu rows
//!
//! Upstream labels are free text in mixed Korean/English, so rows are
//! bucketed by case-insensitive substring matching against an ordered
//! rule table. First matching rule wins; a row matching nothing is
//! dropped from the menu entirely.

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Dessert,
    Salad,
    Lunch,
    Dinner,
}

/// Which labels of a row a rule inspects.
#[derive(Debug, Clone, Copy)]
pub enum Field {
    Corner,
    CornerOrName,
    MealType,
}

pub struct Rule {
    pub category: Category,
    pub field: Field,
    pub keywords: &'static [&'static str],
}

/// Evaluated top to bottom; dessert and salad take precedence so a
/// dessert corner inside the lunch service doesn't land in the lunch list.
pub const RULES: [Rule; 4] = [
    Rule {
        category: Category::Dessert,
        field: Field::Corner,
        keywords: &["후식", "디저트", "dessert"],
    },
    Rule {
        category: Category::Salad,
        field: Field::CornerOrName,
        keywords: &["샐러드", "salad"],
    },
    Rule {
        category: Category::Lunch,
        field: Field::MealType,
        keywords: &["중식", "lunch"],
    },
    Rule {
        category: Category::Dinner,
        field: Field::MealType,
        keywords: &["석식", "dinner"],
    },
];

/// Classify one main row by its meal type, corner label and display name.
pub fn classify(meal_type: &str, corner_name: &str, display_name: &str) -> Option<Category> {
    let meal_type = meal_type.to_lowercase();
    let corner_name = corner_name.to_lowercase();
    let display_name = display_name.to_lowercase();

    RULES
        .iter()
        .find(|rule| {
            let haystacks: &[&str] = match rule.field {
                Field::Corner => &[&corner_name],
                Field::CornerOrName => &[&corner_name, &display_name],
                Field::MealType => &[&meal_type],
            };

            rule.keywords
                .iter()
                .any(|keyword| haystacks.iter().any(|label| label.contains(keyword)))
        })
        .map(|rule| rule.category)
}
