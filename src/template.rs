use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{Html, IntoResponse, Response},
};
use std::{collections::HashMap, convert::Infallible};

/// Display languages offered by the weekly page, with their native labels.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("ko", "한국어"),
    ("en", "English"),
    ("zh", "中文"),
    ("sv", "Svenska"),
];

pub(crate) mod filters {
    #[askama::filter_fn]
    pub fn t(value: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let language = askama::get_value::<String>(values, "language")
            .expect("Unable to get language from askama::get_value");

        Ok(rust_i18n::t!(value, locale = language).to_string())
    }
}

/// Renders askama templates with the request's resolved display language
/// injected into the template values, so the `t` filter can localize
/// labels without every template carrying a language field.
pub struct Template {
    pub language: String,
}

impl Template {
    fn render_with_values<T: askama::Template>(&self, template: T) -> Result<String, askama::Error> {
        let mut values: HashMap<&str, Box<dyn std::any::Any>> = HashMap::new();
        values.insert("language", Box::new(self.language.to_owned()));

        template.render_with_values(&values)
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match self.render_with_values(template) {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template. Error: {err}"),
            )
                .into_response(),
        }
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        let requested = parts.uri.query().and_then(lang_from_query);

        // An unsupported code falls back to the base language; the menu
        // content itself would behave as "no translation found" anyway.
        let language = requested
            .filter(|lang| SUPPORTED_LANGUAGES.iter().any(|(code, _)| code == lang))
            .unwrap_or_else(|| state.config.menu.base_language.clone());

        Ok(Template { language })
    }
}

fn lang_from_query(query: &str) -> Option<String> {
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("lang="))
        .map(|value| value.to_string())
}
