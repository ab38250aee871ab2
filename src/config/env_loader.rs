use crate::config::model::Config;
use crate::eventos::model::Category;
use itertools::Itertools;
use std::env;
use std::str::FromStr;
use strum::IntoEnumIterator;

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

pub fn load_config() -> Config {
    let api_base_url =
        env::var("EVENTOS_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
    let category_filter = load_category_config("EVENTOS_FILTRO_CATEGORIA");

    Config {
        api_base_url,
        category_filter,
    }
}

fn load_category_config(name: &str) -> Option<Category> {
    match env::var(name) {
        Ok(value) => Some(Category::from_str(&value.to_lowercase()).unwrap_or_else(|_| {
            panic!(
                "Invalid config '{}'. Expected one of: {}",
                name,
                Category::iter()
                    .map(|category| <&'static str>::from(category))
                    .join(", ")
            )
        })),
        Err(_) => None,
    }
}
