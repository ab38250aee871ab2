use crate::eventos::model::Category;

#[derive(Debug)]
pub struct Config {
    pub api_base_url: String,
    pub category_filter: Option<Category>,
}
