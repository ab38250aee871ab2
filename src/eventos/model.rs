use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub category: Option<Category>,
    pub date: NaiveDate,
    pub description: String,
    pub image_url: String,
    pub status: Status,
}

impl Event {
    pub fn new(
        id: String,
        name: String,
        category: Option<Category>,
        date: NaiveDate,
        description: String,
        image_url: String,
        status: Status,
    ) -> Self {
        Self {
            id,
            name,
            category,
            date,
            description,
            image_url,
            status,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == Status::Activo
    }
}

/// The API exposes categories as a closed set of lowercase Spanish names.
#[derive(strum::IntoStaticStr, strum::EnumString, strum::EnumIter, Debug, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Charlas,
    Teatro,
    Deportes,
    Culturales,
    Festivales,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    Activo,
    Inactivo,
}
