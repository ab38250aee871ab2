use super::model::{Category, Event, Status};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;
use tracing::warn;

// Note: several String fields need the custom deserializer due to being optional
#[derive(Debug, Deserialize)]
pub struct EventoResponse {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub nombre: String,
    #[serde(default, deserialize_with = "deserialize_category")]
    pub categoria: Option<Category>,
    #[serde(default = "min_date", deserialize_with = "deserialize_date")]
    pub fecha: NaiveDate,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub descripcion: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub imagen: String,
    #[serde(deserialize_with = "deserialize_status")]
    pub estado: Status,
}

impl EventoResponse {
    pub fn to_model(&self) -> Event {
        Event::new(
            self.id.to_string(),
            self.nombre.to_string(),
            self.categoria,
            self.fecha,
            self.descripcion.to_string(),
            self.imagen.to_string(),
            self.estado,
        )
    }
}

fn min_date() -> NaiveDate {
    NaiveDate::MIN
}

fn deserialize_str<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

// json-server style backends serve ids as numbers or strings depending on
// how the record was created
fn deserialize_id<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        unknown => {
            warn!("Found an unknown id shape: {}", unknown);
            String::new()
        }
    })
}

fn deserialize_date<'de, D>(d: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(d)? {
        Value::String(s) => {
            if s.is_empty() {
                return Ok(NaiveDate::MIN);
            }

            Ok(
                NaiveDate::parse_from_str(&s, "%Y-%m-%d").unwrap_or_else(|err| {
                    warn!("Failed to parse date. Err: {err}");
                    NaiveDate::MIN
                }),
            )
        }
        _ => Ok(NaiveDate::MIN),
    }
}

fn deserialize_category<'de, D>(d: D) -> Result<Option<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) => {
            if s.is_empty() {
                None
            } else {
                Category::from_str(&s)
                    .inspect_err(|_| {
                        warn!("Unknown category '{}' (omitting category)", s);
                    })
                    .ok()
            }
        }
        _ => None,
    })
}

// An event of unrecognizable status must never end up visible
fn deserialize_status<'de, D>(d: D) -> Result<Status, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) if s == "activo" => Status::Activo,
        Value::String(s) if s == "inactivo" => Status::Inactivo,
        unknown => {
            warn!("Unknown status '{}' (treating as inactivo)", unknown);
            Status::Inactivo
        }
    })
}
