use serde::{Deserialize, Deserializer, Serialize};

use crate::entities::products;

/// A catalog item as stored and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i32,

    pub name: Option<String>,

    pub season: Option<String>,

    /// Either a path under the upload prefix or a caller-supplied URL.
    pub image_url: Option<String>,

    pub eng_description: Option<String>,

    pub thai_description: Option<String>,

    pub short_description: Option<String>,

    pub price: Option<f64>,

    pub caution: Option<String>,

    pub source: Option<String>,
}

impl From<products::Model> for Product {
    fn from(m: products::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            season: m.season,
            image_url: m.image_url,
            eng_description: m.eng_description,
            thai_description: m.thai_description,
            short_description: m.short_description,
            price: m.price,
            caution: m.caution,
            source: m.source,
        }
    }
}

/// The mutable fields of a product. Create and update both take the full set;
/// anything left as `None` is stored as NULL. Text fields take any JSON scalar
/// and keep its textual form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProductInput {
    #[serde(deserialize_with = "deserialize_text")]
    pub name: Option<String>,

    #[serde(deserialize_with = "deserialize_text")]
    pub season: Option<String>,

    #[serde(deserialize_with = "deserialize_text")]
    pub image_url: Option<String>,

    #[serde(deserialize_with = "deserialize_text")]
    pub eng_description: Option<String>,

    #[serde(deserialize_with = "deserialize_text")]
    pub thai_description: Option<String>,

    #[serde(deserialize_with = "deserialize_text")]
    pub short_description: Option<String>,

    #[serde(deserialize_with = "deserialize_price")]
    pub price: Option<f64>,

    #[serde(deserialize_with = "deserialize_text")]
    pub caution: Option<String>,

    #[serde(deserialize_with = "deserialize_text")]
    pub source: Option<String>,
}

impl ProductInput {
    /// Sets a text field by its wire name. Returns `false` for names that are
    /// not text fields of a product.
    pub fn set_text_field(&mut self, field: &str, value: String) -> bool {
        let slot = match field {
            "name" => &mut self.name,
            "season" => &mut self.season,
            "image_url" => &mut self.image_url,
            "eng_description" => &mut self.eng_description,
            "thai_description" => &mut self.thai_description,
            "short_description" => &mut self.short_description,
            "caution" => &mut self.caution,
            "source" => &mut self.source,
            _ => return false,
        };
        *slot = Some(value);
        true
    }

    #[must_use]
    pub fn with_image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url;
        self
    }
}

/// Parses a price from text. Blank input means "no price".
pub fn parse_price(raw: &str) -> Result<Option<f64>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .map(Some)
        .ok_or_else(|| format!("Invalid price: {raw}"))
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(f)) => f.to_string(),
            (None, None) => n.to_string(),
        }),
        Some(other) => Some(other.to_string()),
    })
}

// Form-style clients often send the price as a string.
fn deserialize_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(f64),
        Text(String),
    }

    match Option::<RawPrice>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawPrice::Number(n)) => Ok(Some(n)),
        Some(RawPrice::Text(s)) => parse_price(&s).map_err(serde::de::Error::custom),
    }
}
