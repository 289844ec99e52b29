use serde::{Deserialize, Deserializer};

/// one entry of the https://vavoo.to/channels response
///
/// the upstream isn't ours and changes whenever it feels like it, so every field is optional and
/// gets defaulted instead of failing the whole list. An entry without an id is useless to us and
/// gets dropped by the fetcher.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamChannel {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// what actually gets handed to the catalog/stream/meta endpoints, built fresh per request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub id: String,
    pub name: String,
    pub url: String,
    pub poster: String,
    pub genres: Vec<String>,
}

pub const CHANNEL_ID_PREFIX: &str = "tv:";

impl Channel {
    pub fn id_for(upstream_id: &str) -> String {
        format!("{}{}", CHANNEL_ID_PREFIX, upstream_id)
    }
}

// ids have shown up as both "12345" and 12345 so take either
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;

    Ok(match value {
        Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
