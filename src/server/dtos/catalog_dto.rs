use serde::Serialize;

/// catalog and search listings
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetasResponse {
    pub metas: Vec<MetaPreview>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetaPreview {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub poster: String,
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StreamsResponse {
    pub streams: Vec<StreamItem>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StreamItem {
    pub url: String,
    pub title: String,
}

/// a miss is still a 200, it just carries `meta: null` and the error text
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetaResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub meta: Option<MetaDetail>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetaDetail {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub poster: String,
    pub background: String,
    pub logo: String,
    pub description: String,
    pub genres: Vec<String>,
    pub streams: Vec<MetaStream>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetaStream {
    pub url: String,
}
