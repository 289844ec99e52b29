use serde::Serialize;

use crate::database::channel::CHANNEL_ID_PREFIX;

pub const ADDON_ID: &str = "org.stremio.italian.channels";
pub const CATALOG_ID: &str = "italian_channels";
pub const CONTENT_TYPE_TV: &str = "tv";
const ADDON_LOGO: &str = "https://i.imgur.com/3Tv3KQ1.png";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub id: &'static str,
    pub version: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub types: Vec<&'static str>,
    pub catalogs: Vec<ManifestCatalog>,
    pub resources: Vec<&'static str>,
    pub id_prefixes: Vec<&'static str>,
    pub logo: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ManifestCatalog {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub extra: Vec<ManifestExtra>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestExtra {
    pub name: &'static str,
    pub is_required: bool,
}

impl Manifest {
    /// the descriptor never changes, proxy url and password only live in the path it's served on
    pub fn italian_channels() -> Self {
        Self {
            id: ADDON_ID,
            version: env!("CARGO_PKG_VERSION"),
            name: "Italian Channels",
            description: "Catalogo IPTV Italiano per Stremio",
            types: vec![CONTENT_TYPE_TV],
            catalogs: vec![ManifestCatalog {
                id: CATALOG_ID,
                name: "Italian IPTV",
                kind: CONTENT_TYPE_TV,
                extra: vec![
                    ManifestExtra {
                        name: "search",
                        is_required: false,
                    },
                    ManifestExtra {
                        name: "genre",
                        is_required: false,
                    },
                ],
            }],
            resources: vec!["catalog", "stream", "meta"],
            id_prefixes: vec![CHANNEL_ID_PREFIX],
            logo: ADDON_LOGO,
        }
    }
}
