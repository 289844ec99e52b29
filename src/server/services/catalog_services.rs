// shapes the channel list into the catalog/stream/meta payloads, everything here is pure so the
// controller just fetches and hands the list over
use crate::{
    database::channel::Channel,
    server::dtos::{
        catalog_dto::{
            MetaDetail, MetaPreview, MetaResponse, MetaStream, MetasResponse, StreamItem,
            StreamsResponse,
        },
        manifest_dto::CONTENT_TYPE_TV,
    },
};

const META_BACKGROUND: &str =
    "https://raw.githubusercontent.com/pinktree111/ittv/refs/heads/main/bg.jpg";
const CHANNEL_NOT_FOUND: &str = "Canale non trovato";

fn preview(channel: &Channel) -> MetaPreview {
    MetaPreview {
        id: channel.id.clone(),
        name: channel.name.clone(),
        kind: CONTENT_TYPE_TV.to_string(),
        poster: channel.poster.clone(),
        genres: channel.genres.clone(),
    }
}

fn matches_genre(channel: &Channel, genre: &str) -> bool {
    genre.is_empty()
        || channel
            .genres
            .iter()
            .any(|g| g.to_lowercase().contains(genre))
}

fn matches_search(channel: &Channel, query: &str) -> bool {
    channel.name.to_lowercase().contains(query)
}

/// an empty genre means no filter, otherwise any tag containing it (case insensitive) matches
pub fn catalog_metas(channels: &[Channel], genre: Option<&str>) -> MetasResponse {
    catalog_listing(channels, None, genre)
}

/// case insensitive substring of the name, empty query returns everything
pub fn search_metas(channels: &[Channel], query: &str) -> MetasResponse {
    catalog_listing(channels, Some(query), None)
}

/// both filters at once, for clients that send `search=...&genre=...` in one extra
pub fn catalog_listing(
    channels: &[Channel],
    search: Option<&str>,
    genre: Option<&str>,
) -> MetasResponse {
    let query = search.unwrap_or("").to_lowercase();
    let genre = genre.unwrap_or("").to_lowercase();

    let metas = channels
        .iter()
        .filter(|ch| matches_search(ch, &query) && matches_genre(ch, &genre))
        .map(preview)
        .collect();

    MetasResponse { metas }
}

pub fn find_streams(channels: &[Channel], channel_id: &str) -> StreamsResponse {
    let streams = channels
        .iter()
        .find(|ch| ch.id == channel_id)
        .map(|ch| {
            vec![StreamItem {
                url: ch.url.clone(),
                title: ch.name.clone(),
            }]
        })
        .unwrap_or_default();

    StreamsResponse { streams }
}

pub fn find_meta(channels: &[Channel], channel_id: &str) -> MetaResponse {
    match channels.iter().find(|ch| ch.id == channel_id) {
        Some(ch) => MetaResponse {
            error: None,
            meta: Some(MetaDetail {
                id: ch.id.clone(),
                name: ch.name.clone(),
                kind: CONTENT_TYPE_TV.to_string(),
                poster: ch.poster.clone(),
                background: META_BACKGROUND.to_string(),
                logo: ch.poster.clone(),
                description: format!("Guarda {} in streaming su Stremio.", ch.name),
                genres: ch.genres.clone(),
                streams: vec![MetaStream {
                    url: ch.url.clone(),
                }],
            }),
        },
        None => MetaResponse {
            error: Some(CHANNEL_NOT_FOUND.to_string()),
            meta: None,
        },
    }
}
