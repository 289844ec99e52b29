// every addon route hangs off `/mfp/{proxy}/PSW/{password}/...`, and since the proxy url is
// allowed to contain raw slashes axum can't match it as a normal segment. One wildcard route
// catches all of it and the extractor does the splitting.
use axum::{
    Json, Router,
    extract::Query,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::server::{
    dtos::manifest_dto::{CATALOG_ID, Manifest},
    error::{AppResult, Error},
    extractors::{AddonRequest, AddonResource},
    services::catalog_services,
};

#[derive(Deserialize)]
struct CatalogQuery {
    genre: Option<String>,
}

pub struct AddonController;

impl AddonController {
    pub fn app() -> Router {
        Router::new().route("/mfp/{*path}", get(Self::addon_get))
    }

    async fn addon_get(
        AddonRequest {
            credentials,
            resource,
            services,
        }: AddonRequest,
        Query(query): Query<CatalogQuery>,
    ) -> AppResult<Response> {
        match resource {
            AddonResource::Manifest => Ok(Json(Manifest::italian_channels()).into_response()),
            AddonResource::Catalog {
                catalog_id,
                search,
                genre,
            } => {
                if catalog_id != CATALOG_ID {
                    return Err(Error::NotFound(format!("unknown catalog {}", catalog_id)));
                }

                // a genre in the path extra wins over ?genre=
                let genre = genre.or_else(|| query.genre.filter(|g| !g.is_empty()));

                let channels = services
                    .channels
                    .get_channels(&credentials.proxy_url, &credentials.password)
                    .await;

                let response = catalog_services::catalog_listing(
                    &channels,
                    search.as_deref(),
                    genre.as_deref(),
                );
                info!(
                    "catalog (search={:?}, genre={:?}) -> {} of {} channels",
                    search,
                    genre,
                    response.metas.len(),
                    channels.len()
                );

                Ok(Json(response).into_response())
            }
            AddonResource::Stream { channel_id } => {
                let channels = services
                    .channels
                    .get_channels(&credentials.proxy_url, &credentials.password)
                    .await;

                let response = catalog_services::find_streams(&channels, &channel_id);
                debug!(
                    "stream lookup for {} found {} streams",
                    channel_id,
                    response.streams.len()
                );

                Ok(Json(response).into_response())
            }
            AddonResource::Meta { channel_id } => {
                let channels = services
                    .channels
                    .get_channels(&credentials.proxy_url, &credentials.password)
                    .await;

                let response = catalog_services::find_meta(&channels, &channel_id);
                debug!(
                    "meta lookup for {} found: {}",
                    channel_id,
                    response.meta.is_some()
                );

                Ok(Json(response).into_response())
            }
        }
    }
}
