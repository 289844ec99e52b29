use axum::Extension;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tracing::debug;

use crate::server::error::Error;
use crate::server::services::AddonServices;

const ADDON_PREFIX: &str = "/mfp/";
const PASSWORD_MARKER: &str = "/PSW/";

/// the proxy settings the user baked into the manifest url
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyCredentials {
    pub proxy_url: String,
    pub password: String,
}

/// what's being asked for after `/mfp/{proxy}/PSW/{password}/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddonResource {
    Manifest,
    Catalog {
        catalog_id: String,
        search: Option<String>,
        genre: Option<String>,
    },
    Stream {
        channel_id: String,
    },
    Meta {
        channel_id: String,
    },
}

pub struct AddonRequest {
    pub credentials: ProxyCredentials,
    pub resource: AddonResource,
    pub services: AddonServices,
}

fn decode(raw: &str) -> Result<String, Error> {
    urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .map_err(|_| Error::BadRequest("Invalid URL encoding".to_string()))
}

/// the proxy url can show up encoded as one segment or raw with its own slashes, so this works
/// on the undecoded path and only splits on the first `/PSW/`
pub fn parse_addon_path(path: &str) -> Result<(ProxyCredentials, AddonResource), Error> {
    let not_found = || Error::NotFound(format!("no addon resource at {}", path));

    let rest = path.strip_prefix(ADDON_PREFIX).ok_or_else(not_found)?;
    let (raw_proxy, rest) = rest.split_once(PASSWORD_MARKER).ok_or_else(not_found)?;
    let (raw_password, resource) = rest.split_once('/').ok_or_else(not_found)?;

    if raw_proxy.is_empty() {
        return Err(not_found());
    }

    let credentials = ProxyCredentials {
        proxy_url: decode(raw_proxy)?,
        password: decode(raw_password)?,
    };

    let resource = AddonResource::parse(resource)?.ok_or_else(not_found)?;

    Ok((credentials, resource))
}

impl AddonResource {
    pub fn parse(resource: &str) -> Result<Option<Self>, Error> {
        if resource == "manifest.json" {
            return Ok(Some(Self::Manifest));
        }

        let Some(resource) = resource.strip_suffix(".json") else {
            return Ok(None);
        };

        let segments: Vec<&str> = resource.split('/').collect();

        Ok(match segments.as_slice() {
            ["catalog", "tv", catalog_id] => Some(Self::Catalog {
                catalog_id: decode(catalog_id)?,
                search: None,
                genre: None,
            }),
            ["catalog", "tv", catalog_id, extras] => {
                let mut search = None;
                let mut genre = None;

                // stremio extras look like a query string, "search=rai&genre=SPORT"
                for pair in extras.split('&') {
                    let Some((key, value)) = pair.split_once('=') else {
                        continue;
                    };
                    match key {
                        "search" => search = Some(decode(value)?),
                        "genre" => genre = Some(decode(value)?),
                        _ => debug!("ignoring catalog extra {}", key),
                    }
                }

                Some(Self::Catalog {
                    catalog_id: decode(catalog_id)?,
                    search,
                    genre,
                })
            }
            ["stream", "tv", channel_id] => Some(Self::Stream {
                channel_id: decode(channel_id)?,
            }),
            ["meta", "tv", channel_id] => Some(Self::Meta {
                channel_id: decode(channel_id)?,
            }),
            _ => None,
        })
    }
}

impl<S> FromRequestParts<S> for AddonRequest
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(services): Extension<AddonServices> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|err| Error::InternalServerErrorWithContext(err.to_string()))?;

        let (credentials, resource) = parse_addon_path(parts.uri.path())?;

        debug!(
            "addon request for {:?} via proxy {}",
            resource, credentials.proxy_url
        );

        Ok(AddonRequest {
            credentials,
            resource,
            services,
        })
    }
}
