// fetch -> filter -> rewrite -> poster -> genres, once per request. No cache, every call hits
// the upstream.
use std::io::Read;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use flate2::read::GzDecoder;
use mockall::automock;
use tracing::{debug, error, info, warn};

use crate::{
    config::AppConfig,
    database::{
        LogoTable,
        channel::{Channel, UpstreamChannel},
    },
    server::utils::{
        genre_utils::categorize_channel, name_utils::normalize_name,
        stream_url_utils::StreamUrlBuilder,
    },
};

pub type DynChannelService = Arc<dyn ChannelServiceTrait + Send + Sync>;

#[automock]
#[async_trait]
pub trait ChannelServiceTrait {
    /// every channel for the target country with its url routed through `proxy_url`
    ///
    /// never fails, an unreachable upstream is just an empty list
    async fn get_channels(&self, proxy_url: &str, password: &str) -> Vec<Channel>;
}

pub struct ChannelService {
    http_client: reqwest::Client,
    channels_url: String,
    target_country: String,
    url_builder: StreamUrlBuilder,
    logos: Arc<LogoTable>,
}

impl ChannelService {
    pub fn new(config: &AppConfig, logos: Arc<LogoTable>) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                error!("failed to build upstream http client, using defaults: {}", e);
                reqwest::Client::new()
            });

        Self {
            http_client,
            channels_url: config.channels_url.clone(),
            target_country: config.target_country.clone(),
            url_builder: StreamUrlBuilder::new(config.upstream_base_url.clone()),
            logos,
        }
    }

    async fn fetch_upstream(&self) -> Option<Vec<UpstreamChannel>> {
        let response = match self.http_client.get(&self.channels_url).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("failed to fetch channel list from {}: {}", self.channels_url, e);
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(
                "channel list at {} returned status: {}",
                self.channels_url,
                response.status()
            );
            return None;
        }

        let response_bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                error!("failed to read channel list body: {}", e);
                return None;
            }
        };

        Self::parse_channel_list(&response_bytes)
    }

    /// the list is supposed to be a json array but anything else just counts as no channels,
    /// and a single broken entry doesn't take the rest down with it
    pub fn parse_channel_list(body: &[u8]) -> Option<Vec<UpstreamChannel>> {
        let decoded = if body.len() > 2 && body[0] == 0x1f && body[1] == 0x8b {
            let mut decoder = GzDecoder::new(body);
            let mut decompressed = Vec::new();
            if let Err(e) = decoder.read_to_end(&mut decompressed) {
                error!("failed to decompress gzip channel list: {}", e);
                return None;
            }
            decompressed
        } else {
            body.to_vec()
        };

        let entries: Vec<serde_json::Value> = match serde_json::from_slice(&decoded) {
            Ok(entries) => entries,
            Err(e) => {
                error!("failed to parse channel list as a json array: {}", e);
                return None;
            }
        };

        let total = entries.len();
        let parsed: Vec<UpstreamChannel> = entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect();

        if parsed.len() != total {
            debug!("skipped {} malformed channel entries", total - parsed.len());
        }

        Some(parsed)
    }

    /// country filter plus the per channel transform, keeps upstream order
    pub fn build_channels(
        &self,
        entries: Vec<UpstreamChannel>,
        proxy_url: &str,
        password: &str,
    ) -> Vec<Channel> {
        entries
            .into_iter()
            .filter(|entry| entry.country.as_deref() == Some(self.target_country.as_str()))
            .filter_map(|entry| {
                let upstream_id = entry.id?;
                let name = entry.name.unwrap_or_default();

                Some(Channel {
                    id: Channel::id_for(&upstream_id),
                    url: self.url_builder.build(&upstream_id, proxy_url, password),
                    poster: self.logos.poster_for(&normalize_name(&name)).to_string(),
                    genres: categorize_channel(&name),
                    name,
                })
            })
            .collect()
    }
}

#[async_trait]
impl ChannelServiceTrait for ChannelService {
    async fn get_channels(&self, proxy_url: &str, password: &str) -> Vec<Channel> {
        let Some(entries) = self.fetch_upstream().await else {
            return Vec::new();
        };

        let channels = self.build_channels(entries, proxy_url, password);
        info!(
            "built {} channels for country {}",
            channels.len(),
            self.target_country
        );

        channels
    }
}
