use urlencoding::encode;

// the upstream checks these against what its own player embed sends, anything else gets the
// stream rejected so they have to match a real browser exactly
pub const PLAYER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/133.0.0.0 Safari/537.36";
pub const PLAYER_REFERER: &str = "https://newembedplay.xyz/";
pub const PLAYER_ORIGIN: &str = "https://newembedplay.xyz";

/// mediaflow's hls relay endpoint, relative to the proxy base
const PROXY_HLS_PATH: &str = "/proxy/hls/manifest.m3u8";

/// builds the proxy routed playback url for a channel
///
/// nothing here is validated, the proxy url comes straight from the user and is trusted as is.
/// Output is a pure function of the inputs so the same channel always gets the same link.
#[derive(Debug, Clone)]
pub struct StreamUrlBuilder {
    upstream_base_url: String,
}

impl StreamUrlBuilder {
    pub fn new(upstream_base_url: impl Into<String>) -> Self {
        Self {
            upstream_base_url: upstream_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn playback_url(&self, upstream_id: &str) -> String {
        format!("{}/play/{}/index.m3u8", self.upstream_base_url, upstream_id)
    }

    pub fn build(&self, upstream_id: &str, proxy_url: &str, password: &str) -> String {
        let base_proxy = proxy_url.trim_end_matches('/');

        format!(
            "{}{}?api_password={}&d={}&h_user-agent={}&h_referer={}&h_origin={}",
            base_proxy,
            PROXY_HLS_PATH,
            encode(password),
            encode(&self.playback_url(upstream_id)),
            encode(PLAYER_USER_AGENT),
            encode(PLAYER_REFERER),
            encode(PLAYER_ORIGIN),
        )
    }
}
