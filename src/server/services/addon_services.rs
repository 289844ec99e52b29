use std::sync::Arc;

use tracing::info;

use crate::{config::AppConfig, database::LogoTable, server::services::channel_services::ChannelService};

use super::channel_services::DynChannelService;

/// everything a handler needs, cloned into every request through an Extension
///
/// nothing in here is mutable, the logo table and config are fixed after startup and the channel
/// service refetches on every call
#[derive(Clone)]
pub struct AddonServices {
    pub channels: DynChannelService,
    pub logos: Arc<LogoTable>,
    pub config: Arc<AppConfig>,
}

impl AddonServices {
    pub fn new(logos: LogoTable, config: Arc<AppConfig>) -> Self {
        info!("starting addon services...");

        let logos = Arc::new(logos);
        let channels =
            Arc::new(ChannelService::new(&config, logos.clone())) as DynChannelService;

        Self {
            channels,
            logos,
            config,
        }
    }

    /// swap in any channel source, mostly so tests can hand over a mock
    pub fn with_channel_service(
        channels: DynChannelService,
        logos: Arc<LogoTable>,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            channels,
            logos,
            config,
        }
    }
}
