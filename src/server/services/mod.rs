pub mod addon_services;
pub mod catalog_services;
pub mod channel_services;

pub use addon_services::AddonServices;
pub use channel_services::DynChannelService;
