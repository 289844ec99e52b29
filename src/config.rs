#[derive(clap::ValueEnum, Clone, Debug, Copy)]
pub enum CargoEnv {
    Development,
    Production,
}

#[derive(clap::Parser, Debug)]
pub struct AppConfig {
    // production or development
    #[clap(long, env, value_enum)]
    pub cargo_env: CargoEnv,

    // port that the app will bind to
    #[clap(long, env, default_value = "5000")]
    pub port: u16,

    // this should be either * for allowing everything, or a comma seperated list of domains like
    // example.com,something.com
    #[clap(long, env, default_value = "*")]
    pub cors_origin: String,

    // the channel directory, fetched on every catalog/stream/meta request
    #[clap(long, env, default_value = "https://vavoo.to/channels")]
    pub channels_url: String,

    // host used to build the playback url that gets handed to the proxy
    #[clap(long, env, default_value = "https://vavoo.to")]
    pub upstream_base_url: String,

    // exact match against the `country` field of each upstream entry
    #[clap(long, env, default_value = "Italy")]
    pub target_country: String,

    // json object of normalized channel name -> poster url, has to exist or we don't start
    #[clap(long, env, default_value = "dizionario.json")]
    pub logos_path: String,

    // the upstream hangs sometimes so don't wait on it forever
    #[clap(long, env, default_value = "10")]
    pub upstream_timeout_secs: u64,

    // optional sentry integration
    #[clap(long, env)]
    pub sentry_dsn: Option<String>,
}

impl Default for AppConfig {
    // defaults aren't really needed here but it's here as a bad fallback (and for tests)
    fn default() -> Self {
        Self {
            cargo_env: CargoEnv::Development,
            port: 5000,
            cors_origin: "*".to_string(),
            channels_url: "https://vavoo.to/channels".to_string(),
            upstream_base_url: "https://vavoo.to".to_string(),
            target_country: "Italy".to_string(),
            logos_path: "dizionario.json".to_string(),
            upstream_timeout_secs: 10,
            sentry_dsn: None,
        }
    }
}
