use ferrous_stub_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(config_path: Option<&str>, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;

    Ok(config)
}

pub fn log_config(config: &Config) {
    info!(
        servers = ?config.resolver.servers,
        timeout_ms = config.resolver.timeout_ms,
        transport = %config.resolver.transport,
        cache_enabled = config.resolver.cache_enabled,
        "Configuration loaded"
    );
}
