// Copyright (C) 2020-2026 Andy Kurnia.

use feudbot::{bot, config, error};

fn main() -> error::Returns<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.json".to_string());
    let config = config::Config::load(&config_path)?;
    bot::Bot::new(config)?.run()
}
