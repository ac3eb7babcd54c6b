use sos_icon::net::HttpFetcher;
use sos_icon::{generate, IconConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Everything is fixed; there are no flags to parse
    let config = IconConfig::default();
    let fetcher = HttpFetcher::new(&config.user_agent);

    generate(&config, &fetcher).await?;
    Ok(())
}
