use anyhow::Context;
use vibe::kernel::config::load_config;
use vibe_logger::Logger;
use vibe_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _log = Logger::builder(env!("CARGO_PKG_NAME")).init()?;

    let cfg = load_config::<_, &str>(None).context("Critical: Configuration is malformed")?;

    Server::builder().config(cfg).build()?.run().await
}
