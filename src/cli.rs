use clap::Parser;
use log::info;
use scrobblebox::clients::errors::Result;

use crate::publisher;

#[derive(Parser)]
#[command(name = "scrobblebox")]
#[command(version, about = "Publish recent Last.fm scrobbles to a GitHub gist", long_about = None)]
struct Cli {
    /// Last.fm username whose listening history is published
    username: String,
    /// Last.fm API key
    api_key: String,
    /// Id of the gist the tables are written to
    gist_id: String,
    /// Gist API token with write access
    gist_token: String,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    info!("Building config ...");
    let config = publisher::Config::new(cli.username, cli.api_key, cli.gist_id, cli.gist_token);
    let publisher = publisher::Publisher::new(config);
    publisher.publish().await
}
