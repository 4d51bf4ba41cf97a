use std::collections::HashMap;

use log::{debug, info};
use scrobblebox::clients::{
    entities::Track,
    errors::Result,
    gist::{GistClient, GistFile},
    lastfm::LastFmClient,
};
use scrobblebox::render::{TableStyle, render_table};

// Most scrobbles the API hands back in one page; the largest published
// table needs 100 of them.
const FETCH_LIMIT: u32 = 200;
// Only a track in the first few ranks can mark the user as listening
const NOW_PLAYING_WINDOW: usize = 5;
// One published gist file per table size
const RECENT_COUNTS: [usize; 3] = [10, 50, 100];

const POWERED_BY_FILENAME: &str = "powered_by.md";
const POWERED_BY: &str = "\
# Powered by

Listening data comes from the [Last.fm API](https://www.last.fm/api)
(`user.getrecenttracks`). The tables in this gist are re-rendered and
pushed on every run of
[scrobblebox](https://github.com/scrobblebox/scrobblebox).
";

// Configuration for the Publisher struct
pub struct Config {
    pub lastfm: LastFmClient,
    pub gist: GistClient,
    pub username: String,
    pub gist_id: String,
}

impl Config {
    pub fn new(username: String, api_key: String, gist_id: String, gist_token: String) -> Self {
        Config {
            lastfm: LastFmClient::new(api_key),
            gist: GistClient::new(gist_token),
            username,
            gist_id,
        }
    }
}

// Runs the whole job: fetch recent scrobbles, render the tables, patch
// the gist. Strictly sequential, one pass, no retries.
pub struct Publisher {
    config: Config,
}

impl Publisher {
    pub fn new(config: Config) -> Self {
        Publisher { config }
    }

    pub async fn publish(&self) -> Result<()> {
        info!("Starting publish run ...");
        debug!("Fetching recent tracks from Last.fm ...");
        let tracks = self
            .config
            .lastfm
            .recent_tracks(&self.config.username, FETCH_LIMIT)
            .await?;
        debug!("Fetched {} recent tracks", tracks.len());

        let description = describe(&self.config.username, &tracks);
        let files = build_files(&tracks);

        info!("Updating gist {} ...", self.config.gist_id);
        self.config
            .gist
            .update(&self.config.gist_id, &description, &files)
            .await?;

        info!("Publish run completed");
        Ok(())
    }
}

fn head(tracks: &[Track], count: usize) -> &[Track] {
    &tracks[..tracks.len().min(count)]
}

fn describe(username: &str, tracks: &[Track]) -> String {
    let playing = head(tracks, NOW_PLAYING_WINDOW)
        .iter()
        .any(|track| track.now_playing);
    let status = if playing { "listens now" } else { "paused" };
    format!("{username} {status}")
}

fn build_files(tracks: &[Track]) -> HashMap<String, GistFile> {
    let mut files = HashMap::new();
    for count in RECENT_COUNTS {
        let filename = format!("{count}_recent.txt");
        let content = render_table(head(tracks, count), TableStyle::Ascii);
        files.insert(filename.clone(), GistFile { content, filename });
    }
    files.insert(
        POWERED_BY_FILENAME.to_string(),
        GistFile {
            content: POWERED_BY.to_string(),
            filename: POWERED_BY_FILENAME.to_string(),
        },
    );
    files
}
