/// A ranked scrobble. `id` is zero-based recency rank, 0 = most recent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: usize,
    pub artist: String,
    pub album: String,
    pub title: String,
    pub now_playing: bool,
}
