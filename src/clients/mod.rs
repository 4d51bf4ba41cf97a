/// Data entities for ranked tracks
pub mod entities;
/// Error types and result alias
pub mod errors;
/// Gist API client
pub mod gist;
/// Last.fm API client
pub mod lastfm;

pub use gist::GistClient;
pub use lastfm::LastFmClient;
