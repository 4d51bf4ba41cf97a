//! Scrobblebox - publish recent Last.fm scrobbles to a GitHub gist
//!
//! This library provides the clients and table rendering used by the
//! `scrobblebox` binary to fetch a user's listening history and
//! republish it as plain-text tables in a gist.

/// Client modules for the scrobbling and gist services
pub mod clients;
/// Plain-text table rendering for ranked tracks
pub mod render;
