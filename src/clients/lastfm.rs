use log::debug;
use serde::Deserialize;

use crate::clients::{
    entities::Track,
    errors::{Error, Result},
};

const API_ROOT: &str = "https://ws.audioscrobbler.com/2.0/";

// Wire shapes for the `user.getrecenttracks` response. Last.fm nests
// plain strings under "#text" and puts the now-playing flag in "@attr".

#[derive(Deserialize, Debug)]
struct RecentTracksResponse {
    recenttracks: RecentTracks,
}

#[derive(Deserialize, Debug)]
struct RecentTracks {
    // An account with no scrobbles has no "track" key at all
    #[serde(default)]
    track: Vec<RecentTrack>,
}

#[derive(Deserialize, Debug)]
struct TextField {
    #[serde(rename = "#text")]
    text: String,
}

#[derive(Deserialize, Debug)]
struct TrackAttr {
    nowplaying: Option<String>,
}

#[derive(Deserialize, Debug)]
struct RecentTrack {
    artist: TextField,
    album: TextField,
    name: String,
    #[serde(rename = "@attr")]
    attr: Option<TrackAttr>,
}

impl RecentTrack {
    fn into_ranked(self, id: usize) -> Track {
        // Missing "@attr", missing "nowplaying" and falsy values all mean
        // "not playing"; the API sends "true" while a track is on.
        let now_playing = self
            .attr
            .and_then(|attr| attr.nowplaying)
            .is_some_and(|flag| !matches!(flag.as_str(), "" | "0" | "false"));
        Track {
            id,
            artist: self.artist.text,
            album: self.album.text,
            title: self.name,
            now_playing,
        }
    }
}

fn to_tracks(records: Vec<RecentTrack>) -> Vec<Track> {
    records
        .into_iter()
        .enumerate()
        .map(|(id, record)| record.into_ranked(id))
        .collect()
}

/// Read-only Last.fm API client for the scrobble history endpoint.
pub struct LastFmClient {
    http: reqwest::Client,
    api_key: String,
}

impl LastFmClient {
    #[must_use]
    pub fn new(api_key: String) -> Self {
        LastFmClient {
            http: reqwest::Client::new(),
            api_key,
        }
    }

    /// Fetch the user's most recent scrobbles, most recent first.
    ///
    /// The returned tracks keep the API ordering; rank 0 is the newest
    /// listen. A non-success response status aborts the run.
    pub async fn recent_tracks(&self, user: &str, limit: u32) -> Result<Vec<Track>> {
        let limit = limit.to_string();
        let response = self
            .http
            .get(API_ROOT)
            .query(&[
                ("method", "user.getrecenttracks"),
                ("user", user),
                ("limit", limit.as_str()),
                ("api_key", self.api_key.as_str()),
                ("format", "json"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::FetchFailed(status));
        }

        let body: serde_json::Value = response.json().await?;
        let parsed: RecentTracksResponse = serde_json::from_value(body)?;
        debug!(
            "Fetched {} recent tracks for {user}",
            parsed.recenttracks.track.len()
        );

        Ok(to_tracks(parsed.recenttracks.track))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Result<Vec<Track>> {
        let parsed: RecentTracksResponse = serde_json::from_value(value)?;
        Ok(to_tracks(parsed.recenttracks.track))
    }

    #[test]
    fn test_maps_nested_fields() {
        let tracks = parse(json!({
            "recenttracks": {
                "track": [{
                    "artist": {"#text": "A"},
                    "album": {"#text": "B"},
                    "name": "C",
                    "@attr": {"nowplaying": "1"}
                }]
            }
        }))
        .unwrap();

        assert_eq!(
            tracks,
            vec![Track {
                id: 0,
                artist: "A".to_string(),
                album: "B".to_string(),
                title: "C".to_string(),
                now_playing: true,
            }]
        );
    }

    #[test]
    fn test_rank_follows_input_order() {
        let tracks = parse(json!({
            "recenttracks": {
                "track": [
                    {"artist": {"#text": "a1"}, "album": {"#text": "b1"}, "name": "newest"},
                    {"artist": {"#text": "a2"}, "album": {"#text": "b2"}, "name": "middle"},
                    {"artist": {"#text": "a3"}, "album": {"#text": "b3"}, "name": "oldest"},
                ]
            }
        }))
        .unwrap();

        assert_eq!(tracks.len(), 3);
        assert_eq!(tracks[0].id, 0);
        assert_eq!(tracks[0].title, "newest");
        assert_eq!(tracks[2].id, 2);
        assert_eq!(tracks[2].title, "oldest");
    }

    #[test]
    fn test_missing_track_list_is_empty() {
        let tracks = parse(json!({"recenttracks": {"user": "someone"}})).unwrap();
        assert!(tracks.is_empty());
    }

    #[test]
    fn test_missing_name_is_error() {
        let result = parse(json!({
            "recenttracks": {
                "track": [{"artist": {"#text": "A"}, "album": {"#text": "B"}}]
            }
        }));
        assert!(matches!(result, Err(Error::DeserializationError(_))));
    }

    #[test]
    fn test_nowplaying_truthiness() {
        let cases = [
            (json!({}), false),
            (json!({"@attr": {}}), false),
            (json!({"@attr": {"nowplaying": ""}}), false),
            (json!({"@attr": {"nowplaying": "0"}}), false),
            (json!({"@attr": {"nowplaying": "false"}}), false),
            (json!({"@attr": {"nowplaying": "true"}}), true),
            (json!({"@attr": {"nowplaying": "1"}}), true),
        ];

        for (extra, expected) in cases {
            let mut record = json!({
                "artist": {"#text": "A"},
                "album": {"#text": "B"},
                "name": "C"
            });
            record
                .as_object_mut()
                .unwrap()
                .extend(extra.as_object().unwrap().clone());
            let raw: RecentTrack = serde_json::from_value(record.clone()).unwrap();
            assert_eq!(
                raw.into_ranked(0).now_playing,
                expected,
                "record: {record}"
            );
        }
    }
}
