use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub name: String,
    pub key: String,
    #[serde(default)]
    pub subscriber: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    #[serde(default)]
    pub realname: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub country: String,
    // Last.fm renders counters as JSON strings
    #[serde(default)]
    pub playcount: String,
    pub registered: Option<Registered>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registered {
    #[serde(default)]
    pub unixtime: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentTracks {
    #[serde(default)]
    pub track: Vec<Track>,
    #[serde(rename = "@attr")]
    pub attr: Option<PageAttr>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    pub artist: TrackArtist,
    pub album: Option<TrackAlbum>,
    #[serde(default)]
    pub url: String,
    pub date: Option<TrackDate>,
    #[serde(rename = "@attr")]
    pub attr: Option<TrackAttr>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    #[serde(rename = "#text")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAlbum {
    #[serde(rename = "#text")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackDate {
    pub uts: String,
    #[serde(rename = "#text")]
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAttr {
    pub nowplaying: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Friends {
    #[serde(default)]
    pub user: Vec<Friend>,
    #[serde(rename = "@attr")]
    pub attr: Option<PageAttr>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Friend {
    pub name: String,
    #[serde(default)]
    pub realname: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageAttr {
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub total: String,
    #[serde(default)]
    pub page: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub played: String,
    pub artist: String,
    pub track: String,
}

#[derive(Tabled)]
pub struct FriendTableRow {
    pub name: String,
    pub realname: String,
    pub url: String,
}
