use std::collections::HashMap;
use std::str::FromStr;

use bytes::Bytes;
use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;
use tracing::info;

use crate::channel::{ChannelRecord, extract_channel, rank_channels};
use crate::error::ExtractorError;

const CHANNEL_JSON_URL: &str = "https://www.huomao.com/channels/channel.json";
const HUOMAO_URL: &str = "https://www.huomao.com";

/// Fetches and decodes the Huomao live-channel directory.
///
/// One extractor drives one run: a single GET of the first results page,
/// then a fail-fast decode of the payload into a ranked channel list.
pub struct HuomaoExtractor {
    client: Client,
    url: String,
    platform_headers: HashMap<String, String>,
    platform_params: HashMap<String, String>,
}

impl HuomaoExtractor {
    pub fn new(client: Client, game: &str, page: u32) -> Self {
        let mut extractor = Self {
            client,
            url: CHANNEL_JSON_URL.to_string(),
            platform_headers: HashMap::new(),
            platform_params: HashMap::new(),
        };
        extractor.add_header("Origin", HUOMAO_URL);
        extractor.add_header("Referer", HUOMAO_URL);
        extractor.add_param("page", &page.to_string());
        extractor.add_param("game_url_rule", game);
        extractor
    }

    /// Overrides the directory endpoint, e.g. from a config file.
    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn add_header(&mut self, key: &str, value: &str) {
        self.platform_headers
            .insert(key.to_string(), value.to_string());
    }

    pub fn add_param(&mut self, key: &str, value: &str) {
        self.platform_params
            .insert(key.to_string(), value.to_string());
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let mut headers = reqwest::header::HeaderMap::new();
        for (key, value) in &self.platform_headers {
            if let (Ok(name), Ok(val)) = (
                reqwest::header::HeaderName::from_str(key),
                reqwest::header::HeaderValue::from_str(value),
            ) {
                headers.insert(name, val);
            }
        }

        self.client
            .request(method, url)
            .headers(headers)
            .query(&self.platform_params)
    }

    /// Retrieves the raw directory payload.
    pub async fn fetch(&self) -> Result<Bytes, ExtractorError> {
        let response = self.request(Method::GET, &self.url).send().await?;
        let response = response.error_for_status()?;
        let body = response.bytes().await?;
        Ok(body)
    }

    /// Decodes a directory payload into a ranked list of live channels.
    ///
    /// The channel array lives at `data.channelList`. Entries flow through
    /// [`extract_channel`] one at a time; the first invalid live entry aborts
    /// the run. An empty result is always an error, never an empty playlist.
    pub fn decode_channel_list(&self, data: &[u8]) -> Result<Vec<ChannelRecord>, ExtractorError> {
        let payload: Value = serde_json::from_slice(data)?;

        let entries = payload
            .pointer("/data/channelList")
            .and_then(Value::as_array)
            .ok_or(ExtractorError::MissingChannelList)?;

        let mut channels = Vec::new();
        for entry in entries {
            if let Some(record) = extract_channel(entry)? {
                channels.push(record);
            }
        }

        if channels.is_empty() {
            return Err(ExtractorError::NoLiveChannels);
        }

        rank_channels(&mut channels);
        info!(
            live = channels.len(),
            total = entries.len(),
            "decoded channel list"
        );
        Ok(channels)
    }

    /// Runs the whole pipeline: fetch the directory, decode and rank it.
    pub async fn extract(&self) -> Result<Vec<ChannelRecord>, ExtractorError> {
        let body = self.fetch().await?;
        self.decode_channel_list(&body)
    }
}
