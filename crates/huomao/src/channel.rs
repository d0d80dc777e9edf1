use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::ExtractorError;
use crate::rewrite::m3u8_to_flv;

/// `is_live` value indicating a channel is currently broadcasting.
const LIVE_SENTINEL: i64 = 1;

/// A validated live channel from the directory payload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChannelRecord {
    /// Streamer display name (`nickname`).
    pub name: String,
    /// Direct FLV playback URL, derived from the first `m3u8.address` entry.
    pub stream_url: String,
    /// Current viewer count (`originviews`).
    pub viewers: u64,
}

/// Extracts one channel entry from the directory payload.
///
/// Entries that are not live yield `Ok(None)` and are skipped, no matter how
/// incomplete the rest of the entry is. Once an entry claims to be live,
/// every required field must be present with the right type; the first
/// missing field aborts the whole run.
pub fn extract_channel(entry: &Value) -> Result<Option<ChannelRecord>, ExtractorError> {
    let is_live = entry
        .get("is_live")
        .and_then(Value::as_i64)
        .ok_or(ExtractorError::InvalidField("is_live"))?;

    if is_live != LIVE_SENTINEL {
        return Ok(None);
    }

    let name = entry
        .get("nickname")
        .and_then(Value::as_str)
        .ok_or(ExtractorError::InvalidField("nickname"))?;

    let viewers = entry
        .get("originviews")
        .and_then(Value::as_u64)
        .ok_or(ExtractorError::InvalidField("originviews"))?;

    let m3u8 = entry
        .pointer("/m3u8/address/0")
        .and_then(Value::as_str)
        .ok_or(ExtractorError::InvalidField("m3u8.address"))?;

    let record = ChannelRecord {
        name: name.to_string(),
        stream_url: m3u8_to_flv(m3u8),
        viewers,
    };

    debug!(name = %record.name, viewers = record.viewers, url = %record.stream_url, "accepted channel");

    Ok(Some(record))
}

/// Orders channels by viewer count, busiest first.
///
/// The sort is stable, so channels with equal viewer counts keep their
/// first-seen payload order.
pub fn rank_channels(channels: &mut [ChannelRecord]) {
    channels.sort_by(|a, b| b.viewers.cmp(&a.viewers));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn live_entry() -> Value {
        json!({
            "is_live": 1,
            "nickname": "Alice",
            "originviews": 500,
            "m3u8": {
                "address": ["https://live-ws-hls.huomaotv.cn/live/abc123_100/playlist.m3u8"]
            }
        })
    }

    #[test]
    fn extracts_live_entry() {
        let record = extract_channel(&live_entry()).unwrap().unwrap();
        assert_eq!(record.name, "Alice");
        assert_eq!(record.viewers, 500);
        assert_eq!(
            record.stream_url,
            "http://live-yf-hdl.huomaotv.cn/live/abc123.flv"
        );
    }

    #[test]
    fn offline_entry_is_skipped() {
        let mut entry = live_entry();
        entry["is_live"] = json!(0);
        assert!(extract_channel(&entry).unwrap().is_none());
    }

    #[test]
    fn offline_entry_with_missing_fields_is_still_skipped() {
        // Liveness is checked before anything else; a broken offline entry
        // must not poison the run.
        let entry = json!({ "is_live": 0 });
        assert!(extract_channel(&entry).unwrap().is_none());
    }

    #[test]
    fn missing_liveness_flag_is_an_error() {
        let mut entry = live_entry();
        entry.as_object_mut().unwrap().remove("is_live");
        assert!(matches!(
            extract_channel(&entry),
            Err(ExtractorError::InvalidField("is_live"))
        ));
    }

    #[test]
    fn missing_nickname_is_an_error() {
        let mut entry = live_entry();
        entry.as_object_mut().unwrap().remove("nickname");
        assert!(matches!(
            extract_channel(&entry),
            Err(ExtractorError::InvalidField("nickname"))
        ));
    }

    #[test]
    fn wrong_typed_viewers_is_an_error() {
        let mut entry = live_entry();
        entry["originviews"] = json!("500");
        assert!(matches!(
            extract_channel(&entry),
            Err(ExtractorError::InvalidField("originviews"))
        ));
    }

    #[test]
    fn negative_viewers_is_an_error() {
        let mut entry = live_entry();
        entry["originviews"] = json!(-3);
        assert!(matches!(
            extract_channel(&entry),
            Err(ExtractorError::InvalidField("originviews"))
        ));
    }

    #[test]
    fn empty_address_list_is_an_error() {
        let mut entry = live_entry();
        entry["m3u8"]["address"] = json!([]);
        assert!(matches!(
            extract_channel(&entry),
            Err(ExtractorError::InvalidField("m3u8.address"))
        ));
    }

    #[test]
    fn ranking_is_descending_and_stable() {
        let record = |name: &str, viewers: u64| ChannelRecord {
            name: name.to_string(),
            stream_url: format!("http://live-yf-hdl.huomaotv.cn/live/{name}.flv"),
            viewers,
        };

        let mut channels = vec![
            record("low", 100),
            record("first-tie", 400),
            record("high", 900),
            record("second-tie", 400),
        ];
        rank_channels(&mut channels);

        let names: Vec<&str> = channels.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["high", "first-tie", "second-tie", "low"]);
    }
}
