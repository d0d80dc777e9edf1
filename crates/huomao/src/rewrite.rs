const HLS_PREFIX: &str = "https://live-ws-hls.huomaotv.cn/live/";
const HLS_SUFFIX: &str = "_100/playlist.m3u8";
const FLV_TEMPLATE: &str = "http://live-yf-hdl.huomaotv.cn/live/";

/// Rewrites an HLS manifest address into the direct FLV stream URL.
///
/// The stream id is whatever remains after stripping the known CDN prefix
/// and playlist suffix. Inputs that don't carry those substrings pass
/// through into the template unchanged; the caller gets a URL either way.
pub fn m3u8_to_flv(m3u8: &str) -> String {
    let id = m3u8.replace(HLS_PREFIX, "").replace(HLS_SUFFIX, "");
    format!("{FLV_TEMPLATE}{id}.flv")
}
