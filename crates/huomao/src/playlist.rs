use std::fmt::Write;

use crate::channel::ChannelRecord;

/// Renders a ranked channel list as a `.pls` playlist document.
///
/// Output is byte-deterministic for identical input: a `[playlist]` header,
/// the entry count, then one `File`/`Title` line pair per channel, 1-indexed
/// in list order. Every line ends with `\n`.
pub fn render(channels: &[ChannelRecord]) -> String {
    let mut out = String::from("[playlist]\n");
    let _ = writeln!(out, "NumberOfEntries={}", channels.len());
    for (idx, channel) in channels.iter().enumerate() {
        let n = idx + 1;
        let _ = writeln!(out, "File{}={}", n, channel.stream_url);
        let _ = writeln!(out, "Title{}={}({})", n, channel.name, channel.viewers);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, id: &str, viewers: u64) -> ChannelRecord {
        ChannelRecord {
            name: name.to_string(),
            stream_url: format!("http://live-yf-hdl.huomaotv.cn/live/{id}.flv"),
            viewers,
        }
    }

    #[test]
    fn renders_exact_document() {
        let channels = vec![record("Alice", "abc123", 500), record("Bob", "def456", 42)];
        let doc = render(&channels);
        assert_eq!(
            doc,
            "[playlist]\n\
             NumberOfEntries=2\n\
             File1=http://live-yf-hdl.huomaotv.cn/live/abc123.flv\n\
             Title1=Alice(500)\n\
             File2=http://live-yf-hdl.huomaotv.cn/live/def456.flv\n\
             Title2=Bob(42)\n"
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        let channels = vec![record("Alice", "abc123", 500)];
        assert_eq!(render(&channels), render(&channels));
    }
}
