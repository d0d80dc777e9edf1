pub mod channel;
pub mod error;
pub mod extractor;
pub mod playlist;
pub mod rewrite;

pub use channel::{ChannelRecord, rank_channels};
pub use error::ExtractorError;
pub use extractor::HuomaoExtractor;
