use huomao_parser::ExtractorError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Extractor(#[from] ExtractorError),
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to launch player: {0}")]
    Player(String),
}

impl Error {
    /// The short localized message shown to the user before exit.
    ///
    /// Every failure maps onto exactly one of the three historical kinds:
    /// network, data, or configuration.
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::Extractor(e) if e.is_network() => "火猫网络错误",
            Error::Extractor(_) => "火猫数据异常",
            Error::Config(_) | Error::Io(_) | Error::Player(_) => "配置错误",
        }
    }
}
