use std::path::Path;

use tokio::io::AsyncReadExt;

use crate::robots::robots_config::RobotsConfig;
use crate::robots::robots_error::RobotsError;
use crate::robots::robots_txt_view::RobotsTxtView;

/// Origin name used for documents read from standard input.
pub const STDIN_ORIGIN: &str = "-";

/// The text of one robots.txt document and where it came from.
#[derive(Debug, Clone)]
pub struct RobotsTxtSource {
    content: String,
    origin: String,
}

impl RobotsTxtSource {
    pub fn from_string(content: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            origin: origin.into(),
        }
    }

    /// Reads a document from `path`, or from stdin when `path` is `-`.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    pub async fn load(path: &str) -> Result<Self, RobotsError> {
        if path == STDIN_ORIGIN {
            Self::load_from_stdin().await
        } else {
            Self::load_from_path(Path::new(path)).await
        }
    }

    pub async fn load_from_path(path: &Path) -> Result<Self, RobotsError> {
        let origin = path.display().to_string();
        let bytes = tokio::fs::read(path).await.map_err(|source| RobotsError::Io {
            origin: origin.clone(),
            source,
        })?;
        tracing::debug!(origin = %origin, bytes = bytes.len(), "loaded robots.txt");
        Ok(Self::from_bytes(&bytes, origin))
    }

    pub async fn load_from_stdin() -> Result<Self, RobotsError> {
        let mut bytes = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut bytes)
            .await
            .map_err(|source| RobotsError::Io {
                origin: STDIN_ORIGIN.to_owned(),
                source,
            })?;
        Ok(Self::from_bytes(&bytes, STDIN_ORIGIN))
    }

    fn from_bytes(bytes: &[u8], origin: impl Into<String>) -> Self {
        Self::from_string(String::from_utf8_lossy(bytes), origin)
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn view(&self, config: RobotsConfig) -> RobotsTxtView<'_> {
        RobotsTxtView::parse_with(self.content.as_str(), config)
    }
}
