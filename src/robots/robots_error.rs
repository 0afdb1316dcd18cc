#[derive(Debug, thiserror::Error)]
pub enum RobotsError {
    #[error("failed to read robots.txt from {origin}")]
    Io {
        origin: String,
        #[source]
        source: std::io::Error,
    },
}
