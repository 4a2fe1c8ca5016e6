use reqwest::{StatusCode, Url};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;
use tokio::fs;

/// Where the word list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    Path(PathBuf),
    Url(Url),
}

/// The word list could not be read. The process cannot serve without one.
#[derive(Debug, Error)]
pub enum SourceUnavailable {
    #[error("invalid dictionary URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("failed to read dictionary file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },
    #[error("failed to fetch dictionary from {url}")]
    Fetch {
        url: Url,
        #[source]
        err: reqwest::Error,
    },
    #[error("dictionary fetch from {url} returned status {status}")]
    Status { url: Url, status: StatusCode },
}

impl DictionarySource {
    /// Parse a source descriptor: `http://` and `https://` descriptors are
    /// remote, anything else is a filesystem path.
    pub fn parse(descriptor: &str) -> Result<Self, SourceUnavailable> {
        let descriptor = descriptor.trim();
        if descriptor.starts_with("http://") || descriptor.starts_with("https://") {
            let url = Url::parse(descriptor).map_err(|err| SourceUnavailable::InvalidUrl {
                url: descriptor.to_string(),
                reason: err.to_string(),
            })?;
            Ok(Self::Url(url))
        } else {
            Ok(Self::Path(PathBuf::from(descriptor)))
        }
    }
}

impl fmt::Display for DictionarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Read the raw word list, one trimmed entry per line in source order.
pub async fn load(
    source: &DictionarySource,
    http_client: &reqwest::Client,
) -> Result<Vec<String>, SourceUnavailable> {
    tracing::info!("Loading dictionary from {}", source);

    let content = match source {
        DictionarySource::Path(path) => {
            let bytes = fs::read(path)
                .await
                .map_err(|err| SourceUnavailable::Read {
                    path: path.clone(),
                    err,
                })?;
            String::from_utf8_lossy(&bytes).into_owned()
        }
        DictionarySource::Url(url) => fetch(url, http_client).await?,
    };

    let lines = split_lines(&content);
    tracing::info!("Read {} lines from {}", lines.len(), source);
    Ok(lines)
}

async fn fetch(url: &Url, http_client: &reqwest::Client) -> Result<String, SourceUnavailable> {
    let fetch_err = |err: reqwest::Error| SourceUnavailable::Fetch {
        url: url.clone(),
        err,
    };

    let response = http_client
        .get(url.clone())
        .send()
        .await
        .map_err(fetch_err)?;

    if !response.status().is_success() {
        let status = response.status();
        tracing::error!("Dictionary fetch from {} failed with status {}", url, status);
        return Err(SourceUnavailable::Status {
            url: url.clone(),
            status,
        });
    }

    response.text().await.map_err(fetch_err)
}

fn split_lines(content: &str) -> Vec<String> {
    content.lines().map(|line| line.trim().to_string()).collect()
}
