//! YouTube thumbnail lookup for the `thumbnail` command.

use reqwest::StatusCode;

use crate::error::AppError;

/// Host serving YouTube video thumbnails.
pub const THUMBNAIL_HOST: &str = "https://img.youtube.com";

/// Thumbnail sizes tried in order. Not every video has a high quality thumbnail.
const QUALITIES: [&str; 2] = ["hqdefault", "default"];

/// Extracts the video id from a YouTube url, or returns the query unchanged.
///
/// Only the `v=` query parameter is looked at, so `watch?v=` urls from youtube.com
/// and music.youtube.com work, and a bare id passes through.
pub fn get_video_id(query: &str) -> &str {
    match query.split_once("v=") {
        Some((_, rest)) => rest.split('&').next().unwrap_or(rest),
        None => query,
    }
}

/// Url of one thumbnail size of a video.
pub fn thumbnail_url(host: &str, video_id: &str, quality: &str) -> String {
    format!("{host}/vi/{video_id}/{quality}.jpg")
}

pub struct ThumbnailService<'a> {
    pub http_client: &'a reqwest::Client,
    host: String,
}

impl<'a> ThumbnailService<'a> {
    /// Creates a new ThumbnailService fetching from [`THUMBNAIL_HOST`].
    ///
    /// # Arguments
    /// - `http_client` - Shared HTTP client
    pub fn new(http_client: &'a reqwest::Client) -> Self {
        Self {
            http_client,
            host: THUMBNAIL_HOST.to_string(),
        }
    }

    /// Downloads the best available thumbnail of a video.
    ///
    /// # Arguments
    /// - `video_id` - YouTube video id
    ///
    /// # Returns
    /// - `Ok(Some(bytes))` - JPEG image of the thumbnail
    /// - `Ok(None)` - No thumbnail exists, the id is not a video
    /// - `Err(AppError::BadRequest)` - The host answered with an unexpected status
    /// - `Err(AppError::ReqwestErr)` - The request failed
    pub async fn fetch(&self, video_id: &str) -> Result<Option<Vec<u8>>, AppError> {
        for quality in QUALITIES {
            let url = thumbnail_url(&self.host, video_id, quality);
            let response = self.http_client.get(&url).send().await?;

            match response.status() {
                StatusCode::OK => return Ok(Some(response.bytes().await?.to_vec())),
                StatusCode::NOT_FOUND => {
                    tracing::debug!("No {} thumbnail for video {}", quality, video_id);
                }
                status => {
                    tracing::warn!("Thumbnail request for {} returned {}", url, status);
                    return Err(AppError::BadRequest("Unknown error occurred.".to_string()));
                }
            }
        }

        Ok(None)
    }
}
