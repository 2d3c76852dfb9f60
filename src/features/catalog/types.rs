//! Types for the third-party catalog proxy responses.

use crate::features::catalog::title::title_from_url;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VideoFile {
    pub id: u64,
    #[serde(default)]
    pub quality: String,
    #[serde(default)]
    pub file_type: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    pub link: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VideoUser {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Video {
    pub id: u64,
    pub url: String,
    pub image: String,
    #[serde(default)]
    pub duration: u32,
    pub user: VideoUser,
    #[serde(default)]
    pub video_files: Vec<VideoFile>,
}

impl Video {
    /// Display title derived from the source URL slug.
    pub fn title(&self) -> String {
        let title = title_from_url(&self.url);
        if title.is_empty() {
            "Sin título".to_string()
        } else {
            title
        }
    }

    /// Picks the playback file: HD when available, otherwise SD, otherwise
    /// whatever the proxy listed first.
    pub fn best_file(&self) -> Option<&VideoFile> {
        self.video_files
            .iter()
            .find(|file| file.quality == "hd")
            .or_else(|| self.video_files.iter().find(|file| file.quality == "sd"))
            .or_else(|| self.video_files.first())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub total_results: u32,
    #[serde(default)]
    pub videos: Vec<Video>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video_with_files(files: Vec<VideoFile>) -> Video {
        Video {
            id: 855321,
            url: "https://www.pexels.com/video/a-walk-in-the-park-855321/".to_string(),
            image: "https://images.pexels.com/videos/855321/preview.jpg".to_string(),
            duration: 12,
            user: VideoUser {
                id: 1,
                name: "Ana".to_string(),
                url: String::new(),
            },
            video_files: files,
        }
    }

    fn file(id: u64, quality: &str) -> VideoFile {
        VideoFile {
            id,
            quality: quality.to_string(),
            file_type: "video/mp4".to_string(),
            width: None,
            height: None,
            link: format!("https://player.test/{id}"),
        }
    }

    #[test]
    fn best_file_prefers_hd_then_sd_then_first() {
        let video = video_with_files(vec![file(1, "sd"), file(2, "hd")]);
        assert_eq!(video.best_file().map(|f| f.id), Some(2));

        let video = video_with_files(vec![file(3, "hls"), file(4, "sd")]);
        assert_eq!(video.best_file().map(|f| f.id), Some(4));

        let video = video_with_files(vec![file(5, "hls")]);
        assert_eq!(video.best_file().map(|f| f.id), Some(5));

        let video = video_with_files(vec![]);
        assert!(video.best_file().is_none());
    }

    #[test]
    fn title_falls_back_when_slug_is_unusable() {
        let mut video = video_with_files(vec![]);
        assert_eq!(video.title(), "A Walk In The Park");

        video.url = "https://www.pexels.com/video/855321/".to_string();
        assert_eq!(video.title(), "Sin título");
    }

    #[test]
    fn search_page_tolerates_missing_counts() {
        let page: SearchPage = serde_json::from_str(r#"{"videos":[]}"#).unwrap();
        assert_eq!(page.total_results, 0);
        assert!(page.videos.is_empty());
    }
}
