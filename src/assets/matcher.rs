//! Remote asset matching by embedded booking code

use async_trait::async_trait;

use crate::error::Result;

/// A file known to the remote store
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteAsset {
    pub name: String,
    pub path: String,
}

/// A matched asset with a retrievable link
#[derive(Debug, Clone, PartialEq)]
pub struct AssetLink {
    pub name: String,
    pub url: String,
    pub kind: MediaKind,
}

/// Coarse media classification by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Audio,
    Video,
    Image,
}

/// Classify a filename; anything that is not audio or video previews as an
/// image, matching the trafficking UI's behavior.
pub fn media_kind(filename: &str) -> MediaKind {
    let name = filename.to_lowercase();
    if [".mp3", ".wav", ".m4a"].iter().any(|ext| name.ends_with(ext)) {
        MediaKind::Audio
    } else if [".mp4", ".mov"].iter().any(|ext| name.ends_with(ext)) {
        MediaKind::Video
    } else {
        MediaKind::Image
    }
}

/// Narrow interface onto the remote file store. Listing and link generation
/// live behind this trait so storage failures stay at the call boundary.
#[async_trait]
pub trait RemoteAssetSource: Send + Sync {
    /// List every file the store knows about
    async fn list_assets(&self) -> Result<Vec<RemoteAsset>>;

    /// Produce a retrievable link for one asset path
    async fn temporary_link(&self, path: &str) -> Result<String>;
}

/// Find the first remote asset whose name contains the given 8-digit code.
///
/// No match is a normal outcome, not an error.
pub async fn match_code(
    source: &dyn RemoteAssetSource,
    code: &str,
) -> Result<Option<AssetLink>> {
    let assets = source.list_assets().await?;
    let Some(asset) = assets.iter().find(|a| a.name.contains(code)) else {
        return Ok(None);
    };
    let url = source.temporary_link(&asset.path).await?;
    Ok(Some(AssetLink {
        name: asset.name.clone(),
        kind: media_kind(&asset.name),
        url,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;

    struct FakeSource {
        assets: Vec<RemoteAsset>,
        fail_link: bool,
    }

    #[async_trait]
    impl RemoteAssetSource for FakeSource {
        async fn list_assets(&self) -> Result<Vec<RemoteAsset>> {
            Ok(self.assets.clone())
        }

        async fn temporary_link(&self, path: &str) -> Result<String> {
            if self.fail_link {
                return Err(MatrixError::network("link service down", Some(503), None));
            }
            Ok(format!("https://store.example/{}", path))
        }
    }

    fn source() -> FakeSource {
        FakeSource {
            assets: vec![
                RemoteAsset {
                    name: "spot_12345678_final.mp4".into(),
                    path: "ads/spot_12345678_final.mp4".into(),
                },
                RemoteAsset {
                    name: "radio_87654321.mp3".into(),
                    path: "ads/radio_87654321.mp3".into(),
                },
            ],
            fail_link: false,
        }
    }

    #[tokio::test]
    async fn matches_first_asset_containing_code() {
        let link = match_code(&source(), "12345678").await.unwrap().unwrap();
        assert_eq!(link.name, "spot_12345678_final.mp4");
        assert_eq!(link.kind, MediaKind::Video);
        assert!(link.url.ends_with("spot_12345678_final.mp4"));
    }

    #[tokio::test]
    async fn no_match_is_a_normal_outcome() {
        let result = match_code(&source(), "00000000").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn link_failure_propagates_as_error() {
        let mut src = source();
        src.fail_link = true;
        assert!(match_code(&src, "87654321").await.is_err());
    }

    #[test]
    fn media_kind_by_extension() {
        assert_eq!(media_kind("a.MP3"), MediaKind::Audio);
        assert_eq!(media_kind("b.wav"), MediaKind::Audio);
        assert_eq!(media_kind("c.mov"), MediaKind::Video);
        assert_eq!(media_kind("d.png"), MediaKind::Image);
        assert_eq!(media_kind("e.pdf"), MediaKind::Image);
    }
}
