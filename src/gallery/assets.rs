// SPDX-License-Identifier: MPL-2.0
//! Bundled photo assets and the file-name lookup table.
//!
//! Known manifest file names map to images embedded from `assets/photos/`.
//! Anything else resolves to [`PhotoAsset::Placeholder`], a vector image
//! compiled in as a constant.

use iced::widget::{image, svg};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/photos/"]
struct PhotoFiles;

/// Fallback artwork for unknown file names.
pub const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="108" height="108" viewBox="0 0 108 108">
  <rect x="14" y="22" width="80" height="64" rx="6" fill="none" stroke="#7a8a99" stroke-width="4"/>
  <circle cx="38" cy="44" r="7" fill="#7a8a99"/>
  <path d="M20 80 L44 56 L58 70 L70 58 L88 80 Z" fill="#7a8a99"/>
</svg>"##;

/// Image a cell shows for its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhotoAsset {
    Carnation,
    Daisy,
    Lavender,
    Lily,
    Marigold,
    Rose,
    Sunflower,
    Placeholder,
}

impl PhotoAsset {
    /// Every asset backed by a bundled image.
    pub const KNOWN: [PhotoAsset; 7] = [
        PhotoAsset::Carnation,
        PhotoAsset::Daisy,
        PhotoAsset::Lavender,
        PhotoAsset::Lily,
        PhotoAsset::Marigold,
        PhotoAsset::Rose,
        PhotoAsset::Sunflower,
    ];

    /// Looks up the asset for a manifest file name. Never fails.
    #[must_use]
    pub fn resolve(file_name: &str) -> Self {
        match file_name {
            "carnation.jpg" => PhotoAsset::Carnation,
            "daisy.jpg" => PhotoAsset::Daisy,
            "lavender.jpg" => PhotoAsset::Lavender,
            "lily.jpg" => PhotoAsset::Lily,
            "marigold.jpg" => PhotoAsset::Marigold,
            "rose.jpg" => PhotoAsset::Rose,
            "sunflower.jpg" => PhotoAsset::Sunflower,
            _ => PhotoAsset::Placeholder,
        }
    }

    /// File name the manifest uses for this asset.
    #[must_use]
    pub fn manifest_name(self) -> Option<&'static str> {
        match self {
            PhotoAsset::Carnation => Some("carnation.jpg"),
            PhotoAsset::Daisy => Some("daisy.jpg"),
            PhotoAsset::Lavender => Some("lavender.jpg"),
            PhotoAsset::Lily => Some("lily.jpg"),
            PhotoAsset::Marigold => Some("marigold.jpg"),
            PhotoAsset::Rose => Some("rose.jpg"),
            PhotoAsset::Sunflower => Some("sunflower.jpg"),
            PhotoAsset::Placeholder => None,
        }
    }

    /// Path of the embedded image inside `assets/photos/`.
    #[must_use]
    pub fn embedded_path(self) -> Option<&'static str> {
        match self {
            PhotoAsset::Carnation => Some("carnation.png"),
            PhotoAsset::Daisy => Some("daisy.png"),
            PhotoAsset::Lavender => Some("lavender.png"),
            PhotoAsset::Lily => Some("lily.png"),
            PhotoAsset::Marigold => Some("marigold.png"),
            PhotoAsset::Rose => Some("rose.png"),
            PhotoAsset::Sunflower => Some("sunflower.png"),
            PhotoAsset::Placeholder => None,
        }
    }

    #[must_use]
    pub fn is_placeholder(self) -> bool {
        self == PhotoAsset::Placeholder
    }

    /// Builds a renderable handle. Falls back to the placeholder if the
    /// embedded bytes are somehow absent.
    #[must_use]
    pub fn load(self) -> AssetHandle {
        let embedded = self
            .embedded_path()
            .and_then(|path| PhotoFiles::get(path).map(|file| (path, file)));

        match embedded {
            Some((path, file)) => {
                tracing::trace!(path, bytes = file.data.len(), "loaded bundled photo");
                AssetHandle::Raster(image::Handle::from_bytes(file.data.into_owned()))
            }
            None => {
                if !self.is_placeholder() {
                    tracing::warn!(asset = ?self, "bundled photo missing, using placeholder");
                }
                AssetHandle::placeholder()
            }
        }
    }
}

/// Renderer handle for a resolved asset.
#[derive(Debug, Clone)]
pub enum AssetHandle {
    Raster(image::Handle),
    Vector(svg::Handle),
}

impl AssetHandle {
    #[must_use]
    pub fn placeholder() -> Self {
        AssetHandle::Vector(svg::Handle::from_memory(PLACEHOLDER_SVG.as_bytes()))
    }

    #[must_use]
    pub fn is_vector(&self) -> bool {
        matches!(self, AssetHandle::Vector(_))
    }
}
