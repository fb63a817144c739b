// SPDX-License-Identifier: MPL-2.0
//! Gallery data: the bundled photo manifest and the asset lookup table.

pub mod assets;
pub mod manifest;

pub use assets::{AssetHandle, PhotoAsset};
pub use manifest::{Manifest, PhotoRecord, SparseRecordPolicy};
