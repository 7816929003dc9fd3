//! PNG export of normal maps.

use super::normal_map::NormalMapBuffer;
use crate::error::FlutedError;
use image::RgbaImage;
use std::path::Path;

impl NormalMapBuffer {
    /// Copy into an [`RgbaImage`].
    pub fn to_image(&self) -> Result<RgbaImage, FlutedError> {
        RgbaImage::from_raw(self.resolution(), self.resolution(), self.as_bytes().to_vec())
            .ok_or_else(|| FlutedError::Image("buffer size does not match resolution".to_string()))
    }
}

/// Save a normal map as an RGBA PNG.
pub fn save_png(path: &Path, map: &NormalMapBuffer) -> Result<(), FlutedError> {
    map.to_image()?
        .save(path)
        .map_err(|e| FlutedError::Image(format!("Failed to save PNG: {}", e)))?;

    tracing::info!(path = %path.display(), resolution = map.resolution(), "saved normal map");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParameterSet;
    use crate::render::normal_map::generate;

    #[test]
    fn test_to_image_matches_texels() {
        let map = generate(&ParameterSet::default(), 16).unwrap();
        let img = map.to_image().unwrap();
        assert_eq!(img.dimensions(), (16, 16));
        assert_eq!(img.get_pixel(3, 9).0, map.texel(3, 9).unwrap());
    }

    #[test]
    fn test_save_png_roundtrip() {
        let map = generate(&ParameterSet::default(), 8).unwrap();
        let path = std::env::temp_dir().join(format!("fluted-preview-{}.png", std::process::id()));
        save_png(&path, &map).unwrap();

        let loaded = image::open(&path).unwrap().to_rgba8();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.as_raw(), map.as_bytes());
    }
}
