pub mod color;

use std::fs::create_dir_all;
use std::path::Path;

use image::RgbImage;
use log::{debug, info};

use crate::result::RenderResult;

fn make_directory_for_image(path: &Path) -> RenderResult<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            debug!("Creating output directory {}", dir.display());
            Ok(create_dir_all(dir)?)
        }
        _ => Ok(()),
    }
}

/// Writes the image, format picked from the file extension.
pub fn save_image(image: &RgbImage, path: &Path) -> RenderResult<()> {
    make_directory_for_image(path)?;
    image.save(path)?;
    info!(
        "🖼️ Wrote {}x{} image to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn saves_into_missing_directory() {
        let dir = std::env::temp_dir().join(format!("newton-rs-save-{}", std::process::id()));
        let path = dir.join("nested").join("out.png");

        let image = RgbImage::from_pixel(3, 2, Rgb([12, 34, 56]));
        save_image(&image, &path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(loaded.dimensions(), (3, 2));
        assert_eq!(loaded.get_pixel(2, 1), &Rgb([12, 34, 56]));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn unknown_extension_is_an_error() {
        let path = std::env::temp_dir().join("newton-rs-save.not-an-image");
        let image = RgbImage::new(1, 1);
        assert!(save_image(&image, &path).is_err());
    }
}
