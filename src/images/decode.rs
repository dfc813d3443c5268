use egui::ColorImage;

/// Longest edge of a decoded full-size image.
pub const FULL_SIZE_MAX_EDGE: u32 = 4096;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Unsupported or corrupt image: {0}")]
    Image(#[from] image::ImageError),
    #[error("Image has no pixels")]
    Empty,
}

/// Decode encoded image bytes, shrinking so neither edge exceeds `max_edge`.
pub fn decode_image(bytes: &[u8], max_edge: u32) -> Result<ColorImage, DecodeError> {
    let mut image = image::load_from_memory(bytes)?;
    if image.width() == 0 || image.height() == 0 {
        return Err(DecodeError::Empty);
    }
    if image.width() > max_edge || image.height() > max_edge {
        image = image.thumbnail(max_edge, max_edge);
    }
    let rgba = image.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

#[cfg(test)]
pub(crate) fn encode_test_png(width: u32, height: u32) -> Vec<u8> {
    let buffer = image::RgbaImage::from_pixel(width, height, image::Rgba([200, 40, 40, 255]));
    let mut bytes = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(buffer)
        .write_to(&mut bytes, image::ImageFormat::Png)
        .unwrap();
    bytes.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_images_shrink_preserving_aspect() {
        let decoded = decode_image(&encode_test_png(800, 400), 320).unwrap();
        assert_eq!(decoded.size, [320, 160]);
    }

    #[test]
    fn small_images_keep_their_size() {
        let decoded = decode_image(&encode_test_png(30, 20), 320).unwrap();
        assert_eq!(decoded.size, [30, 20]);
        assert_eq!(decoded.pixels.len(), 600);
    }

    #[test]
    fn garbage_bytes_fail() {
        assert!(matches!(
            decode_image(b"definitely not an image", 320),
            Err(DecodeError::Image(_))
        ));
    }
}
