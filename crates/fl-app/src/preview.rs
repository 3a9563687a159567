/// Longest edge of the decoded preview; uploads can be arbitrarily large and
/// the texture only needs to fill a side panel.
pub const MAX_PREVIEW_DIM: u32 = 512;

/// A decoded RGBA bitmap, ready to be uploaded as an egui texture.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewImage {
    pub size: [usize; 2],
    pub rgba: Vec<u8>,
}

/// Decode raw file bytes into a bounded thumbnail. Any decode failure yields
/// `None`; the UI treats that the same as no selection.
pub fn decode(bytes: &[u8]) -> Option<PreviewImage> {
    let decoded = image::load_from_memory(bytes).ok()?;

    let thumbnail = if decoded.width() > MAX_PREVIEW_DIM || decoded.height() > MAX_PREVIEW_DIM {
        decoded.thumbnail(MAX_PREVIEW_DIM, MAX_PREVIEW_DIM)
    } else {
        decoded
    };

    let rgba = thumbnail.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Some(PreviewImage {
        size,
        rgba: rgba.into_raw(),
    })
}

#[cfg(test)]
pub(crate) fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let bitmap = image::RgbaImage::from_pixel(width, height, image::Rgba([180, 120, 40, 255]));
    let mut out = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(bitmap)
        .write_to(&mut out, image::ImageFormat::Png)
        .unwrap();
    out.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_png_at_native_size() {
        let preview = decode(&png_bytes(4, 3)).unwrap();
        assert_eq!(preview.size, [4, 3]);
        assert_eq!(preview.rgba.len(), 4 * 3 * 4);
    }

    #[test]
    fn large_images_are_downscaled_preserving_aspect() {
        let preview = decode(&png_bytes(1200, 600)).unwrap();
        assert_eq!(preview.size, [512, 256]);
    }

    #[test]
    fn garbage_bytes_decode_to_none() {
        assert_eq!(decode(b"not an image"), None);
        assert_eq!(decode(&[]), None);
    }
}
