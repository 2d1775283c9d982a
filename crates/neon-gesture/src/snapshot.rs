//! Frame capture and JPEG data-URL encoding

use anyhow::Context;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::ExtendedColorType;
use image::ImageEncoder;
use image::codecs::jpeg::JpegEncoder;

/// One captured camera frame, tightly packed RGB8
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

impl Frame {
    pub fn new(width: u32, height: u32, rgb: Vec<u8>) -> Self {
        debug_assert_eq!(rgb.len(), (width * height * 3) as usize);
        Self { width, height, rgb }
    }

    /// Horizontally mirrored copy of the frame
    ///
    /// The classifier is trained on selfie-view imagery, so frames are
    /// flipped before encoding.
    pub fn mirrored(&self) -> Frame {
        let w = self.width as usize;
        let mut rgb = vec![0u8; self.rgb.len()];
        for y in 0..self.height as usize {
            let row = y * w * 3;
            for x in 0..w {
                let src = row + x * 3;
                let dst = row + (w - 1 - x) * 3;
                rgb[dst..dst + 3].copy_from_slice(&self.rgb[src..src + 3]);
            }
        }
        Frame {
            width: self.width,
            height: self.height,
            rgb,
        }
    }
}

/// Encode a frame as a `data:image/jpeg;base64,` URL
pub fn to_jpeg_data_url(frame: &Frame, quality: u8) -> anyhow::Result<String> {
    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, quality)
        .write_image(
            &frame.rgb,
            frame.width,
            frame.height,
            ExtendedColorType::Rgb8,
        )
        .context("encoding frame as JPEG")?;
    Ok(format!("data:image/jpeg;base64,{}", STANDARD.encode(&jpeg)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_reverses_pixel_order() {
        // 3x1 frame with distinct red values per pixel.
        let frame = Frame::new(3, 1, vec![10, 0, 0, 20, 0, 0, 30, 0, 0]);
        let mirrored = frame.mirrored();
        assert_eq!(mirrored.rgb, vec![30, 0, 0, 20, 0, 0, 10, 0, 0]);
    }

    #[test]
    fn test_mirror_twice_round_trips() {
        let frame = Frame::new(4, 2, (0..24).collect());
        assert_eq!(frame.mirrored().mirrored(), frame);
    }

    #[test]
    fn test_data_url_has_jpeg_prefix() {
        let frame = Frame::new(8, 8, vec![128; 8 * 8 * 3]);
        let url = to_jpeg_data_url(&frame, 85).unwrap();
        assert!(url.starts_with("data:image/jpeg;base64,"));
        let payload = &url["data:image/jpeg;base64,".len()..];
        let bytes = STANDARD.decode(payload).unwrap();
        // JPEG SOI marker.
        assert_eq!(&bytes[..2], &[0xff, 0xd8]);
    }
}
