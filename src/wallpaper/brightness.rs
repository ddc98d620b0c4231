use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, RgbImage};
use thiserror::Error;

/// Edge length of the square the image is downsampled to before averaging.
pub const SAMPLE_SIZE: u32 = 50;

/// Mean luma strictly above this counts as a light wallpaper. Midtones stay
/// dark so the default light text keeps its contrast.
pub const LIGHT_THRESHOLD: u8 = 160;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("pixel sampling restricted: {message}")]
    Restricted { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessReport {
    pub brightness: u8,
    pub is_light: bool,
}

impl BrightnessReport {
    pub fn from_brightness(brightness: u8) -> Self {
        Self {
            brightness,
            is_light: brightness > LIGHT_THRESHOLD,
        }
    }
}

/// Rec. 601 luma in integer arithmetic.
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let weighted = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
    (weighted / 1000) as u8
}

/// Floor of the mean luma over every pixel of `sample`.
pub fn average_luma(sample: &RgbImage) -> u8 {
    let count = u64::from(sample.width()) * u64::from(sample.height());
    if count == 0 {
        return 0;
    }
    let total: u64 = sample
        .pixels()
        .map(|pixel| u64::from(luma(pixel[0], pixel[1], pixel[2])))
        .sum();
    (total / count) as u8
}

pub fn analyze_image(image: &DynamicImage) -> Result<BrightnessReport, AnalysisError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(AnalysisError::Restricted {
            message: "image has no pixels".to_string(),
        });
    }

    let sample = image
        .resize_exact(SAMPLE_SIZE, SAMPLE_SIZE, FilterType::Nearest)
        .to_rgb8();
    Ok(BrightnessReport::from_brightness(average_luma(&sample)))
}

#[cfg(test)]
pub(crate) fn encode_png(image: &RgbImage) -> Vec<u8> {
    let mut bytes = std::io::Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, image::ImageFormat::Png)
        .expect("png encoding should succeed");
    bytes.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn uniform(value: u8) -> RgbImage {
        RgbImage::from_pixel(SAMPLE_SIZE, SAMPLE_SIZE, Rgb([value, value, value]))
    }

    #[test]
    fn luma_matches_weighted_formula() {
        assert_eq!(luma(255, 255, 255), 255);
        assert_eq!(luma(0, 0, 0), 0);
        assert_eq!(luma(255, 0, 0), 76);
        assert_eq!(luma(0, 255, 0), 149);
        assert_eq!(luma(0, 0, 255), 29);
    }

    #[test]
    fn white_is_light_and_black_is_dark() {
        let white = BrightnessReport::from_brightness(average_luma(&uniform(255)));
        assert_eq!(white, BrightnessReport { brightness: 255, is_light: true });

        let black = BrightnessReport::from_brightness(average_luma(&uniform(0)));
        assert_eq!(black, BrightnessReport { brightness: 0, is_light: false });
    }

    #[test]
    fn threshold_is_strictly_greater_than_160() {
        assert!(!BrightnessReport::from_brightness(average_luma(&uniform(160))).is_light);
        assert!(BrightnessReport::from_brightness(average_luma(&uniform(161))).is_light);
    }

    #[test]
    fn average_floors_mixed_samples() {
        let mut sample = RgbImage::from_pixel(2, 1, Rgb([0, 0, 0]));
        sample.put_pixel(1, 0, Rgb([255, 255, 255]));
        assert_eq!(average_luma(&sample), 127);
    }

    #[test]
    fn decoded_large_image_is_downsampled_and_classified() {
        let bytes = encode_png(&RgbImage::from_pixel(640, 360, Rgb([250, 250, 250])));
        let image = image::load_from_memory(&bytes).unwrap();
        let report = analyze_image(&image).unwrap();
        assert_eq!(report.brightness, 250);
        assert!(report.is_light);
    }

    #[test]
    fn empty_image_is_restricted() {
        let err = analyze_image(&DynamicImage::new_rgb8(0, 0)).unwrap_err();
        assert!(matches!(err, AnalysisError::Restricted { .. }));
    }
}
