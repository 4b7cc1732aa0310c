use std::path::PathBuf;

use anyhow::Context as _;

use crate::{
    collect::collect_numbered_pngs,
    decode::{FrameRgb, decode_rgb},
    encode_ffmpeg::{EncodeConfig, FfmpegWebpEncoder},
    error::{CarouselError, CarouselResult},
    shuffle::shuffle_images,
};

/// Directory scanned for `<integer>.png` input frames.
pub const IMAGES_DIR: &str = "output/images";
/// Animated WebP written to the working directory on every run.
pub const OUTPUT_FILE: &str = "nft-carousel.webp";
/// Display duration per frame (3 frames per second).
pub const FRAME_DURATION_MS: u32 = 333;
/// Lossy WebP quality.
pub const WEBP_QUALITY: u8 = 80;
/// libwebp effort level (6 = best compression).
pub const WEBP_COMPRESSION_LEVEL: u8 = 6;

#[derive(Clone, Debug)]
pub struct CarouselConfig {
    pub images_dir: PathBuf,
    pub out_path: PathBuf,
    pub frame_duration_ms: u32,
    pub quality: u8,
    pub compression_level: u8,
    pub overwrite: bool,
    /// Pins the shuffle order when set. The binary leaves this `None`.
    pub seed: Option<u64>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from(IMAGES_DIR),
            out_path: PathBuf::from(OUTPUT_FILE),
            frame_duration_ms: FRAME_DURATION_MS,
            quality: WEBP_QUALITY,
            compression_level: WEBP_COMPRESSION_LEVEL,
            overwrite: true,
            seed: None,
        }
    }
}

impl CarouselConfig {
    pub fn validate(&self) -> CarouselResult<()> {
        if self.images_dir.as_os_str().is_empty() {
            return Err(CarouselError::validation("images_dir must be non-empty"));
        }
        if self.out_path.as_os_str().is_empty() {
            return Err(CarouselError::validation("out_path must be non-empty"));
        }
        if self.frame_duration_ms == 0 {
            return Err(CarouselError::validation(
                "frame_duration_ms must be non-zero",
            ));
        }
        Ok(())
    }
}

/// Result summary for a completed run.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselSummary {
    pub frame_count: usize,
    /// Playback duration of one loop, in seconds.
    pub duration_secs: f64,
    pub output_bytes: u64,
    pub out_path: PathBuf,
}

/// Build the animated carousel: collect, shuffle, decode, encode, stat.
///
/// Returns `Ok(None)` when the input directory contains no PNG files; in
/// that case nothing is written. All other failures propagate.
///
/// Every decoded frame is held in memory before encoding starts, so memory
/// use is bounded by the total input size.
#[tracing::instrument(skip(cfg))]
pub fn build_carousel(cfg: &CarouselConfig) -> CarouselResult<Option<CarouselSummary>> {
    cfg.validate()?;

    let mut images = collect_numbered_pngs(&cfg.images_dir)?;
    if images.is_empty() {
        return Ok(None);
    }
    tracing::info!(count = images.len(), "collected input frames");

    shuffle_images(&mut images, cfg.seed);

    let mut frames: Vec<FrameRgb> = Vec::with_capacity(images.len());
    for (i, img) in images.iter().enumerate() {
        let bytes = std::fs::read(&img.path)
            .with_context(|| format!("read frame '{}'", img.path.display()))?;
        frames.push(decode_rgb(&bytes)?);

        if (i + 1) % 10 == 0 {
            tracing::info!(loaded = i + 1, total = images.len(), "loading frames");
        }
    }

    // rawvideo input is fixed-size; the first frame sets the canvas.
    let (width, height) = (frames[0].width, frames[0].height);

    let enc_cfg = EncodeConfig {
        width,
        height,
        frame_duration_ms: cfg.frame_duration_ms,
        quality: cfg.quality,
        compression_level: cfg.compression_level,
        out_path: cfg.out_path.clone(),
        overwrite: cfg.overwrite,
    };

    let mut enc = FfmpegWebpEncoder::new(enc_cfg)?;
    for frame in &frames {
        enc.encode_frame(frame)?;
    }
    enc.finish()?;

    let output_bytes = std::fs::metadata(&cfg.out_path)
        .with_context(|| format!("stat output '{}'", cfg.out_path.display()))?
        .len();

    Ok(Some(CarouselSummary {
        frame_count: frames.len(),
        duration_secs: frames.len() as f64 * f64::from(cfg.frame_duration_ms) / 1000.0,
        output_bytes,
        out_path: cfg.out_path.clone(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_fixed_parameters() {
        let cfg = CarouselConfig::default();
        assert_eq!(cfg.images_dir, PathBuf::from("output/images"));
        assert_eq!(cfg.out_path, PathBuf::from("nft-carousel.webp"));
        assert_eq!(cfg.frame_duration_ms, 333);
        assert_eq!(cfg.quality, 80);
        assert_eq!(cfg.compression_level, 6);
        assert!(cfg.overwrite);
        assert!(cfg.seed.is_none());
        cfg.validate().unwrap();
    }

    #[test]
    fn config_validation_catches_bad_values() {
        assert!(
            CarouselConfig {
                images_dir: PathBuf::new(),
                ..CarouselConfig::default()
            }
            .validate()
            .is_err()
        );

        assert!(
            CarouselConfig {
                frame_duration_ms: 0,
                ..CarouselConfig::default()
            }
            .validate()
            .is_err()
        );
    }
}
