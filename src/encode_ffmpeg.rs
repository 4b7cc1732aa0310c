use std::{
    path::{Path, PathBuf},
    process::{Child, ChildStdin, Command, Stdio},
};

use crate::{
    decode::FrameRgb,
    error::{CarouselError, CarouselResult},
};

/// WebP container limit: frame sides are stored as 14-bit values.
const WEBP_MAX_DIMENSION: u32 = 16_383;

#[derive(Clone, Debug)]
pub struct EncodeConfig {
    pub width: u32,
    pub height: u32,
    /// Display duration of every frame, in milliseconds.
    pub frame_duration_ms: u32,
    /// Lossy quality, 0..=100.
    pub quality: u8,
    /// libwebp effort level, 0..=6.
    pub compression_level: u8,
    pub out_path: PathBuf,
    pub overwrite: bool,
}

impl EncodeConfig {
    pub fn validate(&self) -> CarouselResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CarouselError::validation(
                "encode width/height must be non-zero",
            ));
        }
        if self.width > WEBP_MAX_DIMENSION || self.height > WEBP_MAX_DIMENSION {
            return Err(CarouselError::validation(format!(
                "encode width/height must be <= {WEBP_MAX_DIMENSION} (WebP container limit)"
            )));
        }
        if self.frame_duration_ms == 0 {
            return Err(CarouselError::validation(
                "encode frame duration must be non-zero",
            ));
        }
        if self.quality > 100 {
            return Err(CarouselError::validation("encode quality must be 0..=100"));
        }
        if self.compression_level > 6 {
            return Err(CarouselError::validation(
                "encode compression level must be 0..=6",
            ));
        }
        Ok(())
    }

    pub fn with_out_path(mut self, out_path: impl Into<PathBuf>) -> Self {
        self.out_path = out_path.into();
        self
    }
}

pub fn is_ffmpeg_on_path() -> bool {
    std::process::Command::new("ffmpeg")
        .arg("-version")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

pub fn ensure_parent_dir(path: &Path) -> CarouselResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Animated WebP encoder backed by the system `ffmpeg` binary.
///
/// Raw rgb24 frames are piped to stdin at a rate of
/// `1000 / frame_duration_ms` fps; the muxer's loop flag is set to infinite.
pub struct FfmpegWebpEncoder {
    cfg: EncodeConfig,
    child: Child,
    stdin: Option<ChildStdin>,
    frame_bytes: usize,
}

impl FfmpegWebpEncoder {
    pub fn new(cfg: EncodeConfig) -> CarouselResult<Self> {
        cfg.validate()?;
        ensure_parent_dir(&cfg.out_path)?;

        if !cfg.overwrite && cfg.out_path.exists() {
            return Err(CarouselError::validation(format!(
                "output file '{}' already exists",
                cfg.out_path.display()
            )));
        }

        if !is_ffmpeg_on_path() {
            return Err(CarouselError::encode(
                "ffmpeg is required for animated WebP encoding, but was not found on PATH",
            ));
        }

        // We intentionally use the system `ffmpeg` binary rather than a
        // libwebp binding to avoid native dev header/lib requirements.
        let mut cmd = Command::new("ffmpeg");
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        if cfg.overwrite {
            cmd.arg("-y");
        } else {
            cmd.arg("-n");
        }

        cmd.args([
            "-loglevel",
            "error",
            "-f",
            "rawvideo",
            "-pix_fmt",
            "rgb24",
            "-s",
            &format!("{}x{}", cfg.width, cfg.height),
            "-r",
            &format!("1000/{}", cfg.frame_duration_ms),
            "-i",
            "pipe:0",
            "-c:v",
            "libwebp",
            "-lossless",
            "0",
            "-q:v",
            &cfg.quality.to_string(),
            "-compression_level",
            &cfg.compression_level.to_string(),
            "-loop",
            "0",
        ])
        .arg(&cfg.out_path);

        let mut child = cmd.spawn().map_err(|e| {
            CarouselError::encode(format!(
                "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
            ))
        })?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| CarouselError::encode("failed to open ffmpeg stdin (unexpected)"))?;

        Ok(Self {
            frame_bytes: (cfg.width as usize) * (cfg.height as usize) * 3,
            cfg,
            child,
            stdin: Some(stdin),
        })
    }

    pub fn encode_frame(&mut self, frame: &FrameRgb) -> CarouselResult<()> {
        if frame.width != self.cfg.width || frame.height != self.cfg.height {
            return Err(CarouselError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, self.cfg.width, self.cfg.height
            )));
        }

        if frame.data.len() != self.frame_bytes {
            return Err(CarouselError::validation(
                "frame.data size mismatch with width*height*3",
            ));
        }

        let Some(stdin) = self.stdin.as_mut() else {
            return Err(CarouselError::encode("ffmpeg encoder is already finalized"));
        };

        use std::io::Write as _;
        stdin.write_all(&frame.data).map_err(|e| {
            CarouselError::encode(format!("failed to write frame to ffmpeg stdin: {e}"))
        })?;

        Ok(())
    }

    pub fn finish(mut self) -> CarouselResult<()> {
        drop(self.stdin.take());

        let output = self.child.wait_with_output().map_err(|e| {
            CarouselError::encode(format!("failed to wait for ffmpeg to finish: {e}"))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CarouselError::encode(format!(
                "ffmpeg exited with status {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}
