#![forbid(unsafe_code)]

pub mod collect;
pub mod decode;
pub mod encode_ffmpeg;
pub mod error;
pub mod pipeline;
pub mod probe;
pub mod report;
pub mod shuffle;

pub use collect::{NumberedImage, collect_numbered_pngs};
pub use decode::{FrameRgb, decode_rgb};
pub use encode_ffmpeg::{EncodeConfig, FfmpegWebpEncoder, is_ffmpeg_on_path};
pub use error::{CarouselError, CarouselResult};
pub use pipeline::{
    CarouselConfig, CarouselSummary, FRAME_DURATION_MS, IMAGES_DIR, OUTPUT_FILE,
    WEBP_COMPRESSION_LEVEL, WEBP_QUALITY, build_carousel,
};
pub use probe::{WebpAnimInfo, parse_webp_animation, probe_webp_animation};
pub use shuffle::shuffle_images;
