use std::path::Path;

use crate::pipeline::CarouselSummary;

/// Print the run summary to stdout.
pub fn print_summary(summary: &CarouselSummary) {
    println!("animated WebP created");
    println!("  file:     {}", summary.out_path.display());
    println!("  size:     {:.2} MB", size_mb(summary.output_bytes));
    println!("  duration: {:.1} seconds", summary.duration_secs);
    println!("  frames:   {}", summary.frame_count);
}

/// Print the embedding hint for the generated file.
pub fn print_usage_hint(out_path: &Path) {
    println!();
    println!("to use in your website, point the carousel <img> at it:");
    println!("  <img src=\"{}\" alt=\"NFT Preview\" />", out_path.display());
}

/// Message for the empty-input early return.
pub fn print_no_images(images_dir: &Path) {
    println!("no PNG files found in '{}'", images_dir.display());
}

fn size_mb(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}
