use clap::Parser;
use nft_carousel::{CarouselConfig, build_carousel, report};

/// Shuffle the numbered PNGs in `output/images/` into an infinitely
/// looping animated WebP (`nft-carousel.webp`, 3 frames per second).
///
/// All parameters are fixed; there is nothing to configure.
#[derive(Parser, Debug)]
#[command(name = "nft-carousel", version)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    tracing_subscriber::fmt().with_target(false).init();

    let cfg = CarouselConfig::default();
    match build_carousel(&cfg)? {
        Some(summary) => {
            report::print_summary(&summary);
            report::print_usage_hint(&summary.out_path);
        }
        None => report::print_no_images(&cfg.images_dir),
    }

    Ok(())
}
