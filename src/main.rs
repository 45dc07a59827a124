mod cli;

use anyhow::Context;
use clap::Parser;

use cli::Args;
use snaptext::config::{OverlayColor, OverlayConfig};
use snaptext::domain::load_regions;
use snaptext::overlay::{OverlayState, PressEvent, handle_press, region_channel};
use snaptext::render::{MonospaceLayouter, RasterSurface, draw_overlay};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    run(Args::parse())
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => OverlayConfig::load_from(path)?,
        None => OverlayConfig::load(),
    };
    if let Some(join) = args.join {
        config.join_order = join.into();
    }

    let regions = load_regions(&args.regions)?;
    log::info!("Loaded {} regions", regions.len());

    // Results arrive from a worker, the way a live recognizer delivers them
    let (tx, rx) = region_channel();
    let worker = std::thread::spawn(move || tx.send(regions));

    let mut state = OverlayState::new(config.join_order);
    if !rx.wait_and_apply(&mut state) {
        anyhow::bail!("Region worker exited without delivering results");
    }
    worker
        .join()
        .map_err(|_| anyhow::anyhow!("Region worker panicked"))?;

    for &(x, y) in &args.tap {
        let outcome = handle_press(&mut state, PressEvent::down(x, y));
        if outcome.toggled.is_none() {
            log::info!("Tap at ({}, {}) hit no region", x, y);
        }
    }

    if let Some(output) = &args.output {
        let mut surface = match &args.image {
            Some(path) => {
                let img = image::open(path)
                    .with_context(|| format!("Failed to open image {}", path.display()))?
                    .to_rgba8();
                RasterSurface::from_image(&img)?
            }
            None => RasterSurface::new(args.width, args.height, OverlayColor::WHITE)?,
        };

        let layouter = MonospaceLayouter::new(config.style.text_size, config.style.text_color);
        let view_width = surface.width() as f32;
        draw_overlay(&state, &config.style, &mut surface, &layouter, view_width);
        state.take_redraw();

        surface
            .to_image()
            .save(output)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        log::info!("Wrote overlay to {}", output.display());
    }

    println!("{}", state.selected_text());
    Ok(())
}
