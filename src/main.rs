use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{Result, bail};
use clap::Parser;
use rand::seq::SliceRandom;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use carousel::constants::*;
use carousel::pager::PointerInput;
use carousel::texture_loader::{load_sorted_image_paths, load_textures};
use carousel::{CarouselConfig, CarouselSlider, PageFrame};

/// Shows a directory of images in an auto-advancing carousel.
#[derive(Debug, Parser)]
#[command(name = "carousel", version)]
struct Args {
    /// Directory holding png/jpg/bmp/gif images
    image_dir: PathBuf,

    /// Time between automatic page changes
    #[arg(long, default_value_t = DEFAULT_DURATION.as_millis() as u64)]
    duration_ms: u64,

    /// Draw the dot page indicators under the cards
    #[arg(long)]
    show_indicators: bool,

    /// Shuffle the images instead of sorting them by name
    #[arg(long)]
    shuffle: bool,

    #[arg(long, default_value_t = WINDOW_WIDTH)]
    width: i32,

    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    height: i32,

    #[arg(long, default_value_t = FPS)]
    fps: u32,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

/// Scales the texture to cover `bounds`, cropping whatever overflows.
fn draw_cover<D: RaylibDraw>(d: &mut D, texture: &Texture2D, frame: PageFrame) {
    let tex_width = texture.width() as f32;
    let tex_height = texture.height() as f32;
    if tex_width <= 0.0 || frame.bounds.width <= 0.0 || frame.bounds.height <= 0.0 {
        return;
    }

    let scale = (frame.bounds.width / tex_width).max(frame.bounds.height / tex_height);
    let source_width = frame.bounds.width / scale;
    let source_height = frame.bounds.height / scale;
    let source = Rectangle::new(
        (tex_width - source_width) * 0.5,
        (tex_height - source_height) * 0.5,
        source_width,
        source_height,
    );

    d.draw_texture_pro(
        texture,
        source,
        frame.bounds,
        Vector2::new(0.0, 0.0),
        0.0,
        Color::WHITE.fade(frame.alpha),
    );
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut paths = load_sorted_image_paths(&args.image_dir)?;
    if args.shuffle {
        paths.shuffle(&mut rand::rng());
    }
    info!(dir = %args.image_dir.display(), images = paths.len(), "loading images");

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let textures = load_textures(&mut rl, &thread, &paths);
    if textures.is_empty() {
        bail!("none of the {} images in {} could be loaded", paths.len(), args.image_dir.display());
    }

    let config = CarouselConfig::new(textures.len())?
        .with_duration(Duration::from_millis(args.duration_ms))
        .with_indicators(args.show_indicators);

    let last_tapped = Rc::new(Cell::new(None::<usize>));
    let tapped = Rc::clone(&last_tapped);
    let mut slider = CarouselSlider::new(config, move |page| {
        info!(page, "page tapped");
        tapped.set(Some(page));
    });

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let width = rl.get_screen_width() as f32;
        let height = rl.get_screen_height() as f32;

        slider.set_bounds(Rectangle::new(0.0, height * 0.1, width, height * 0.8));
        let pointer = PointerInput::from_mouse(&rl);
        slider.update(dt, &pointer);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        slider.draw(&mut d, |d, frame| {
            if let Some(texture) = textures.get(frame.page) {
                draw_cover(d, texture, frame);
            }
        });

        if let Some(page) = last_tapped.get() {
            d.draw_text(&format!("Tapped page {}", page + 1), 20, 20, 20, Color::RAYWHITE);
        }
    }

    Ok(())
}
