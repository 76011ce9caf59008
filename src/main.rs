// Interactive gallery:
// • The demo card (or --image) is the content; the current effect is applied to it every frame.
// • Left/Right: previous/next effect. Space: run the transition the other way.
// • Hold left mouse: move the touch point (loupe follows it). R: restart the clock. ESC quits.
//
// With --export the same pipeline renders a single frame to PNG instead.

mod cli;

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use glam::{Vec2, Vec3};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use pixel_effects::clock::{EffectClock, Transition};
use pixel_effects::draw::{Drawer, draw_crosshair, draw_text_5x7};
use pixel_effects::registry::{EffectEntry, Param, Registry};
use pixel_effects::{Canvas, EffectInputs, FrameBuffer, content, render};

const BACKDROP: Vec3 = Vec3::new(0.08, 0.08, 0.10);

fn main() -> Result<()> {
    let cli = cli::parse();
    initialise_tracing();

    let registry = Registry::builtin();
    if cli.list {
        print_catalogue(&registry);
        return Ok(());
    }

    let start = registry.index_of(&cli.effect)?;
    let source = load_content(cli.image.as_deref(), cli.width, cli.height)?;

    if let Some(path) = cli.export.as_deref() {
        let entry = registry.entry(start).context("effect index out of range")?;
        let inputs = EffectInputs {
            time: cli.time,
            size: source.size(),
            touch: cli.touch.unwrap_or(source.size() * 0.5),
            amount: cli.amount,
        };
        return export_frame(entry, &source, &inputs, cli.filter, path);
    }

    run_gallery(&cli, &registry, &source, start)
}

fn initialise_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn print_catalogue(registry: &Registry) {
    for entry in registry.iter() {
        let params: Vec<_> = entry.params.iter().map(|p| p.as_str()).collect();
        println!(
            "{:<14} {:<11} [{}] {}",
            entry.name,
            entry.shape(),
            params.join(", "),
            entry.description
        );
    }
}

fn load_content(image: Option<&Path>, width: usize, height: usize) -> Result<Canvas> {
    match image {
        Some(path) => {
            info!(path = %path.display(), width, height, "loading content image");
            Ok(content::load_image(path, width, height)?)
        }
        None => {
            debug!(width, height, "using built-in demo card");
            Ok(content::demo_card(width, height)?)
        }
    }
}

fn export_frame(
    entry: &EffectEntry,
    source: &Canvas,
    inputs: &EffectInputs,
    filter: pixel_effects::Filter,
    path: &Path,
) -> Result<()> {
    let frame = render::render(&entry.effect, source, inputs, filter)?;
    content::save_png(&frame, path)
        .with_context(|| format!("exporting {} frame", entry.name))?;
    info!(
        effect = entry.name,
        path = %path.display(),
        time = inputs.time,
        amount = inputs.amount,
        "exported frame"
    );
    Ok(())
}

fn window_title(entry: &EffectEntry) -> String {
    format!("Pixel Effects: {} ({})", entry.name, entry.shape())
}

fn run_gallery(cli: &cli::Cli, registry: &Registry, source: &Canvas, start: usize) -> Result<()> {
    let (w, h) = (source.width, source.height);
    let mut current = start;
    let mut entry = registry.entry(current).context("effect index out of range")?;

    let mut drawer = Drawer::new(&window_title(entry), w, h)?;
    let mut screen = FrameBuffer::new(w, h);
    let mut output = Canvas::new(w, h)?;

    // Host-owned effect inputs.
    let now = Instant::now();
    let mut clock = EffectClock::new(now);
    let mut transition = Transition::new(cli.transition_secs, cli.auto_reverse);
    // Play transitions in on launch.
    transition.toggle();
    let mut touch = source.size() * 0.5;

    let mut last_fps_time = now;
    let mut frames_this_second: u32 = 0;
    let mut hud_fps_text = String::from("FPS 0.0");
    let mut last_frame_time = now;

    info!(effect = entry.name, "gallery started");

    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();
        let dt = now - last_frame_time;
        last_frame_time = now;

        /* 1) Inputs */
        let step = if drawer.next_pressed_once() {
            1
        } else if drawer.prev_pressed_once() {
            registry.len() - 1
        } else {
            0
        };
        if step != 0 {
            current = (current + step) % registry.len();
            entry = registry.entry(current).context("effect index out of range")?;
            clock.restart(now);
            drawer.set_title(&window_title(entry));
            info!(effect = entry.name, shape = %entry.shape(), "switched effect");
        }
        if drawer.space_pressed_once() {
            transition.toggle();
        }
        if drawer.r_pressed_once() {
            clock.restart(now);
        }
        if drawer.left_mouse_down() {
            if let Some((mx, my)) = drawer.mouse_pos() {
                touch = Vec2::new(mx, my);
            }
        }

        /* 2) Evaluate the effect for every pixel */
        let inputs = EffectInputs {
            time: clock.elapsed(now),
            size: source.size(),
            touch,
            amount: transition.step(dt),
        };
        render::apply(&entry.effect, source, &inputs, cli.filter, &mut output)?;

        /* 3) Composite, overlay, present */
        render::composite(&output, BACKDROP, &mut screen)?;

        if entry.takes(Param::Touch) {
            draw_crosshair(&mut screen, touch.x as i32, touch.y as i32, 12, 0x00_FF_CC_33);
        }

        let mut hud = format!("{} | {}", entry.name, entry.shape());
        if entry.takes(Param::Amount) {
            hud.push_str(&format!(" | AMOUNT {:.2}", inputs.amount));
        }
        if entry.takes(Param::Time) {
            hud.push_str(&format!(" | T {:.1}", inputs.time));
        }
        hud.push_str(" | ");
        hud.push_str(&hud_fps_text);
        draw_text_5x7(&mut screen, 8, 8, &hud, 0x00_FF_FF_FF);

        drawer.present(&screen)?;

        /* 4) FPS counter, once per second */
        frames_this_second += 1;
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            let fps = frames_this_second as f32 / secs;
            debug!(fps, effect = entry.name, "frame rate");
            hud_fps_text = format!("FPS {:.1}", fps);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    info!("gallery closed");
    Ok(())
}
