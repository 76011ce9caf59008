use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use glam::Vec2;

use pixel_effects::sampler::Filter;

#[derive(Parser, Debug)]
#[command(
    name = "pixel-effects",
    version,
    about = "Per-pixel shader effect gallery",
    arg_required_else_help = false
)]
pub struct Cli {
    /// Effect to start with (see `--list`).
    #[arg(long, env = "PIXEL_EFFECTS_EFFECT", default_value = "sinebow")]
    pub effect: String,

    /// Canvas width in pixels.
    #[arg(long, env = "PIXEL_EFFECTS_WIDTH", default_value_t = 480)]
    pub width: usize,

    /// Canvas height in pixels.
    #[arg(long, env = "PIXEL_EFFECTS_HEIGHT", default_value_t = 320)]
    pub height: usize,

    /// Image to apply effects to instead of the built-in card.
    #[arg(long, env = "PIXEL_EFFECTS_IMAGE", value_name = "PATH")]
    pub image: Option<PathBuf>,

    /// How distortion and layer effects sample the content.
    #[arg(long, value_enum, default_value_t = Filter::Nearest)]
    pub filter: Filter,

    /// Seconds a transition takes to run from 0 to 1.
    #[arg(long, value_name = "SECONDS", default_value = "1.5", value_parser = parse_seconds)]
    pub transition_secs: Duration,

    /// Keep transitions running back and forth.
    #[arg(long)]
    pub auto_reverse: bool,

    /// Time, in seconds, to render in export mode.
    #[arg(long, value_name = "SECONDS", default_value_t = 0.0)]
    pub time: f32,

    /// Transition progress (0..1) to render in export mode.
    #[arg(long, value_name = "0..1", default_value_t = 0.5, value_parser = parse_amount)]
    pub amount: f32,

    /// Touch point `X,Y` in canvas pixels for export mode (defaults to the centre).
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    pub touch: Option<Vec2>,

    /// Render a single frame to the provided PNG path then exit.
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Print the available effects and exit.
    #[arg(long)]
    pub list: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}

fn parse_seconds(raw: &str) -> Result<Duration, String> {
    let value: f32 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a number of seconds"))?;
    Duration::try_from_secs_f32(value)
        .map_err(|e| format!("'{raw}' is not a usable duration: {e}"))
}

fn parse_amount(raw: &str) -> Result<f32, String> {
    let value: f32 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if !(0.0..=1.0).contains(&value) {
        return Err(format!("amount must be within 0..1, got {raw}"));
    }
    Ok(value)
}

fn parse_point(raw: &str) -> Result<Vec2, String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{raw}'"))?;
    let x: f32 = x.trim().parse().map_err(|_| format!("invalid x in '{raw}'"))?;
    let y: f32 = y.trim().parse().map_err(|_| format!("invalid y in '{raw}'"))?;
    Ok(Vec2::new(x, y))
}
