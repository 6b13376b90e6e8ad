use std::path::PathBuf;

use clap::Parser;
use sdl2::pixels::Color;

use emu8_core::CLOCK_SPEED;

/// Command line arguments for the emulator
#[derive(Parser, Debug)]
#[command(version, about = "A Chip-8 interpreter", long_about = None)]
pub struct Args {
    /// Path to the ROM to run
    pub rom: PathBuf,

    /// Window pixels per Chip-8 pixel
    #[arg(short, long, default_value_t = 20)]
    pub scale: u32,

    /// Instructions executed per second
    #[arg(short, long, default_value_t = CLOCK_SPEED)]
    pub clock_speed: u32,

    /// Color of lit pixels as RRGGBB hex
    #[arg(long, default_value = "FFFFFF", value_parser = parse_color)]
    pub foreground: Color,

    /// Color of unlit pixels as RRGGBB hex
    #[arg(long, default_value = "000000", value_parser = parse_color)]
    pub background: Color,

    /// Frequency of the sound timer's tone in Hz
    #[arg(long, default_value_t = 440)]
    pub tone: u32,

    /// Amplitude of the tone
    #[arg(long, default_value_t = 3000)]
    pub volume: i16,

    /// Audio samples per second
    #[arg(long, default_value_t = 44100)]
    pub sample_rate: u32,
}

/// Everything the frame loop needs to know about presentation
#[derive(Debug, Clone)]
pub struct Config {
    pub rom: PathBuf,
    pub scale: u32,
    pub clock_speed: u32,
    pub foreground: Color,
    pub background: Color,
    pub tone: u32,
    pub volume: i16,
    pub sample_rate: u32,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            rom: args.rom,
            scale: args.scale.max(1),
            clock_speed: args.clock_speed,
            foreground: args.foreground,
            background: args.background,
            tone: args.tone,
            volume: args.volume,
            sample_rate: args.sample_rate,
        }
    }
}

/// Parses an `RRGGBB` hex color, with or without a leading `#`
fn parse_color(s: &str) -> Result<Color, String> {
    let hex = s.trim_start_matches('#');
    if hex.len() != 6 {
        return Err(format!("expected RRGGBB, got {:?}", s));
    }
    let rgb = u32::from_str_radix(hex, 16).map_err(|e| format!("{:?}: {}", s, e))?;
    Ok(Color::RGB((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8))
}
