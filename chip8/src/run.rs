use std::fs::File;
use std::io::BufReader;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use emu8_core::{Chip8, TIMER_HZ};
use emu8_display::{Audio, Display};

use crate::config::Config;
use crate::keymap::keymap;

/// Runs the ROM named by `config` until the window is closed or Escape is pressed.
///
/// Each ~60Hz frame:
/// - handles input
/// - runs `clock_speed / 60` instructions
/// - renders the frame if it changed
/// - ticks the timers and starts or stops the tone
/// - sleeps off whatever is left of the frame
///
/// Space pauses and resumes; nothing runs and the timers hold while paused.
pub fn run(config: &Config) -> Result<()> {
    let mut chip8: Chip8 = Chip8::new();

    // Load ROM
    let file = File::open(&config.rom)
        .with_context(|| format!("unable to open {}", config.rom.display()))?;
    let mut reader = BufReader::new(file);
    chip8
        .load_rom(&mut reader)
        .with_context(|| format!("unable to load {}", config.rom.display()))?;

    // Get SDL2 context
    let sdl: sdl2::Sdl = sdl2::init().map_err(anyhow::Error::msg)?;
    let mut display = Display::new(&sdl, config.scale, config.foreground, config.background)
        .map_err(anyhow::Error::msg)?;
    let mut audio = Audio::new(&sdl, config.tone, config.sample_rate, config.volume)
        .map_err(anyhow::Error::msg)?;
    let mut events = sdl.event_pump().map_err(anyhow::Error::msg)?;

    // Set initial timing
    let frame_time = Duration::from_secs(1) / TIMER_HZ;
    let cycles_per_frame = (config.clock_speed / TIMER_HZ) as usize;

    let mut paused = false;

    'event: loop {
        let frame_start = Instant::now();

        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'event,
                Event::KeyDown {
                    keycode: Some(Keycode::Space),
                    repeat: false,
                    ..
                } => {
                    paused = !paused;
                    log::info!("{}", if paused { "paused" } else { "resumed" });
                }
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        chip8.key_press(kc);
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        chip8.key_release(kc);
                    }
                }
                _ => continue,
            };
        }

        // Update state
        if paused {
            audio.set_playing(false);
        } else {
            chip8.run(cycles_per_frame)?;
            if let Some(frame) = chip8.get_frame() {
                display.render(frame).map_err(anyhow::Error::msg)?;
            }
            let beeping = chip8.tick_timers();
            audio.set_playing(beeping);
        }

        // Handle timing
        let elapsed = frame_start.elapsed();
        if frame_time > elapsed {
            std::thread::sleep(frame_time - elapsed);
        }
    }

    Ok(())
}
