use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::render::WindowCanvas;

use emu8_core::{FrameBuffer, DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// # Display
/// The Chip-8 display is composed of 64x32 monochrome pixels.
/// The on/off state of these pixels is held in the core's FrameBuffer; this
/// window only gets a call to `render` when that FrameBuffer is updated.
pub struct Display {
    canvas: WindowCanvas,
    foreground: Color,
    background: Color,
}

impl Display {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `scale` the size multiplier for each pixel
    /// * `foreground` the color of lit pixels
    /// * `background` the color of unlit pixels
    pub fn new(
        sdl: &sdl2::Sdl,
        scale: u32,
        foreground: Color,
        background: Color,
    ) -> Result<Self, String> {
        let video_subsystem = sdl.video()?;
        let window = video_subsystem
            .window(
                "Emu-8",
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;
        let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

        canvas.set_draw_color(background);
        canvas.clear();
        canvas.present();

        Ok(Display {
            canvas,
            foreground,
            background,
        })
    }

    /// Formats a Chip-8 FrameBuffer for rendering as an SDL2 texture.
    ///
    /// An SDL2 RGB24 texture is a 1D array of bytes that represent concatenated rows of RGB pixels,
    /// so each pixel of the frame becomes the three channels of its foreground or background color.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    /// * `foreground` the color of lit pixels
    /// * `background` the color of unlit pixels
    fn frame_to_sdl_texture(frame: &FrameBuffer, foreground: Color, background: Color) -> Vec<u8> {
        frame
            .pixels()
            .iter()
            .map(|&lit| if lit { foreground } else { background })
            .flat_map(|color| [color.r, color.g, color.b])
            .collect()
    }

    /// Formats the Chip-8 FrameBuffer as an SDL2 RGB24 texture and renders it.
    /// The texture is stretched over the whole window.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<(), String> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .map_err(|e| e.to_string())?;

        let pixels = Display::frame_to_sdl_texture(frame, self.foreground, self.background);
        let row_bytes = DISPLAY_WIDTH * 3;
        texture.with_lock(None, |buffer: &mut [u8], pitch: usize| {
            // rows may be padded out past the width of the display
            for (y, row) in pixels.chunks(row_bytes).enumerate() {
                buffer[y * pitch..y * pitch + row_bytes].copy_from_slice(row);
            }
        })?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}
