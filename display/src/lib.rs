pub use audio::{Audio, SquareWave};
pub use display::Display;

mod audio;
mod display;
