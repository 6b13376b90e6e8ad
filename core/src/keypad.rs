use crate::constants::KEY_COUNT;

/// # Keypad
/// Pressed status of the hexadecimal keys 0..F.
///
/// Written by the host between steps, read by instructions. Key identifiers
/// are masked to their low nibble so any register value names a valid key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Keypad {
    keys: [bool; KEY_COUNT],
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: u8) {
        self.keys[index(key)] = true;
    }

    pub fn release(&mut self, key: u8) {
        self.keys[index(key)] = false;
    }

    pub fn is_pressed(&self, key: u8) -> bool {
        self.keys[index(key)]
    }

    /// The lowest key identifier currently held down
    pub fn first_pressed(&self) -> Option<u8> {
        self.keys.iter().position(|&pressed| pressed).map(|key| key as u8)
    }
}

fn index(key: u8) -> usize {
    usize::from(key & 0xF)
}
