/// Bytes of addressable memory
pub const MEMORY_SIZE: usize = 4096;

/// ROMs are loaded into memory starting at 0x200
pub const ENTRY_POINT: u16 = 0x200;

/// The largest ROM that fits between the entry point and the end of memory
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - ENTRY_POINT as usize;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Maximum nesting depth of subroutine calls
pub const STACK_DEPTH: usize = 16;

/// Number of keys on the hexadecimal keypad (0..F)
pub const KEY_COUNT: usize = 16;

/// Index of VF, the flag register
pub const FLAG_REGISTER: usize = 0xF;

/// Number of rows in a single font glyph
pub const GLYPH_HEIGHT: u16 = 5;

/// Instructions executed per second unless the host asks for something else
pub const CLOCK_SPEED: u32 = 700;

/// Rate at which the delay and sound timers decrement
pub const TIMER_HZ: u32 = 60;

/// # Sprite Sheet
/// Hexadecimal glyphs 0..F, each 8 pixels wide and 5 rows tall, stored at address 0.
///
/// Glyph `k` starts at `k * GLYPH_HEIGHT`, e.g. the glyph for 0 is:
/// ```text
/// 0xF0  ****
/// 0x90  *  *
/// 0x90  *  *
/// 0x90  *  *
/// 0xF0  ****
/// ```
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
