use crate::frame::FrameBuffer;
use crate::keypad::Keypad;
use crate::memory::Memory;
use crate::registers::Registers;
use crate::stack::Stack;
use crate::timers::Timers;

/// The complete Chip-8 machine state
///
/// ## CPU
/// - `registers`: V0..VF, I and the program counter
/// - `stack`: return addresses for up to 16 nested subroutine calls
///
/// Timers
/// - 2 8-bit timers (delay & sound)
/// - decremented at 60Hz by the host, never by executing instructions
///
/// ## Memory
/// - 4096 bytes of addressable memory, sprite sheet at 0x000, program at 0x200
/// - 64x32 frame buffer
///     - stores the contents of the next frame to be drawn
///
/// ## Input
/// - pressed status of keys 0..F
/// - Emulation halts while `register_needing_key` is Some, until a key is pressed
#[derive(Clone, Debug)]
pub struct State {
    pub registers: Registers,
    pub stack: Stack,
    pub timers: Timers,
    pub memory: Memory,
    pub frame_buffer: FrameBuffer,
    pub draw_flag: bool,
    pub keypad: Keypad,
    pub register_needing_key: Option<u8>,
}

impl State {
    pub fn new() -> Self {
        State {
            registers: Registers::new(),
            stack: Stack::new(),
            timers: Timers::new(),
            memory: Memory::new(),
            frame_buffer: FrameBuffer::new(),
            draw_flag: false,
            keypad: Keypad::new(),
            register_needing_key: None,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
