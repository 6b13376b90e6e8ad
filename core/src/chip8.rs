use std::io::Read;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::error::{Error, LoadError};
use crate::frame::FrameBuffer;
use crate::instruction::Instruction;
use crate::state::State;

/// # Chip-8
/// The interpreter engine: one machine `state` plus the `rng` feeding `RND`.
///
/// The host owns the cadence. `step` executes exactly one instruction and never
/// touches the timers; `tick_timers` is the only thing that decrements them.
/// Input arrives through `key_press`/`key_release` and pixels leave through
/// `get_frame`.
pub struct Chip8 {
    state: State,
    rng: Box<dyn RngCore>,
}

impl Chip8 {
    /// A Chip-8 whose random instruction draws from an entropy-seeded generator
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// A Chip-8 whose random instruction draws from `rng`
    pub fn with_rng<R: RngCore + 'static>(rng: R) -> Self {
        Chip8 {
            state: State::new(),
            rng: Box::new(rng),
        }
    }

    /// Resets to power-on and reads a program image from `reader` into 0x200.
    /// On failure the current state is left as it was.
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<(), LoadError> {
        let mut state = State::new();
        let size = state.memory.load_from_reader(reader)?;
        log::info!("loaded {} byte ROM", size);
        self.state = state;
        Ok(())
    }

    /// Load a rom that is already in memory
    pub fn load_bytes(&mut self, rom: &[u8]) -> Result<(), LoadError> {
        let mut reader = rom;
        self.load_rom(&mut reader)
    }

    /// Runs one instruction
    /// - if awaiting a keypress, polls the keypad instead of fetching
    /// - otherwise fetches, decodes and executes the next opcode
    ///
    /// A stack fault leaves the program counter on the offending instruction.
    pub fn step(&mut self) -> Result<(), Error> {
        if let Some(register) = self.state.register_needing_key {
            if let Some(key) = self.state.keypad.first_pressed() {
                log::debug!("key {:X} pressed, resuming with V{:X}", key, register);
                self.state.registers.v[register as usize] = key;
                self.state.registers.pc = self.state.registers.pc.wrapping_add(2);
                self.state.register_needing_key = None;
            }
            return Ok(());
        }

        let pc = self.state.registers.pc;
        let op = self.get_op();
        self.state.registers.pc = pc.wrapping_add(2);

        let instruction = Instruction::decode(op);
        log::trace!(
            "{:03X}: {:04X} {:<16} v{:02X?} i{:04X}",
            pc,
            op,
            instruction.to_string(),
            self.state.registers.v,
            self.state.registers.i
        );

        if let Err(source) = instruction.execute(&mut self.state, self.rng.as_mut()) {
            self.state.registers.pc = pc;
            return Err(Error::Stack { pc, source });
        }
        Ok(())
    }

    /// Advances the CPU by `cycles` steps, stopping at the first fault
    pub fn run(&mut self, cycles: usize) -> Result<(), Error> {
        for _ in 0..cycles {
            self.step()?;
        }
        Ok(())
    }

    /// Decrements the delay and sound timers; call at `TIMER_HZ`.
    /// Returns whether the tone should play for the tick just taken.
    pub fn tick_timers(&mut self) -> bool {
        self.state.timers.tick()
    }

    /// Latches `key` (low nibble) as held
    pub fn key_press(&mut self, key: u8) {
        self.state.keypad.press(key);
    }

    /// Latches `key` (low nibble) as released
    pub fn key_release(&mut self, key: u8) {
        self.state.keypad.release(key);
    }

    /// Returns the FrameBuffer if the display should be redrawn
    /// and marks it as drawn
    pub fn get_frame(&mut self) -> Option<&FrameBuffer> {
        if self.state.draw_flag {
            self.state.draw_flag = false;
            Some(&self.state.frame_buffer)
        } else {
            None
        }
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// Whether a tone should currently be playing
    pub fn sound_active(&self) -> bool {
        self.state.timers.sound_active()
    }

    pub fn delay_timer(&self) -> u8 {
        self.state.timers.delay
    }

    pub fn sound_timer(&self) -> u8 {
        self.state.timers.sound
    }

    /// Whether execution is suspended waiting for a key press
    pub fn awaiting_key(&self) -> bool {
        self.state.register_needing_key.is_some()
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// The big-endian word at the program counter
    fn get_op(&self) -> u16 {
        self.state.memory.read_word(self.state.registers.pc)
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
