use std::io::Read;

use crate::constants::{ENTRY_POINT, MAX_ROM_SIZE, MEMORY_SIZE, SPRITE_SHEET};
use crate::error::LoadError;

/// # Memory
/// 4096 bytes of addressable memory.
///
/// ```text
/// 0x000-0x04F  sprite sheet (font)
/// 0x050-0x1FF  unused; reserved for the interpreter on original hardware
/// 0x200-0xFFF  program
/// ```
///
/// Addresses are 16 bits wide but memory is only 12 bits deep, so every access
/// wraps around the end of memory rather than indexing out of bounds.
#[derive(Clone, Debug)]
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Zeroed memory with the sprite sheet installed at address 0
    pub fn new() -> Self {
        let mut bytes = [0; MEMORY_SIZE];
        bytes[..SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);
        Memory { bytes }
    }

    /// Copies a program image into memory at the entry point.
    /// Images that don't fit are rejected before anything is written.
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), LoadError> {
        if program.len() > MAX_ROM_SIZE {
            return Err(LoadError::too_large(program.len()));
        }
        let start = ENTRY_POINT as usize;
        self.bytes[start..start + program.len()].copy_from_slice(program);
        Ok(())
    }

    /// Reads a program image from `reader` and loads it.
    /// At most one byte past the limit is read, so an oversized source reports
    /// `MAX_ROM_SIZE + 1` as its size.
    pub fn load_from_reader(&mut self, reader: &mut dyn Read) -> Result<usize, LoadError> {
        let mut program = Vec::with_capacity(MAX_ROM_SIZE + 1);
        reader
            .take(MAX_ROM_SIZE as u64 + 1)
            .read_to_end(&mut program)?;
        self.load_program(&program)?;
        Ok(program.len())
    }

    pub fn read_byte(&self, addr: u16) -> u8 {
        self.bytes[wrap(addr)]
    }

    pub fn write_byte(&mut self, addr: u16, value: u8) {
        self.bytes[wrap(addr)] = value;
    }

    /// Reads the big-endian word at `addr` and `addr + 1`
    pub fn read_word(&self, addr: u16) -> u16 {
        u16::from(self.read_byte(addr)) << 8 | u16::from(self.read_byte(addr.wrapping_add(1)))
    }

    /// Copies `len` bytes starting at `addr`, wrapping around the end of memory
    pub fn read_bytes(&self, addr: u16, len: usize) -> Vec<u8> {
        (0..len)
            .map(|offset| self.read_byte(addr.wrapping_add(offset as u16)))
            .collect()
    }

    /// Writes `data` starting at `addr`, wrapping around the end of memory
    pub fn write_bytes(&mut self, addr: u16, data: &[u8]) {
        for (offset, &byte) in data.iter().enumerate() {
            self.write_byte(addr.wrapping_add(offset as u16), byte);
        }
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

fn wrap(addr: u16) -> usize {
    addr as usize % MEMORY_SIZE
}
