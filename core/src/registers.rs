use crate::constants::{ENTRY_POINT, FLAG_REGISTER};

/// # Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the flag register; several instructions overwrite it
/// - (i) a 16-bit memory address register
/// - (pc) a 16-bit program counter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Registers {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
}

impl Registers {
    pub fn new() -> Self {
        Registers {
            v: [0; 16],
            i: 0,
            pc: ENTRY_POINT,
        }
    }

    pub fn flag(&self) -> u8 {
        self.v[FLAG_REGISTER]
    }

    pub fn set_flag(&mut self, set: bool) {
        self.v[FLAG_REGISTER] = u8::from(set);
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}
