use thiserror::Error;

use crate::constants::MAX_ROM_SIZE;

/// Failures while placing a program image into memory.
/// Nothing is executed once one of these is returned.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("ROM is too large ({size} bytes), max size is {max} bytes")]
    RomTooLarge { size: usize, max: usize },

    #[error("unable to read ROM: {0}")]
    Io(#[from] std::io::Error),
}

impl LoadError {
    pub(crate) fn too_large(size: usize) -> Self {
        LoadError::RomTooLarge {
            size,
            max: MAX_ROM_SIZE,
        }
    }
}

/// Call stack misuse by the running program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    #[error("stack overflow: subroutine calls nested too deeply")]
    Overflow,

    #[error("stack underflow: return with an empty call stack")]
    Underflow,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    /// `pc` is the address of the offending call or return instruction.
    #[error("{source} (at {pc:#06X})")]
    Stack {
        pc: u16,
        #[source]
        source: StackError,
    },
}
