use crate::constants::STACK_DEPTH;
use crate::error::StackError;

/// # Call Stack
/// Return addresses for subroutine calls, at most `STACK_DEPTH` deep.
/// A failed push or pop leaves the stack untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stack {
    entries: [u16; STACK_DEPTH],
    depth: usize,
}

impl Stack {
    pub fn new() -> Self {
        Stack {
            entries: [0; STACK_DEPTH],
            depth: 0,
        }
    }

    pub fn push(&mut self, addr: u16) -> Result<(), StackError> {
        if self.depth == STACK_DEPTH {
            return Err(StackError::Overflow);
        }
        self.entries[self.depth] = addr;
        self.depth += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<u16, StackError> {
        if self.depth == 0 {
            return Err(StackError::Underflow);
        }
        self.depth -= 1;
        Ok(self.entries[self.depth])
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}
