pub use chip8::Chip8;
pub use constants::{CLOCK_SPEED, DISPLAY_HEIGHT, DISPLAY_WIDTH, KEY_COUNT, TIMER_HZ};
pub use error::{Error, LoadError, StackError};
pub use frame::FrameBuffer;
pub use instruction::Instruction;
pub use keypad::Keypad;
pub use memory::Memory;
pub use opcode::Opcode;
pub use registers::Registers;
pub use stack::Stack;
pub use state::State;
pub use timers::Timers;

mod chip8;
pub mod constants;
mod error;
mod frame;
mod instruction;
mod keypad;
mod memory;
mod opcode;
mod operations;
mod registers;
mod stack;
mod state;
mod timers;
