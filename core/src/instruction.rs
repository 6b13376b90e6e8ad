use std::fmt;

use rand::RngCore;

use crate::error::StackError;
use crate::opcode::Opcode;
use crate::operations::*;
use crate::state::State;

/// A decoded Chip-8 instruction.
///
/// `x` and `y` name registers, `kk` is an 8-bit immediate, `n` a 4-bit
/// immediate and `addr` a 12-bit address. Words that don't match a defined
/// instruction within their family decode to `Unknown` and execute as no-ops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// 00E0
    Clear,
    /// 00EE
    Return,
    /// 0nnn
    System { addr: u16 },
    /// 1nnn
    Jump { addr: u16 },
    /// 2nnn
    Call { addr: u16 },
    /// 3xkk
    SkipEqualImmediate { x: u8, kk: u8 },
    /// 4xkk
    SkipNotEqualImmediate { x: u8, kk: u8 },
    /// 5xy_
    SkipEqualRegister { x: u8, y: u8 },
    /// 6xkk
    LoadImmediate { x: u8, kk: u8 },
    /// 7xkk
    AddImmediate { x: u8, kk: u8 },
    /// 8xy0
    Move { x: u8, y: u8 },
    /// 8xy1
    Or { x: u8, y: u8 },
    /// 8xy2
    And { x: u8, y: u8 },
    /// 8xy3
    Xor { x: u8, y: u8 },
    /// 8xy4
    AddRegister { x: u8, y: u8 },
    /// 8xy5
    Subtract { x: u8, y: u8 },
    /// 8xy6
    ShiftRight { x: u8 },
    /// 8xy7
    SubtractNegated { x: u8, y: u8 },
    /// 8xyE
    ShiftLeft { x: u8 },
    /// 9xy_
    SkipNotEqualRegister { x: u8, y: u8 },
    /// Annn
    LoadIndex { addr: u16 },
    /// Bnnn
    JumpOffset { addr: u16 },
    /// Cxkk
    Random { x: u8, kk: u8 },
    /// Dxyn
    Draw { x: u8, y: u8, n: u8 },
    /// Ex9E
    SkipKeyPressed { x: u8 },
    /// ExA1
    SkipKeyNotPressed { x: u8 },
    /// Fx07
    LoadDelay { x: u8 },
    /// Fx0A
    WaitKey { x: u8 },
    /// Fx15
    SetDelay { x: u8 },
    /// Fx18
    SetSound { x: u8 },
    /// Fx1E
    AddIndex { x: u8 },
    /// Fx29
    LoadGlyph { x: u8 },
    /// Fx33
    StoreBcd { x: u8 },
    /// Fx55
    StoreRegisters { x: u8 },
    /// Fx65
    LoadRegisters { x: u8 },
    Unknown(u16),
}

impl Instruction {
    /// Selects the Instruction for a given Opcode
    pub fn decode(op: u16) -> Self {
        use Instruction::*;

        let (x, y, n, kk, addr) = (op.x(), op.y(), op.n(), op.kk(), op.addr());
        match op.family() {
            0x0 => match kk {
                0xE0 => Clear,
                0xEE => Return,
                _ => System { addr },
            },
            0x1 => Jump { addr },
            0x2 => Call { addr },
            0x3 => SkipEqualImmediate { x, kk },
            0x4 => SkipNotEqualImmediate { x, kk },
            0x5 => SkipEqualRegister { x, y },
            0x6 => LoadImmediate { x, kk },
            0x7 => AddImmediate { x, kk },
            0x8 => match n {
                0x0 => Move { x, y },
                0x1 => Or { x, y },
                0x2 => And { x, y },
                0x3 => Xor { x, y },
                0x4 => AddRegister { x, y },
                0x5 => Subtract { x, y },
                0x6 => ShiftRight { x },
                0x7 => SubtractNegated { x, y },
                0xE => ShiftLeft { x },
                _ => Unknown(op),
            },
            0x9 => SkipNotEqualRegister { x, y },
            0xA => LoadIndex { addr },
            0xB => JumpOffset { addr },
            0xC => Random { x, kk },
            0xD => Draw { x, y, n },
            0xE => match kk {
                0x9E => SkipKeyPressed { x },
                0xA1 => SkipKeyNotPressed { x },
                _ => Unknown(op),
            },
            0xF => match kk {
                0x07 => LoadDelay { x },
                0x0A => WaitKey { x },
                0x15 => SetDelay { x },
                0x18 => SetSound { x },
                0x1E => AddIndex { x },
                0x29 => LoadGlyph { x },
                0x33 => StoreBcd { x },
                0x55 => StoreRegisters { x },
                0x65 => LoadRegisters { x },
                _ => Unknown(op),
            },
            _ => Unknown(op),
        }
    }

    /// Applies the instruction to `state`.
    ///
    /// The program counter must already point past this instruction. Only calls
    /// and returns can fail, and they leave `state` untouched when they do.
    pub fn execute(self, state: &mut State, rng: &mut dyn RngCore) -> Result<(), StackError> {
        use Instruction::*;

        match self {
            Clear => clr(state),
            Return => return rts(state),
            System { addr } | Jump { addr } => jump(state, addr),
            Call { addr } => return call(state, addr),
            SkipEqualImmediate { x, kk } => ske(state, x, kk),
            SkipNotEqualImmediate { x, kk } => skne(state, x, kk),
            SkipEqualRegister { x, y } => skre(state, x, y),
            LoadImmediate { x, kk } => load(state, x, kk),
            AddImmediate { x, kk } => add(state, x, kk),
            Move { x, y } => mv(state, x, y),
            Or { x, y } => or(state, x, y),
            And { x, y } => and(state, x, y),
            Xor { x, y } => xor(state, x, y),
            AddRegister { x, y } => addr(state, x, y),
            Subtract { x, y } => sub(state, x, y),
            ShiftRight { x } => shr(state, x),
            SubtractNegated { x, y } => subn(state, x, y),
            ShiftLeft { x } => shl(state, x),
            SkipNotEqualRegister { x, y } => skrne(state, x, y),
            LoadIndex { addr } => loadi(state, addr),
            JumpOffset { addr } => jumpi(state, addr),
            Random { x, kk } => rand(state, rng, x, kk),
            Draw { x, y, n } => draw(state, x, y, n),
            SkipKeyPressed { x } => skpr(state, x),
            SkipKeyNotPressed { x } => skup(state, x),
            LoadDelay { x } => moved(state, x),
            WaitKey { x } => keyd(state, x),
            SetDelay { x } => loads(state, x),
            SetSound { x } => ld(state, x),
            AddIndex { x } => addi(state, x),
            LoadGlyph { x } => ldspr(state, x),
            StoreBcd { x } => bcd(state, x),
            StoreRegisters { x } => stor(state, x),
            LoadRegisters { x } => read(state, x),
            Unknown(op) => log::debug!("ignoring unknown opcode {:04X}", op),
        }
        Ok(())
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Instruction::*;

        match *self {
            Clear => write!(f, "CLS"),
            Return => write!(f, "RET"),
            System { addr } => write!(f, "SYS {:03X}", addr),
            Jump { addr } => write!(f, "JP {:03X}", addr),
            Call { addr } => write!(f, "CALL {:03X}", addr),
            SkipEqualImmediate { x, kk } => write!(f, "SE V{:X}, {:02X}", x, kk),
            SkipNotEqualImmediate { x, kk } => write!(f, "SNE V{:X}, {:02X}", x, kk),
            SkipEqualRegister { x, y } => write!(f, "SE V{:X}, V{:X}", x, y),
            LoadImmediate { x, kk } => write!(f, "LD V{:X}, {:02X}", x, kk),
            AddImmediate { x, kk } => write!(f, "ADD V{:X}, {:02X}", x, kk),
            Move { x, y } => write!(f, "LD V{:X}, V{:X}", x, y),
            Or { x, y } => write!(f, "OR V{:X}, V{:X}", x, y),
            And { x, y } => write!(f, "AND V{:X}, V{:X}", x, y),
            Xor { x, y } => write!(f, "XOR V{:X}, V{:X}", x, y),
            AddRegister { x, y } => write!(f, "ADD V{:X}, V{:X}", x, y),
            Subtract { x, y } => write!(f, "SUB V{:X}, V{:X}", x, y),
            ShiftRight { x } => write!(f, "SHR V{:X}", x),
            SubtractNegated { x, y } => write!(f, "SUBN V{:X}, V{:X}", x, y),
            ShiftLeft { x } => write!(f, "SHL V{:X}", x),
            SkipNotEqualRegister { x, y } => write!(f, "SNE V{:X}, V{:X}", x, y),
            LoadIndex { addr } => write!(f, "LD I, {:03X}", addr),
            JumpOffset { addr } => write!(f, "JP V0, {:03X}", addr),
            Random { x, kk } => write!(f, "RND V{:X}, {:02X}", x, kk),
            Draw { x, y, n } => write!(f, "DRW V{:X}, V{:X}, {:X}", x, y, n),
            SkipKeyPressed { x } => write!(f, "SKP V{:X}", x),
            SkipKeyNotPressed { x } => write!(f, "SKNP V{:X}", x),
            LoadDelay { x } => write!(f, "LD V{:X}, DT", x),
            WaitKey { x } => write!(f, "LD V{:X}, K", x),
            SetDelay { x } => write!(f, "LD DT, V{:X}", x),
            SetSound { x } => write!(f, "LD ST, V{:X}", x),
            AddIndex { x } => write!(f, "ADD I, V{:X}", x),
            LoadGlyph { x } => write!(f, "LD F, V{:X}", x),
            StoreBcd { x } => write!(f, "LD B, V{:X}", x),
            StoreRegisters { x } => write!(f, "LD [I], V{:X}", x),
            LoadRegisters { x } => write!(f, "LD V{:X}, [I]", x),
            Unknown(op) => write!(f, "DW {:04X}", op),
        }
    }
}

#[cfg(test)]
mod test_instruction {
    use super::*;
    use Instruction::*;

    #[test]
    fn test_decodes_family_0() {
        assert_eq!(Instruction::decode(0x00E0), Clear);
        assert_eq!(Instruction::decode(0x00EE), Return);
        assert_eq!(Instruction::decode(0x0123), System { addr: 0x123 });
    }

    #[test]
    fn test_decodes_address_families() {
        assert_eq!(Instruction::decode(0x1ABC), Jump { addr: 0xABC });
        assert_eq!(Instruction::decode(0x2ABC), Call { addr: 0xABC });
        assert_eq!(Instruction::decode(0xAABC), LoadIndex { addr: 0xABC });
        assert_eq!(Instruction::decode(0xBABC), JumpOffset { addr: 0xABC });
    }

    #[test]
    fn test_decodes_immediate_families() {
        assert_eq!(Instruction::decode(0x3122), SkipEqualImmediate { x: 1, kk: 0x22 });
        assert_eq!(Instruction::decode(0x4122), SkipNotEqualImmediate { x: 1, kk: 0x22 });
        assert_eq!(Instruction::decode(0x6122), LoadImmediate { x: 1, kk: 0x22 });
        assert_eq!(Instruction::decode(0x7122), AddImmediate { x: 1, kk: 0x22 });
        assert_eq!(Instruction::decode(0xC10F), Random { x: 1, kk: 0x0F });
        assert_eq!(Instruction::decode(0xD125), Draw { x: 1, y: 2, n: 5 });
    }

    #[test]
    fn test_register_skips_ignore_low_nibble() {
        assert_eq!(Instruction::decode(0x5120), SkipEqualRegister { x: 1, y: 2 });
        assert_eq!(Instruction::decode(0x5127), SkipEqualRegister { x: 1, y: 2 });
        assert_eq!(Instruction::decode(0x9120), SkipNotEqualRegister { x: 1, y: 2 });
        assert_eq!(Instruction::decode(0x912F), SkipNotEqualRegister { x: 1, y: 2 });
    }

    #[test]
    fn test_decodes_family_8() {
        assert_eq!(Instruction::decode(0x8120), Move { x: 1, y: 2 });
        assert_eq!(Instruction::decode(0x8121), Or { x: 1, y: 2 });
        assert_eq!(Instruction::decode(0x8122), And { x: 1, y: 2 });
        assert_eq!(Instruction::decode(0x8123), Xor { x: 1, y: 2 });
        assert_eq!(Instruction::decode(0x8124), AddRegister { x: 1, y: 2 });
        assert_eq!(Instruction::decode(0x8125), Subtract { x: 1, y: 2 });
        assert_eq!(Instruction::decode(0x8126), ShiftRight { x: 1 });
        assert_eq!(Instruction::decode(0x8127), SubtractNegated { x: 1, y: 2 });
        assert_eq!(Instruction::decode(0x812E), ShiftLeft { x: 1 });
    }

    #[test]
    fn test_decodes_input_and_misc_families() {
        assert_eq!(Instruction::decode(0xE19E), SkipKeyPressed { x: 1 });
        assert_eq!(Instruction::decode(0xE1A1), SkipKeyNotPressed { x: 1 });
        assert_eq!(Instruction::decode(0xF107), LoadDelay { x: 1 });
        assert_eq!(Instruction::decode(0xF10A), WaitKey { x: 1 });
        assert_eq!(Instruction::decode(0xF115), SetDelay { x: 1 });
        assert_eq!(Instruction::decode(0xF118), SetSound { x: 1 });
        assert_eq!(Instruction::decode(0xF11E), AddIndex { x: 1 });
        assert_eq!(Instruction::decode(0xF129), LoadGlyph { x: 1 });
        assert_eq!(Instruction::decode(0xF133), StoreBcd { x: 1 });
        assert_eq!(Instruction::decode(0xF155), StoreRegisters { x: 1 });
        assert_eq!(Instruction::decode(0xF165), LoadRegisters { x: 1 });
    }

    #[test]
    fn test_undefined_words_decode_to_unknown() {
        for &op in &[0x8128, 0x812F, 0xE100, 0xE1FF, 0xF100, 0xF1FF] {
            assert_eq!(Instruction::decode(op), Unknown(op));
        }
    }

    #[test]
    fn test_displays_mnemonics() {
        assert_eq!(Instruction::decode(0x00E0).to_string(), "CLS");
        assert_eq!(Instruction::decode(0xD015).to_string(), "DRW V0, V1, 5");
        assert_eq!(Instruction::decode(0xF233).to_string(), "LD B, V2");
        assert_eq!(Instruction::decode(0xE1FF).to_string(), "DW E1FF");
    }
}
