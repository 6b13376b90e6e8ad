/// # Opcodes
///
/// A Chip-8 opcode is one big-endian 16-bit word. The top nibble picks a family;
/// the remaining twelve bits are read as whichever operand fields that family needs.
///
/// ```text
///  f x y n
///  ^ ^ ^ ^
///  | | | +-- n:    sprite height, or 8xyn / 5xyn sub-operation
///  | | +---- y:    second register
///  | +------ x:    first register, or the last register of a V0..=Vx range
///  +-------- family
///      kk:   low byte, an immediate or Ex/Fx sub-operation
///     addr:  low twelve bits, a memory address
/// ```
///
/// Field extraction never fails. Whether a combination means anything is decided by
/// `Instruction::decode`.
pub trait Opcode {
    /// `[f___]`
    fn family(&self) -> u8;

    /// `[_x__]`
    fn x(&self) -> u8;

    /// `[__y_]`
    fn y(&self) -> u8;

    /// `[___n]`
    fn n(&self) -> u8;

    /// `[__kk]`
    fn kk(&self) -> u8;

    /// `[_adr]`
    fn addr(&self) -> u16;
}

impl Opcode for u16 {
    fn family(&self) -> u8 {
        (self >> 12) as u8
    }

    fn x(&self) -> u8 {
        ((self >> 8) & 0xF) as u8
    }

    fn y(&self) -> u8 {
        ((self >> 4) & 0xF) as u8
    }

    fn n(&self) -> u8 {
        (self & 0xF) as u8
    }

    fn kk(&self) -> u8 {
        (self & 0xFF) as u8
    }

    fn addr(&self) -> u16 {
        self & 0x0FFF
    }
}
