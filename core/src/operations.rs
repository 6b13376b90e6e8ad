use rand::RngCore;

use crate::constants::GLYPH_HEIGHT;
use crate::error::StackError;
use crate::state::State;

// Every operation runs after the fetch has already moved pc past the
// instruction, so "skip" means one more instruction and calls push the
// address of the instruction that follows the call.

fn skip_if(state: &mut State, condition: bool) {
    if condition {
        state.registers.pc = state.registers.pc.wrapping_add(2);
    }
}

fn vx(state: &State, x: u8) -> u8 {
    state.registers.v[x as usize]
}

/// clear
pub fn clr(state: &mut State) {
    state.frame_buffer.clear();
    state.draw_flag = true;
}

/// PC = STACK.pop()
pub fn rts(state: &mut State) -> Result<(), StackError> {
    state.registers.pc = state.stack.pop()?;
    Ok(())
}

/// PC = addr
pub fn jump(state: &mut State, addr: u16) {
    state.registers.pc = addr;
}

/// STACK.push(PC); PC = addr
pub fn call(state: &mut State, addr: u16) -> Result<(), StackError> {
    state.stack.push(state.registers.pc)?;
    state.registers.pc = addr;
    Ok(())
}

/// if Vx == kk then pc += 2
pub fn ske(state: &mut State, x: u8, kk: u8) {
    let condition = vx(state, x) == kk;
    skip_if(state, condition);
}

/// if Vx != kk then pc += 2
pub fn skne(state: &mut State, x: u8, kk: u8) {
    let condition = vx(state, x) != kk;
    skip_if(state, condition);
}

/// if Vx == Vy then pc += 2
pub fn skre(state: &mut State, x: u8, y: u8) {
    let condition = vx(state, x) == vx(state, y);
    skip_if(state, condition);
}

/// Vx = kk
pub fn load(state: &mut State, x: u8, kk: u8) {
    state.registers.v[x as usize] = kk;
}

/// Vx += kk
/// Add kk to Vx; allow for overflow but implicitly drop it
pub fn add(state: &mut State, x: u8, kk: u8) {
    let v = &mut state.registers.v;
    v[x as usize] = v[x as usize].wrapping_add(kk);
}

/// Vx = Vy
pub fn mv(state: &mut State, x: u8, y: u8) {
    let v = &mut state.registers.v;
    v[x as usize] = v[y as usize];
}

/// Vx |= Vy
pub fn or(state: &mut State, x: u8, y: u8) {
    let v = &mut state.registers.v;
    v[x as usize] |= v[y as usize];
}

/// Vx &= Vy
pub fn and(state: &mut State, x: u8, y: u8) {
    let v = &mut state.registers.v;
    v[x as usize] &= v[y as usize];
}

/// Vx ^= Vy
pub fn xor(state: &mut State, x: u8, y: u8) {
    let v = &mut state.registers.v;
    v[x as usize] ^= v[y as usize];
}

// The arithmetic below writes VF before the result, so an operation naming VF
// as an operand sees the freshly written flag and one targeting VF loses it.

/// Vx += Vy; VF = overflow
pub fn addr(state: &mut State, x: u8, y: u8) {
    let carry = u16::from(vx(state, x)) + u16::from(vx(state, y)) > 0xFF;
    state.registers.set_flag(carry);
    let v = &mut state.registers.v;
    v[x as usize] = v[x as usize].wrapping_add(v[y as usize]);
}

/// Vx -= Vy; VF = !borrow
pub fn sub(state: &mut State, x: u8, y: u8) {
    let no_borrow = vx(state, y) <= vx(state, x);
    state.registers.set_flag(no_borrow);
    let v = &mut state.registers.v;
    v[x as usize] = v[x as usize].wrapping_sub(v[y as usize]);
}

/// VF = Vx & 1; Vx >>= 1
pub fn shr(state: &mut State, x: u8) {
    let lsb = vx(state, x) & 0x1 == 0x1;
    state.registers.set_flag(lsb);
    state.registers.v[x as usize] >>= 1;
}

/// Vx = Vy - Vx; VF = !borrow
pub fn subn(state: &mut State, x: u8, y: u8) {
    let no_borrow = vx(state, x) <= vx(state, y);
    state.registers.set_flag(no_borrow);
    let v = &mut state.registers.v;
    v[x as usize] = v[y as usize].wrapping_sub(v[x as usize]);
}

/// VF = Vx >> 7; Vx <<= 1
pub fn shl(state: &mut State, x: u8) {
    let msb = vx(state, x) & 0x80 == 0x80;
    state.registers.set_flag(msb);
    state.registers.v[x as usize] <<= 1;
}

/// if Vx != Vy then pc += 2
pub fn skrne(state: &mut State, x: u8, y: u8) {
    let condition = vx(state, x) != vx(state, y);
    skip_if(state, condition);
}

/// I = addr
pub fn loadi(state: &mut State, addr: u16) {
    state.registers.i = addr;
}

/// PC = V0 + addr
pub fn jumpi(state: &mut State, addr: u16) {
    state.registers.pc = addr + u16::from(state.registers.v[0x0]);
}

/// Vx = random_byte & kk
pub fn rand(state: &mut State, rng: &mut dyn RngCore, x: u8, kk: u8) {
    let random_byte = (rng.next_u32() & 0xFF) as u8;
    state.registers.v[x as usize] = random_byte & kk;
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs the n byte sprite at I onto the FrameBuffer at Vx, Vy.
/// Sets VF if any pixels were erased
pub fn draw(state: &mut State, x: u8, y: u8, n: u8) {
    let (col, row) = (vx(state, x), vx(state, y));
    let sprite = state.memory.read_bytes(state.registers.i, n as usize);
    let collision = state.frame_buffer.draw_sprite(col, row, &sprite);
    state.registers.set_flag(collision);
    state.draw_flag = true;
}

/// if Vx.pressed then pc += 2
pub fn skpr(state: &mut State, x: u8) {
    let condition = state.keypad.is_pressed(vx(state, x));
    skip_if(state, condition);
}

/// if !Vx.pressed then pc += 2
pub fn skup(state: &mut State, x: u8) {
    let condition = !state.keypad.is_pressed(vx(state, x));
    skip_if(state, condition);
}

/// Vx = DT
pub fn moved(state: &mut State, x: u8) {
    state.registers.v[x as usize] = state.timers.delay;
}

/// await keypress for Vx
/// A key that is already down is taken immediately, otherwise execution
/// suspends until the keypad shows one.
pub fn keyd(state: &mut State, x: u8) {
    match state.keypad.first_pressed() {
        Some(key) => state.registers.v[x as usize] = key,
        None => {
            log::debug!("V{:X} awaiting key press", x);
            state.registers.pc = state.registers.pc.wrapping_sub(2);
            state.register_needing_key = Some(x);
        }
    }
}

/// DT = Vx
pub fn loads(state: &mut State, x: u8) {
    state.timers.delay = vx(state, x);
}

/// ST = Vx
pub fn ld(state: &mut State, x: u8) {
    state.timers.sound = vx(state, x);
}

/// I += Vx
/// Wraps within 16 bits and leaves VF alone
pub fn addi(state: &mut State, x: u8) {
    state.registers.i = state.registers.i.wrapping_add(u16::from(vx(state, x)));
}

/// I = (Vx & 0xF) * 5
/// Set I to the memory address of the glyph for the low nibble of Vx
/// See constants::SPRITE_SHEET for more details
pub fn ldspr(state: &mut State, x: u8) {
    state.registers.i = u16::from(vx(state, x) & 0xF) * GLYPH_HEIGHT;
}

/// mem[I..I+3] = bcd(Vx)
/// Store BCD repr of Vx in memory starting at address i
pub fn bcd(state: &mut State, x: u8) {
    let value = vx(state, x);
    let bcd = [value / 100, value / 10 % 10, value % 10];
    state.memory.write_bytes(state.registers.i, &bcd);
}

/// mem[I..=I+x] = V0..=Vx
pub fn stor(state: &mut State, x: u8) {
    let registers = state.registers.v;
    state
        .memory
        .write_bytes(state.registers.i, &registers[..=x as usize]);
}

/// V0..=Vx = mem[I..=I+x]
pub fn read(state: &mut State, x: u8) {
    let bytes = state.memory.read_bytes(state.registers.i, x as usize + 1);
    state.registers.v[..=x as usize].copy_from_slice(&bytes);
}
