use emu8_core::constants::SPRITE_SHEET;
use emu8_core::{Chip8, Error, LoadError, StackError, DISPLAY_WIDTH};
use rand::rngs::mock::StepRng;

fn boot(rom: &[u16]) -> Chip8 {
    let bytes: Vec<u8> = rom.iter().flat_map(|word| word.to_be_bytes()).collect();
    let mut chip8 = Chip8::with_rng(StepRng::new(0, 1));
    chip8.load_bytes(&bytes).unwrap();
    chip8
}

fn lit_columns(chip8: &Chip8, y: usize) -> Vec<usize> {
    (0..DISPLAY_WIDTH)
        .filter(|&x| chip8.frame_buffer().get(x, y))
        .collect()
}

#[test]
fn bcd_digits_read_back_into_registers() {
    let mut chip8 = boot(&[
        0x609D, // LD V0, 157
        0xA300, // LD I, 0x300
        0xF033, // LD B, V0
        0xF265, // LD V2, [I]
    ]);
    chip8.run(4).unwrap();
    assert_eq!(chip8.state().registers.v[..3], [1, 5, 7]);
}

#[test]
fn font_glyph_renders_from_sprite_sheet() {
    let mut chip8 = boot(&[
        0x600A, // LD V0, 0xA
        0xF029, // LD F, V0
        0x6100, // LD V1, 0
        0xD115, // DRW V1, V1, 5
    ]);
    chip8.run(4).unwrap();
    let glyph = &SPRITE_SHEET[0xA * 5..0xA * 5 + 5];
    for (y, row) in glyph.iter().enumerate() {
        let expected: Vec<usize> = (0..8).filter(|bit| row & (0x80 >> bit) != 0).collect();
        assert_eq!(lit_columns(&chip8, y), expected);
    }
    assert_eq!(chip8.state().registers.v[0xF], 0);
}

#[test]
fn sprite_at_right_edge_is_clipped_and_self_collides() {
    let mut chip8 = boot(&[
        0x603C, // LD V0, 60
        0x6100, // LD V1, 0
        0xA20C, // LD I, sprite
        0xD011, // DRW V0, V1, 1
        0xD011, // DRW V0, V1, 1
        0x120A, // JP 0x20A
        0xFF00, // sprite
    ]);
    chip8.run(4).unwrap();
    assert_eq!(lit_columns(&chip8, 0), vec![60, 61, 62, 63]);
    assert_eq!(chip8.state().registers.v[0xF], 0);

    chip8.step().unwrap();
    assert!(lit_columns(&chip8, 0).is_empty());
    assert_eq!(chip8.state().registers.v[0xF], 1);
}

#[test]
fn delay_timer_countdown_follows_ticks_not_instructions() {
    let mut chip8 = boot(&[
        0x6003, // LD V0, 3
        0xF015, // LD DT, V0
        0xF107, // loop: LD V1, DT
        0x3100, // SE V1, 0
        0x1204, // JP loop
        0x62FF, // LD V2, 0xFF
        0x120C, // JP 0x20C
    ]);
    for _ in 0..3 {
        chip8.run(50).unwrap();
        assert_eq!(chip8.state().registers.v[0x2], 0x00);
        chip8.tick_timers();
    }
    chip8.run(50).unwrap();
    assert_eq!(chip8.state().registers.v[0x2], 0xFF);
    assert_eq!(chip8.delay_timer(), 0);
}

#[test]
fn key_wait_spins_until_a_key_is_latched() {
    let mut chip8 = boot(&[
        0xF30A, // LD V3, K
        0x6401, // LD V4, 1
    ]);
    for _ in 0..20 {
        chip8.step().unwrap();
        chip8.tick_timers();
    }
    assert!(chip8.awaiting_key());
    assert_eq!(chip8.state().registers.pc, 0x200);

    chip8.key_press(0x7);
    chip8.step().unwrap();
    assert_eq!(chip8.state().registers.v[0x3], 0x7);
    assert_eq!(chip8.state().registers.pc, 0x202);
    chip8.step().unwrap();
    assert_eq!(chip8.state().registers.v[0x4], 0x1);
}

#[test]
fn skip_if_pressed_branches_on_keypad() {
    let mut chip8 = boot(&[
        0x6005, // LD V0, 5
        0xE09E, // SKP V0
        0x1202, // JP 0x202
        0x6101, // LD V1, 1
    ]);
    chip8.run(21).unwrap();
    assert_eq!(chip8.state().registers.v[0x1], 0);
    chip8.key_press(0x5);
    chip8.run(3).unwrap();
    assert_eq!(chip8.state().registers.v[0x1], 1);
}

#[test]
fn unknown_opcodes_are_skipped() {
    let mut chip8 = boot(&[
        0x8AB9, // undefined ALU operation
        0xE0FF, // undefined key operation
        0xF0FF, // undefined misc operation
        0x6A42, // LD VA, 0x42
    ]);
    chip8.run(4).unwrap();
    assert_eq!(chip8.state().registers.v[0xA], 0x42);
    assert_eq!(chip8.state().registers.pc, 0x208);
}

#[test]
fn runaway_recursion_faults() {
    let mut chip8 = boot(&[0x2200]);
    match chip8.run(100) {
        Err(Error::Stack {
            pc: 0x200,
            source: StackError::Overflow,
        }) => {}
        other => panic!("expected stack overflow, got {:?}", other),
    }
}

#[test]
fn oversized_rom_is_rejected() {
    let mut chip8 = Chip8::new();
    let rom = vec![0u8; 4096];
    match chip8.load_bytes(&rom) {
        Err(LoadError::RomTooLarge {
            size: 4096,
            max: 3584,
        }) => {}
        other => panic!("expected RomTooLarge, got {:?}", other),
    }
}
