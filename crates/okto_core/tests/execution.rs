use okto_core::{Emulator, FONTSET, FONTSET_START, SCREEN_WIDTH, START_ADDRESS};

fn pixel(emulator: &Emulator, x: usize, y: usize) -> u8 {
    emulator.video()[y * SCREEN_WIDTH + x]
}

#[test]
fn load_set_and_draw_a_font_glyph() {
    let mut emulator = Emulator::with_seed(1);
    let rom: &[u8] = &[
        0x6A, 0x3C, // LD VA, 0x3C
        0xA2, 0x00, // LD I, 0x200
        0x60, 0x00, // LD V0, 0x00
        0xF0, 0x29, // LD F, V0   -> I = glyph "0"
        0x61, 0x00, // LD V1, 0x00
        0xD0, 0x15, // DRW V0, V1, 5
    ];
    emulator.load_rom(rom).unwrap();

    emulator.cycle().unwrap();
    assert_eq!(emulator.v()[0xA], 0x3C);
    assert_eq!(emulator.pc(), 0x202);

    emulator.cycle().unwrap();
    assert_eq!(emulator.index(), 0x200);

    for _ in 0..4 {
        emulator.cycle().unwrap();
    }
    assert_eq!(emulator.index(), FONTSET_START as u16);
    assert_eq!(emulator.v()[0xF], 0, "blank screen, no collision");
    for (row, &byte) in FONTSET[..5].iter().enumerate() {
        for col in 0..8 {
            assert_eq!(pixel(&emulator, col, row), (byte >> (7 - col)) & 1);
        }
    }
}

#[test]
fn a_counting_loop_runs_to_completion() {
    // V0 counts 0..=4 while V1 accumulates; SE breaks out of the loop and
    // the program parks on a self-jump.
    let rom: &[u8] = &[
        0x60, 0x00, // 0x200: LD V0, 0
        0x61, 0x00, // 0x202: LD V1, 0
        0x81, 0x04, // 0x204: ADD V1, V0
        0x70, 0x01, // 0x206: ADD V0, 1
        0x30, 0x05, // 0x208: SE V0, 5
        0x12, 0x04, // 0x20A: JP 0x204
        0x12, 0x0C, // 0x20C: JP 0x20C
    ];
    let mut emulator = Emulator::with_seed(1);
    emulator.load_rom(rom).unwrap();
    for _ in 0..200 {
        emulator.cycle().unwrap();
    }
    assert_eq!(emulator.pc(), 0x20C);
    assert_eq!(emulator.v()[0], 5);
    assert_eq!(emulator.v()[1], 1 + 2 + 3 + 4);
}

#[test]
fn subroutines_nest_and_return() {
    let rom: &[u8] = &[
        0x22, 0x06, // 0x200: CALL 0x206
        0x12, 0x04, // 0x202: JP 0x204
        0x12, 0x04, // 0x204: JP 0x204 (park)
        0x62, 0x11, // 0x206: LD V2, 0x11
        0x22, 0x0C, // 0x208: CALL 0x20C
        0x00, 0xEE, // 0x20A: RET
        0x63, 0x22, // 0x20C: LD V3, 0x22
        0x00, 0xEE, // 0x20E: RET
    ];
    let mut emulator = Emulator::with_seed(1);
    emulator.load_rom(rom).unwrap();
    for _ in 0..10 {
        emulator.cycle().unwrap();
    }
    assert_eq!(emulator.v()[2], 0x11);
    assert_eq!(emulator.v()[3], 0x22);
    assert_eq!(emulator.sp(), 0);
    assert_eq!(emulator.pc(), 0x204);
}

#[test]
fn reset_mid_execution_returns_to_the_initial_state() {
    let mut emulator = Emulator::with_seed(1);
    emulator.load_rom(&[0x6A, 0x3C, 0x12, 0x00]).unwrap();
    for _ in 0..5 {
        emulator.cycle().unwrap();
    }
    emulator.reset();
    assert_eq!(emulator.pc(), START_ADDRESS);
    assert_eq!(emulator.sp(), 0);
    assert_eq!(emulator.index(), 0);
    assert_eq!(emulator.v(), &[0; 16]);
    assert!(emulator.video().iter().all(|&p| p == 0));
}
