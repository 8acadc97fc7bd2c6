use super::Instruction::{self, *};

#[test]
fn decode_covers_the_full_opcode_table() {
    let cases = [
        (0x00E0, Cls),
        (0x00EE, Ret),
        (0x1ABC, Jp { nnn: 0xABC }),
        (0x2ABC, Call { nnn: 0xABC }),
        (0x3A12, SeByte { x: 0xA, kk: 0x12 }),
        (0x4A12, SneByte { x: 0xA, kk: 0x12 }),
        (0x5AB0, SeReg { x: 0xA, y: 0xB }),
        (0x6A3C, LdByte { x: 0xA, kk: 0x3C }),
        (0x7A01, AddByte { x: 0xA, kk: 0x01 }),
        (0x8AB0, LdReg { x: 0xA, y: 0xB }),
        (0x8AB1, Or { x: 0xA, y: 0xB }),
        (0x8AB2, And { x: 0xA, y: 0xB }),
        (0x8AB3, Xor { x: 0xA, y: 0xB }),
        (0x8AB4, AddReg { x: 0xA, y: 0xB }),
        (0x8AB5, Sub { x: 0xA, y: 0xB }),
        (0x8AB6, Shr { x: 0xA }),
        (0x8AB7, Subn { x: 0xA, y: 0xB }),
        (0x8ABE, Shl { x: 0xA }),
        (0x9AB0, SneReg { x: 0xA, y: 0xB }),
        (0xA123, LdI { nnn: 0x123 }),
        (0xB123, JpV0 { nnn: 0x123 }),
        (0xC2FF, Rnd { x: 0x2, kk: 0xFF }),
        (0xD015, Drw { x: 0x0, y: 0x1, n: 5 }),
        (0xE39E, Skp { x: 0x3 }),
        (0xE3A1, Sknp { x: 0x3 }),
        (0xF407, LdFromDt { x: 0x4 }),
        (0xF40A, LdKey { x: 0x4 }),
        (0xF415, LdDt { x: 0x4 }),
        (0xF418, LdSt { x: 0x4 }),
        (0xF41E, AddI { x: 0x4 }),
        (0xF429, LdFont { x: 0x4 }),
        (0xF433, Bcd { x: 0x4 }),
        (0xF455, Store { x: 0x4 }),
        (0xF465, Load { x: 0x4 }),
    ];
    for (opcode, expected) in cases {
        assert_eq!(Instruction::decode(opcode), expected, "opcode {opcode:04X}");
    }
}

#[test]
fn group_zero_selects_on_the_low_nibble_only() {
    // The reference dispatch only inspects the bottom nibble of group 0,
    // so any 0x0**0 clears and any 0x0**E returns.
    assert_eq!(Instruction::decode(0x0000), Cls);
    assert_eq!(Instruction::decode(0x0120), Cls);
    assert_eq!(Instruction::decode(0x01EE), Ret);
}

#[test]
fn groups_five_nine_d_ignore_their_unused_nibble() {
    assert_eq!(Instruction::decode(0x5AB7), SeReg { x: 0xA, y: 0xB });
    assert_eq!(Instruction::decode(0x9AB3), SneReg { x: 0xA, y: 0xB });
}

#[test]
fn undefined_patterns_decode_to_unknown() {
    for opcode in [0x0123u16, 0x8AB8, 0x8ABF, 0xE300, 0xE3FF, 0xF400, 0xF4FF] {
        assert_eq!(Instruction::decode(opcode), Unknown { opcode }, "{opcode:04X}");
    }
}

#[test]
fn mnemonics_match_the_classic_table() {
    let cases: [(u16, &str); 12] = [
        (0x00E0, "CLS"),
        (0x00EE, "RET"),
        (0x1ABC, "JP 0xABC"),
        (0x2ABC, "CALL 0xABC"),
        (0x6A3C, "LD VA, 0x3C"),
        (0x8AB4, "ADD VA, VB"),
        (0x8AB6, "SHR VA"),
        (0xA123, "LD I, 0x123"),
        (0xD015, "DRW V0, V1, 5"),
        (0xF30A, "LD V3, K"),
        (0xF455, "LD [I], V4"),
        (0x0123, "NOP 0x0123"),
    ];
    for (opcode, expected) in cases {
        assert_eq!(Instruction::decode(opcode).to_string(), expected);
    }
}
