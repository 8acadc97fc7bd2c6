use std::fmt;

#[cfg(test)]
mod tests;

/// A decoded CHIP-8 instruction.
///
/// Decoding happens once per cycle so that execution is a flat `match`
/// instead of nested nibble switches. `x` and `y` are register indices,
/// `kk` an immediate byte, `nnn` a 12-bit address, `n` a sprite height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// 00E0: clear the screen.
    Cls,
    /// 00EE: return from subroutine.
    Ret,
    /// 1nnn: jump.
    Jp { nnn: u16 },
    /// 2nnn: call subroutine.
    Call { nnn: u16 },
    /// 3xkk: skip next if Vx == kk.
    SeByte { x: usize, kk: u8 },
    /// 4xkk: skip next if Vx != kk.
    SneByte { x: usize, kk: u8 },
    /// 5xy0: skip next if Vx == Vy.
    SeReg { x: usize, y: usize },
    /// 6xkk: Vx = kk.
    LdByte { x: usize, kk: u8 },
    /// 7xkk: Vx += kk, no carry flag.
    AddByte { x: usize, kk: u8 },
    /// 8xy0: Vx = Vy.
    LdReg { x: usize, y: usize },
    /// 8xy1: Vx |= Vy.
    Or { x: usize, y: usize },
    /// 8xy2: Vx &= Vy.
    And { x: usize, y: usize },
    /// 8xy3: Vx ^= Vy.
    Xor { x: usize, y: usize },
    /// 8xy4: Vx += Vy, VF = carry.
    AddReg { x: usize, y: usize },
    /// 8xy5: Vx -= Vy, VF = no borrow.
    Sub { x: usize, y: usize },
    /// 8xy6: VF = bit 0 of Vx, then Vx >>= 1.
    Shr { x: usize },
    /// 8xy7: Vx = Vy - Vx, VF = no borrow.
    Subn { x: usize, y: usize },
    /// 8xyE: VF = bit 7 of Vx, then Vx <<= 1.
    Shl { x: usize },
    /// 9xy0: skip next if Vx != Vy.
    SneReg { x: usize, y: usize },
    /// Annn: I = nnn.
    LdI { nnn: u16 },
    /// Bnnn: jump to V0 + nnn.
    JpV0 { nnn: u16 },
    /// Cxkk: Vx = random byte & kk.
    Rnd { x: usize, kk: u8 },
    /// Dxyn: draw an n-row sprite from I at (Vx, Vy), VF = collision.
    Drw { x: usize, y: usize, n: u8 },
    /// Ex9E: skip next if key Vx is pressed.
    Skp { x: usize },
    /// ExA1: skip next if key Vx is not pressed.
    Sknp { x: usize },
    /// Fx07: Vx = delay timer.
    LdFromDt { x: usize },
    /// Fx0A: wait for a key press, store it in Vx.
    LdKey { x: usize },
    /// Fx15: delay timer = Vx.
    LdDt { x: usize },
    /// Fx18: sound timer = Vx.
    LdSt { x: usize },
    /// Fx1E: I += Vx.
    AddI { x: usize },
    /// Fx29: I = address of the glyph for digit Vx.
    LdFont { x: usize },
    /// Fx33: store the decimal digits of Vx at I, I+1, I+2.
    Bcd { x: usize },
    /// Fx55: store V0..=Vx at I.
    Store { x: usize },
    /// Fx65: load V0..=Vx from I.
    Load { x: usize },
    /// Anything the machine does not define. Executes as a no-op.
    Unknown { opcode: u16 },
}

impl Instruction {
    /// Decode a 16-bit instruction word.
    ///
    /// The top nibble picks the group. Groups 0x0 and 0x8 sub-select on the
    /// low nibble, groups 0xE and 0xF on the low byte; groups 0x5, 0x9 and
    /// 0xD take their whole pattern without checking the unused nibble,
    /// matching the reference machine's dispatch.
    pub fn decode(opcode: u16) -> Instruction {
        use Instruction::*;

        let x = ((opcode & 0x0F00) >> 8) as usize;
        let y = ((opcode & 0x00F0) >> 4) as usize;
        let n = (opcode & 0x000F) as u8;
        let kk = (opcode & 0x00FF) as u8;
        let nnn = opcode & 0x0FFF;

        match opcode >> 12 {
            0x0 => match n {
                0x0 => Cls,
                0xE => Ret,
                _ => Unknown { opcode },
            },
            0x1 => Jp { nnn },
            0x2 => Call { nnn },
            0x3 => SeByte { x, kk },
            0x4 => SneByte { x, kk },
            0x5 => SeReg { x, y },
            0x6 => LdByte { x, kk },
            0x7 => AddByte { x, kk },
            0x8 => match n {
                0x0 => LdReg { x, y },
                0x1 => Or { x, y },
                0x2 => And { x, y },
                0x3 => Xor { x, y },
                0x4 => AddReg { x, y },
                0x5 => Sub { x, y },
                0x6 => Shr { x },
                0x7 => Subn { x, y },
                0xE => Shl { x },
                _ => Unknown { opcode },
            },
            0x9 => SneReg { x, y },
            0xA => LdI { nnn },
            0xB => JpV0 { nnn },
            0xC => Rnd { x, kk },
            0xD => Drw { x, y, n },
            0xE => match kk {
                0x9E => Skp { x },
                0xA1 => Sknp { x },
                _ => Unknown { opcode },
            },
            0xF => match kk {
                0x07 => LdFromDt { x },
                0x0A => LdKey { x },
                0x15 => LdDt { x },
                0x18 => LdSt { x },
                0x1E => AddI { x },
                0x29 => LdFont { x },
                0x33 => Bcd { x },
                0x55 => Store { x },
                0x65 => Load { x },
                _ => Unknown { opcode },
            },
            _ => unreachable!(),
        }
    }
}

/// Classic Cowgod-style mnemonics, used by the per-cycle trace log and the
/// register dump.
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Instruction::*;
        match *self {
            Cls => write!(f, "CLS"),
            Ret => write!(f, "RET"),
            Jp { nnn } => write!(f, "JP {nnn:#05X}"),
            Call { nnn } => write!(f, "CALL {nnn:#05X}"),
            SeByte { x, kk } => write!(f, "SE V{x:X}, {kk:#04X}"),
            SneByte { x, kk } => write!(f, "SNE V{x:X}, {kk:#04X}"),
            SeReg { x, y } => write!(f, "SE V{x:X}, V{y:X}"),
            LdByte { x, kk } => write!(f, "LD V{x:X}, {kk:#04X}"),
            AddByte { x, kk } => write!(f, "ADD V{x:X}, {kk:#04X}"),
            LdReg { x, y } => write!(f, "LD V{x:X}, V{y:X}"),
            Or { x, y } => write!(f, "OR V{x:X}, V{y:X}"),
            And { x, y } => write!(f, "AND V{x:X}, V{y:X}"),
            Xor { x, y } => write!(f, "XOR V{x:X}, V{y:X}"),
            AddReg { x, y } => write!(f, "ADD V{x:X}, V{y:X}"),
            Sub { x, y } => write!(f, "SUB V{x:X}, V{y:X}"),
            Shr { x } => write!(f, "SHR V{x:X}"),
            Subn { x, y } => write!(f, "SUBN V{x:X}, V{y:X}"),
            Shl { x } => write!(f, "SHL V{x:X}"),
            SneReg { x, y } => write!(f, "SNE V{x:X}, V{y:X}"),
            LdI { nnn } => write!(f, "LD I, {nnn:#05X}"),
            JpV0 { nnn } => write!(f, "JP V0, {nnn:#05X}"),
            Rnd { x, kk } => write!(f, "RND V{x:X}, {kk:#04X}"),
            Drw { x, y, n } => write!(f, "DRW V{x:X}, V{y:X}, {n}"),
            Skp { x } => write!(f, "SKP V{x:X}"),
            Sknp { x } => write!(f, "SKNP V{x:X}"),
            LdFromDt { x } => write!(f, "LD V{x:X}, DT"),
            LdKey { x } => write!(f, "LD V{x:X}, K"),
            LdDt { x } => write!(f, "LD DT, V{x:X}"),
            LdSt { x } => write!(f, "LD ST, V{x:X}"),
            AddI { x } => write!(f, "ADD I, V{x:X}"),
            LdFont { x } => write!(f, "LD F, V{x:X}"),
            Bcd { x } => write!(f, "LD B, V{x:X}"),
            Store { x } => write!(f, "LD [I], V{x:X}"),
            Load { x } => write!(f, "LD V{x:X}, [I]"),
            Unknown { opcode } => write!(f, "NOP {opcode:#06X}"),
        }
    }
}
