use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::instruction::Instruction;
use crate::{
    Error, Result, ADDRESS_MASK, BYTES_PER_CHAR, FONTSET, FONTSET_SIZE, FONTSET_START, NUM_KEYS,
    NUM_REGS, RAM_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH, STACK_SIZE, START_ADDRESS,
};


/// The CHIP-8 machine: memory, registers, timers, video and keypad state.
///
/// One owned aggregate with no shared state, so independent instances can
/// coexist. The host drives it through `reset` / `load_rom` / `cycle` and
/// reads video and registers back out between cycles. All calls must come
/// from a single thread; there is no internal locking.
pub struct Emulator {
    /// program counter, points at the next instruction to fetch
    pc: u16,
    ram: [u8; RAM_SIZE],
    /// row-major 0/1 cells
    video: [u8; SCREEN_WIDTH * SCREEN_HEIGHT],
    /// V registers; VF doubles as the carry/borrow/collision flag
    v_reg: [u8; NUM_REGS],
    i_reg: u16,
    stack_pointer: u8,
    stack: [u16; STACK_SIZE],
    keys: [bool; NUM_KEYS],
    delay_timer: u8,
    sound_timer: u8,
    /// last fetched instruction word, kept for introspection
    opcode: u16,
    rng: StdRng,
}

impl Default for Emulator {
    fn default() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Emulator {
    /// An emulator whose RND opcode draws from a fixed seed, for
    /// reproducible runs and deterministic tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        let mut emulator = Self {
            pc: START_ADDRESS,
            ram: [0; RAM_SIZE],
            video: [0; SCREEN_WIDTH * SCREEN_HEIGHT],
            v_reg: [0; NUM_REGS],
            i_reg: 0,
            stack_pointer: 0,
            stack: [0; STACK_SIZE],
            keys: [false; NUM_KEYS],
            delay_timer: 0,
            sound_timer: 0,
            opcode: 0,
            rng,
        };
        emulator.copy_fontset();
        emulator
    }

    /// Return every field to its construction state. Idempotent, callable
    /// mid-execution. The RNG keeps its sequence; reset does not reseed.
    pub fn reset(&mut self) {
        self.pc = START_ADDRESS;
        self.ram = [0; RAM_SIZE];
        self.video = [0; SCREEN_WIDTH * SCREEN_HEIGHT];
        self.v_reg = [0; NUM_REGS];
        self.i_reg = 0;
        self.stack_pointer = 0;
        self.stack = [0; STACK_SIZE];
        self.keys = [false; NUM_KEYS];
        self.delay_timer = 0;
        self.sound_timer = 0;
        self.opcode = 0;
        self.copy_fontset();
    }

    fn copy_fontset(&mut self) {
        self.ram[FONTSET_START..FONTSET_START + FONTSET_SIZE].copy_from_slice(&FONTSET);
    }

    /// Copy a ROM image into memory at 0x200.
    ///
    /// Rejects oversized images before touching memory. Registers are left
    /// alone either way; callers are expected to `reset` first in the
    /// normal flow.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<()> {
        let capacity = RAM_SIZE - START_ADDRESS as usize;
        if rom.len() > capacity {
            return Err(Error::RomTooLarge {
                size: rom.len(),
                capacity,
            });
        }
        let start = START_ADDRESS as usize;
        self.ram[start..start + rom.len()].copy_from_slice(rom);
        Ok(())
    }

    /// One fetch-decode-execute step, then a timer tick.
    ///
    /// A stack fault surfaces here; the errored cycle leaves all state
    /// except the fetch's PC advance untouched and skips the timer tick.
    pub fn cycle(&mut self) -> Result<()> {
        let at = self.pc & ADDRESS_MASK;
        let opcode = self.fetch();
        self.opcode = opcode;
        let instruction = Instruction::decode(opcode);
        log::trace!("{at:#06X}: {opcode:04X} {instruction}");
        self.execute(instruction)?;
        self.tick_timers();
        Ok(())
    }

    /// Read the big-endian word at [PC, PC+1] and advance PC by 2. Jumps
    /// and calls overwrite the advance during execution.
    fn fetch(&mut self) -> u16 {
        let pc = (self.pc & ADDRESS_MASK) as usize;
        let high = self.ram[pc] as u16;
        let low = self.ram[(pc + 1) & ADDRESS_MASK as usize] as u16;
        self.pc = self.pc.wrapping_add(2);
        high << 8 | low
    }

    fn tick_timers(&mut self) {
        if self.delay_timer > 0 {
            self.delay_timer -= 1;
        }
        if self.sound_timer > 0 {
            self.sound_timer -= 1;
        }
    }

    /// Address of the instruction currently being executed, for
    /// diagnostics. PC has already advanced past it at this point.
    fn faulting_pc(&self) -> u16 {
        self.pc.wrapping_sub(2) & ADDRESS_MASK
    }

    fn push(&mut self, value: u16) -> Result<()> {
        if self.stack_pointer as usize >= STACK_SIZE {
            return Err(Error::StackOverflow {
                pc: self.faulting_pc(),
            });
        }
        self.stack[self.stack_pointer as usize] = value;
        self.stack_pointer += 1;
        Ok(())
    }

    fn pop(&mut self) -> Result<u16> {
        if self.stack_pointer == 0 {
            return Err(Error::StackUnderflow {
                pc: self.faulting_pc(),
            });
        }
        self.stack_pointer -= 1;
        Ok(self.stack[self.stack_pointer as usize])
    }

    fn skip(&mut self) {
        self.pc = self.pc.wrapping_add(2);
    }

    /// Memory reads and writes from opcodes go through the 12-bit address
    /// mask, so I past 0xFFF wraps instead of walking off the array.
    fn read_mem(&self, addr: u16) -> u8 {
        self.ram[(addr & ADDRESS_MASK) as usize]
    }

    fn write_mem(&mut self, addr: u16, value: u8) {
        self.ram[(addr & ADDRESS_MASK) as usize] = value;
    }

    fn execute(&mut self, instruction: Instruction) -> Result<()> {
        use Instruction::*;
        match instruction {
            Cls => self.video = [0; SCREEN_WIDTH * SCREEN_HEIGHT],
            Ret => self.pc = self.pop()?,
            Jp { nnn } => self.pc = nnn,
            Call { nnn } => {
                self.push(self.pc)?;
                self.pc = nnn;
            }
            SeByte { x, kk } => {
                if self.v_reg[x] == kk {
                    self.skip();
                }
            }
            SneByte { x, kk } => {
                if self.v_reg[x] != kk {
                    self.skip();
                }
            }
            SeReg { x, y } => {
                if self.v_reg[x] == self.v_reg[y] {
                    self.skip();
                }
            }
            LdByte { x, kk } => self.v_reg[x] = kk,
            AddByte { x, kk } => self.v_reg[x] = self.v_reg[x].wrapping_add(kk),
            LdReg { x, y } => self.v_reg[x] = self.v_reg[y],
            Or { x, y } => self.v_reg[x] |= self.v_reg[y],
            And { x, y } => self.v_reg[x] &= self.v_reg[y],
            Xor { x, y } => self.v_reg[x] ^= self.v_reg[y],
            AddReg { x, y } => {
                let sum = self.v_reg[x] as u16 + self.v_reg[y] as u16;
                self.v_reg[0xF] = (sum > 0xFF) as u8;
                self.v_reg[x] = sum as u8;
            }
            // For the subtract and shift ops the flag write comes first and
            // the result is computed from the registers as they then are,
            // matching the reference machine when VF is itself an operand.
            Sub { x, y } => {
                self.v_reg[0xF] = (self.v_reg[x] > self.v_reg[y]) as u8;
                self.v_reg[x] = self.v_reg[x].wrapping_sub(self.v_reg[y]);
            }
            Shr { x } => {
                self.v_reg[0xF] = self.v_reg[x] & 1;
                self.v_reg[x] >>= 1;
            }
            Subn { x, y } => {
                self.v_reg[0xF] = (self.v_reg[y] >= self.v_reg[x]) as u8;
                self.v_reg[x] = self.v_reg[y].wrapping_sub(self.v_reg[x]);
            }
            Shl { x } => {
                self.v_reg[0xF] = self.v_reg[x] >> 7;
                self.v_reg[x] <<= 1;
            }
            SneReg { x, y } => {
                if self.v_reg[x] != self.v_reg[y] {
                    self.skip();
                }
            }
            LdI { nnn } => self.i_reg = nnn,
            JpV0 { nnn } => self.pc = (self.v_reg[0] as u16 + nnn) & ADDRESS_MASK,
            Rnd { x, kk } => {
                let random: u8 = self.rng.gen();
                self.v_reg[x] = random & kk;
            }
            Drw { x, y, n } => {
                self.v_reg[0xF] = 0;
                let start_x = self.v_reg[x] as usize % SCREEN_WIDTH;
                let start_y = self.v_reg[y] as usize % SCREEN_HEIGHT;
                for row in 0..n as usize {
                    let sprite = self.read_mem(self.i_reg.wrapping_add(row as u16));
                    for bit in 0..8 {
                        if sprite & (0x80 >> bit) == 0 {
                            continue;
                        }
                        // Each pixel wraps around the screen edges on its own.
                        let px = (start_x + bit) % SCREEN_WIDTH;
                        let py = (start_y + row) % SCREEN_HEIGHT;
                        let index = py * SCREEN_WIDTH + px;
                        if self.video[index] == 1 {
                            self.v_reg[0xF] = 1;
                        }
                        self.video[index] ^= 1;
                    }
                }
            }
            Skp { x } => {
                let key = self.v_reg[x] as usize;
                if key < NUM_KEYS && self.keys[key] {
                    self.skip();
                }
            }
            Sknp { x } => {
                let key = self.v_reg[x] as usize;
                if key >= NUM_KEYS || !self.keys[key] {
                    self.skip();
                }
            }
            LdFromDt { x } => self.v_reg[x] = self.delay_timer,
            LdKey { x } => {
                // Cooperative polling: rewind PC so the instruction runs
                // again next cycle until a key shows up. Timers keep
                // ticking while waiting.
                if let Some(key) = (0..NUM_KEYS).find(|&k| self.keys[k]) {
                    self.v_reg[x] = key as u8;
                } else {
                    self.pc = self.pc.wrapping_sub(2);
                }
            }
            LdDt { x } => self.delay_timer = self.v_reg[x],
            LdSt { x } => self.sound_timer = self.v_reg[x],
            // Full 16-bit wrap, never masked to 12 bits; some ROMs let I
            // run past 0xFFF transiently. The mask applies at dereference.
            AddI { x } => self.i_reg = self.i_reg.wrapping_add(self.v_reg[x] as u16),
            LdFont { x } => {
                self.i_reg = (FONTSET_START + BYTES_PER_CHAR * self.v_reg[x] as usize) as u16
            }
            Bcd { x } => {
                let value = self.v_reg[x];
                self.write_mem(self.i_reg, value / 100);
                self.write_mem(self.i_reg.wrapping_add(1), value / 10 % 10);
                self.write_mem(self.i_reg.wrapping_add(2), value % 10);
            }
            Store { x } => {
                for offset in 0..=x {
                    self.write_mem(self.i_reg.wrapping_add(offset as u16), self.v_reg[offset]);
                }
            }
            Load { x } => {
                for offset in 0..=x {
                    self.v_reg[offset] = self.read_mem(self.i_reg.wrapping_add(offset as u16));
                }
            }
            Unknown { .. } => {}
        }
        Ok(())
    }

    pub fn set_key(&mut self, index: usize, pressed: bool) {
        assert!(index < NUM_KEYS, "invalid key index: {index}");
        self.keys[index] = pressed;
    }

    pub fn is_key_pressed(&self, index: usize) -> bool {
        self.keys[index]
    }

    pub fn video(&self) -> &[u8; SCREEN_WIDTH * SCREEN_HEIGHT] {
        &self.video
    }

    pub fn v(&self) -> &[u8; NUM_REGS] {
        &self.v_reg
    }

    pub fn pc(&self) -> u16 {
        self.pc
    }

    pub fn sp(&self) -> u8 {
        self.stack_pointer
    }

    pub fn index(&self) -> u16 {
        self.i_reg
    }

    pub fn stack(&self) -> &[u16; STACK_SIZE] {
        &self.stack
    }

    pub fn delay_timer(&self) -> u8 {
        self.delay_timer
    }

    pub fn sound_timer(&self) -> u8 {
        self.sound_timer
    }

    /// The most recently fetched instruction word.
    pub fn opcode(&self) -> u16 {
        self.opcode
    }
}
