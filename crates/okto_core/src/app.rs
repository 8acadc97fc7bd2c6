use okto_common::app::App;
use okto_common::color::Color;
use okto_common::key::Key;

use crate::emulator::Emulator;
use crate::instruction::Instruction;
use crate::{Result, SCREEN_HEIGHT, SCREEN_SCALE, SCREEN_WIDTH};

/// Instructions per rendered frame, the cadence the original host used.
pub const DEFAULT_CYCLES_PER_FRAME: u32 = 2;

/// Frontend-facing wrapper around the engine.
///
/// Runs a batch of cycles per frame, converts the 0/1 video buffer to
/// RGB24, and maps host keys onto the hex pad. A cycle error halts the
/// machine until the user resets (Backspace) or quits.
pub struct EmulatorApp {
    should_exit: bool,
    paused: bool,
    halted: bool,
    step_once: bool,
    frame: u64,
    cycles_per_frame: u32,
    rom: Vec<u8>,
    pub emulator: Emulator,
}

impl EmulatorApp {
    pub fn new(rom: Vec<u8>) -> Result<Self> {
        Self::with_emulator(Emulator::default(), rom)
    }

    pub fn with_seed(seed: u64, rom: Vec<u8>) -> Result<Self> {
        Self::with_emulator(Emulator::with_seed(seed), rom)
    }

    fn with_emulator(mut emulator: Emulator, rom: Vec<u8>) -> Result<Self> {
        emulator.load_rom(&rom)?;
        Ok(Self {
            should_exit: false,
            paused: false,
            halted: false,
            step_once: false,
            frame: 0,
            cycles_per_frame: DEFAULT_CYCLES_PER_FRAME,
            rom,
            emulator,
        })
    }

    pub fn set_cycles_per_frame(&mut self, cycles: u32) {
        self.cycles_per_frame = cycles;
    }

    fn reload(&mut self) {
        self.emulator.reset();
        self.halted = false;
        self.paused = false;
        // The ROM was validated at construction, so this cannot fail, but
        // a halt beats a panic if that ever changes.
        if let Err(err) = self.emulator.load_rom(&self.rom) {
            log::error!("reload failed: {err}");
            self.halted = true;
        }
    }

    fn run_batch(&mut self) {
        let batch = if self.step_once {
            self.step_once = false;
            1
        } else {
            self.cycles_per_frame
        };
        for _ in 0..batch {
            if let Err(err) = self.emulator.cycle() {
                log::error!("emulator halted: {err}");
                self.halted = true;
                break;
            }
        }
    }

    fn trace_registers(&self) {
        let emulator = &self.emulator;
        let opcode = emulator.opcode();
        log::debug!(
            "PC={:#06X} OP={:04X} ({}) I={:#06X} SP={} DT={} ST={} V={:02X?}",
            emulator.pc(),
            opcode,
            Instruction::decode(opcode),
            emulator.index(),
            emulator.sp(),
            emulator.delay_timer(),
            emulator.sound_timer(),
            emulator.v(),
        );
    }
}

impl App for EmulatorApp {
    fn init(&mut self) {
        log::info!("CHIP-8 init, {} byte ROM", self.rom.len());
    }

    fn update(&mut self, screen_state: &mut [u8]) {
        if !self.halted && (!self.paused || self.step_once) {
            self.run_batch();
        }

        for (i, pixel) in self.emulator.video().iter().enumerate() {
            let color = if *pixel != 0 { Color::WHITE } else { Color::BLACK };
            let index = i * 3;
            screen_state[index] = color.r;
            screen_state[index + 1] = color.g;
            screen_state[index + 2] = color.b;
        }

        self.frame += 1;
        if self.frame % 60 == 0 {
            self.trace_registers();
        }
    }

    fn handle_key_event(&mut self, key: Key, is_down: bool) {
        if is_down {
            match key {
                Key::Escape => {
                    self.should_exit = true;
                    return;
                }
                Key::Space => {
                    self.paused = !self.paused;
                    return;
                }
                Key::Return => {
                    self.paused = true;
                    self.step_once = true;
                    return;
                }
                Key::Backspace => {
                    self.reload();
                    return;
                }
                _ => {}
            }
        }
        if let Some(pad) = key_to_pad(key) {
            self.emulator.set_key(pad, is_down);
        }
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn exit(&mut self) {
        log::info!("CHIP-8 exit");
    }

    fn width(&self) -> u32 {
        SCREEN_WIDTH as u32
    }

    fn height(&self) -> u32 {
        SCREEN_HEIGHT as u32
    }

    fn scale(&self) -> u32 {
        SCREEN_SCALE
    }

    fn title(&self) -> String {
        "okto CHIP-8".to_string()
    }
}

/// Classic COSMAC VIP layout: 1234 / QWER / ASDF / ZXCV.
pub fn key_to_pad(key: Key) -> Option<usize> {
    match key {
        Key::Num1 => Some(0x1),
        Key::Num2 => Some(0x2),
        Key::Num3 => Some(0x3),
        Key::Num4 => Some(0xC),
        Key::Q => Some(0x4),
        Key::W => Some(0x5),
        Key::E => Some(0x6),
        Key::R => Some(0xD),
        Key::A => Some(0x7),
        Key::S => Some(0x8),
        Key::D => Some(0x9),
        Key::F => Some(0xE),
        Key::Z => Some(0xA),
        Key::X => Some(0x0),
        Key::C => Some(0xB),
        Key::V => Some(0xF),
        _ => None,
    }
}
