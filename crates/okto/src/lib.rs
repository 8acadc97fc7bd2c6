pub mod catalog;

use anyhow::Result;
use okto_core::app::DEFAULT_CYCLES_PER_FRAME;
use okto_core::EmulatorApp;
use okto_sdl2::{App, SdlContext, SdlInitInfo};

pub struct RunOptions {
    /// Instructions executed per rendered frame.
    pub cycles_per_frame: u32,
    /// Fixed RNG seed for reproducible runs; entropy-seeded when `None`.
    pub seed: Option<u64>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            cycles_per_frame: DEFAULT_CYCLES_PER_FRAME,
            seed: None,
        }
    }
}

pub fn run(rom_data: &[u8], options: &RunOptions) -> Result<()> {
    let mut app = match options.seed {
        Some(seed) => EmulatorApp::with_seed(seed, rom_data.to_vec())?,
        None => EmulatorApp::new(rom_data.to_vec())?,
    };
    app.set_cycles_per_frame(options.cycles_per_frame);
    let init_info = SdlInitInfo::builder()
        .width(app.width())
        .height(app.height())
        .scale(app.scale())
        .title(app.title())
        .build();
    SdlContext::run(init_info, app)
}
