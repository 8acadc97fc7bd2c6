use js_sys::Uint8Array;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

use crate::emulator::Emulator;
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Browser frontend: the engine plus the 2D context of the page's
/// `<canvas id="canvas">`. The page's JS drives cycles and repaints.
#[wasm_bindgen]
pub struct EmuWasm {
    emulator: Emulator,
    ctx: CanvasRenderingContext2d,
}

fn js_err(message: &str) -> JsValue {
    JsValue::from_str(message)
}

#[wasm_bindgen]
impl EmuWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<EmuWasm, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| js_err("no document"))?;
        let canvas = document
            .get_element_by_id("canvas")
            .ok_or_else(|| js_err("no element with id \"canvas\""))?;
        let canvas: HtmlCanvasElement = canvas
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("element \"canvas\" is not a canvas"))?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| js_err("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| js_err("unexpected context type"))?;
        Ok(EmuWasm {
            emulator: Emulator::default(),
            ctx,
        })
    }

    pub fn cycle(&mut self) -> Result<(), JsValue> {
        self.emulator
            .cycle()
            .map_err(|err| js_err(&err.to_string()))
    }

    pub fn reset(&mut self) {
        self.emulator.reset();
    }

    pub fn load_rom(&mut self, data: Uint8Array) -> Result<(), JsValue> {
        self.emulator
            .load_rom(&data.to_vec())
            .map_err(|err| js_err(&err.to_string()))
    }

    pub fn set_key(&mut self, evt: KeyboardEvent, pressed: bool) {
        if let Some(key) = key2btn(&evt.key()) {
            self.emulator.set_key(key, pressed);
        }
    }

    pub fn draw_screen(&mut self, scale: usize) {
        let width = (SCREEN_WIDTH * scale) as f64;
        let height = (SCREEN_HEIGHT * scale) as f64;
        self.ctx.set_fill_style(&JsValue::from_str("black"));
        self.ctx.fill_rect(0.0, 0.0, width, height);

        self.ctx.set_fill_style(&JsValue::from_str("white"));
        let video = self.emulator.video();
        for (i, pixel) in video.iter().enumerate() {
            if *pixel != 0 {
                let x = i % SCREEN_WIDTH;
                let y = i / SCREEN_WIDTH;
                self.ctx.fill_rect(
                    (x * scale) as f64,
                    (y * scale) as f64,
                    scale as f64,
                    scale as f64,
                );
            }
        }
    }
}

/// Same COSMAC layout as the desktop frontend, keyed on `KeyboardEvent.key`.
fn key2btn(key: &str) -> Option<usize> {
    match key {
        "1" => Some(0x1),
        "2" => Some(0x2),
        "3" => Some(0x3),
        "4" => Some(0xC),
        "q" => Some(0x4),
        "w" => Some(0x5),
        "e" => Some(0x6),
        "r" => Some(0xD),
        "a" => Some(0x7),
        "s" => Some(0x8),
        "d" => Some(0x9),
        "f" => Some(0xE),
        "z" => Some(0xA),
        "x" => Some(0x0),
        "c" => Some(0xB),
        "v" => Some(0xF),
        _ => None,
    }
}
