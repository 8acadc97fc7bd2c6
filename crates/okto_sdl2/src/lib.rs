use anyhow::Result;
use sdl2::event::Event;
use sdl2::pixels::PixelFormatEnum;
use typed_builder::TypedBuilder;

pub use okto_common::app::App;
use okto_common::key::Key;
pub use sdl2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    RGB24,
}

#[derive(TypedBuilder)]
pub struct SdlInitInfo {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
    pub title: String,
    #[builder(default = PixelFormat::RGB24)]
    pub pixel_format: PixelFormat,
}

pub struct SdlContext;

impl SdlContext {
    /// Open a window at width x height x scale and drive `app` until it
    /// asks to exit: pump key events in, call `update` with the RGB24
    /// framebuffer, and present through a streaming texture with vsync.
    pub fn run(sdl_init_info: SdlInitInfo, mut app: impl App) -> Result<()> {
        let SdlInitInfo {
            width,
            height,
            scale,
            title,
            pixel_format,
        } = sdl_init_info;
        let sdl_context = sdl2::init().map_err(anyhow::Error::msg)?;
        let video_subsystem = sdl_context.video().map_err(anyhow::Error::msg)?;
        let window = video_subsystem
            .window(&title, width * scale, height * scale)
            .position_centered()
            .build()?;
        let mut canvas = window.into_canvas().present_vsync().build()?;
        canvas
            .set_scale(scale as f32, scale as f32)
            .map_err(anyhow::Error::msg)?;
        let creator = canvas.texture_creator();
        let mut texture =
            creator.create_texture_streaming(map_pixel_format(pixel_format), width, height)?;
        let mut event_pump = sdl_context.event_pump().map_err(anyhow::Error::msg)?;

        let color_size = map_pixel_format_size(pixel_format);
        let mut screen_state = vec![0u8; (width * height * color_size) as usize];
        app.init();
        loop {
            if app.should_exit() {
                app.exit();
                break;
            }

            while let Some(event) = event_pump.poll_event() {
                match event {
                    Event::Quit { .. } => {
                        app.exit();
                        return Ok(());
                    }
                    Event::KeyDown {
                        keycode: Some(keycode),
                        repeat: false,
                        ..
                    } => app.handle_key_event(map_keycode(keycode), true),
                    Event::KeyUp {
                        keycode: Some(keycode),
                        ..
                    } => app.handle_key_event(map_keycode(keycode), false),
                    _ => {}
                }
            }

            app.update(&mut screen_state);

            texture.update(None, &screen_state, (width * color_size) as usize)?;
            canvas
                .copy(&texture, None, None)
                .map_err(anyhow::Error::msg)?;
            canvas.present();
        }

        Ok(())
    }
}

pub fn map_pixel_format(pixel_format: PixelFormat) -> PixelFormatEnum {
    match pixel_format {
        PixelFormat::RGB24 => PixelFormatEnum::RGB24,
    }
}

pub fn map_pixel_format_size(pixel_format: PixelFormat) -> u32 {
    match pixel_format {
        PixelFormat::RGB24 => 3,
    }
}

pub fn map_keycode(keycode: sdl2::keyboard::Keycode) -> Key {
    use sdl2::keyboard::Keycode;
    match keycode {
        Keycode::Num1 => Key::Num1,
        Keycode::Num2 => Key::Num2,
        Keycode::Num3 => Key::Num3,
        Keycode::Num4 => Key::Num4,
        Keycode::Q => Key::Q,
        Keycode::W => Key::W,
        Keycode::E => Key::E,
        Keycode::R => Key::R,
        Keycode::A => Key::A,
        Keycode::S => Key::S,
        Keycode::D => Key::D,
        Keycode::F => Key::F,
        Keycode::Z => Key::Z,
        Keycode::X => Key::X,
        Keycode::C => Key::C,
        Keycode::V => Key::V,
        Keycode::Space => Key::Space,
        Keycode::Return => Key::Return,
        Keycode::Backspace => Key::Backspace,
        Keycode::Escape => Key::Escape,
        _ => Key::None,
    }
}
