use crate::key::Key;

/// Interface a frontend uses to drive an emulator.
///
/// The runner calls `update` once per rendered frame with a mutable RGB24
/// framebuffer of `width() * height() * 3` bytes, and forwards key
/// transitions through `handle_key_event`.
pub trait App {
    fn init(&mut self);
    fn update(&mut self, screen: &mut [u8]);
    fn handle_key_event(&mut self, key: Key, is_down: bool);
    fn should_exit(&self) -> bool;
    fn exit(&mut self);

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn scale(&self) -> u32;
    fn title(&self) -> String;
}
