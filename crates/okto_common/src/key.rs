/// Host keys a frontend reports to an [`App`](crate::app::App).
///
/// Only the keys the emulator cares about are named; everything else maps
/// to `None` and is ignored.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    Num1,
    Num2,
    Num3,
    Num4,
    Q,
    W,
    E,
    R,
    A,
    S,
    D,
    F,
    Z,
    X,
    C,
    V,
    Space,
    Return,
    Backspace,
    Escape,
    None,
}
