#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

pub struct Pad {
    down: bool,
    up: bool,
    left: bool,
    right: bool,
    start: bool,
    select: bool,
    b: bool,
    a: bool,
    selection: PadSelection,
}

#[derive(Clone, Copy, PartialEq)]
pub enum PadSelection {
    Action,
    Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub enum PadKey {
    Up,
    Down,
    Left,
    Right,
    Start,
    Select,
    A,
    B,
}

impl Pad {
    pub fn new() -> Self {
        Self {
            down: false,
            up: false,
            left: false,
            right: false,
            start: false,
            select: false,
            b: false,
            a: false,
            selection: PadSelection::Action,
        }
    }

    pub fn read(&mut self, addr: u16) -> u8 {
        match addr & 0x00ff {
            0x0000 => {
                let mut value;
                match self.selection {
                    PadSelection::Action => {
                        value = if self.a { 0x00 } else { 0x01 }
                            | if self.b { 0x00 } else { 0x02 }
                            | if self.select { 0x00 } else { 0x04 }
                            | if self.start { 0x00 } else { 0x08 }
                    }
                    PadSelection::Direction => {
                        value = if self.right { 0x00 } else { 0x01 }
                            | if self.left { 0x00 } else { 0x02 }
                            | if self.up { 0x00 } else { 0x04 }
                            | if self.down { 0x00 } else { 0x08 }
                    }
                }
                value |= if self.selection == PadSelection::Direction {
                    0x10
                } else {
                    0x00
                } | if self.selection == PadSelection::Action {
                    0x20
                } else {
                    0x00
                };
                value
            }
            addr => panic!("Reading from unknown Pad location 0x{:04x}", addr),
        }
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        match addr & 0x00ff {
            0x0000 => {
                self.selection = if value & 0x10 == 0x00 {
                    PadSelection::Direction
                } else {
                    PadSelection::Action
                }
            }
            addr => panic!("Writing to unknown Pad location 0x{:04x}", addr),
        }
    }

    pub fn key_press(&mut self, key: PadKey) {
        match key {
            PadKey::Up => self.up = true,
            PadKey::Down => self.down = true,
            PadKey::Left => self.left = true,
            PadKey::Right => self.right = true,
            PadKey::Start => self.start = true,
            PadKey::Select => self.select = true,
            PadKey::A => self.a = true,
            PadKey::B => self.b = true,
        }
    }

    pub fn key_lift(&mut self, key: PadKey) {
        match key {
            PadKey::Up => self.up = false,
            PadKey::Down => self.down = false,
            PadKey::Left => self.left = false,
            PadKey::Right => self.right = false,
            PadKey::Start => self.start = false,
            PadKey::Select => self.select = false,
            PadKey::A => self.a = false,
            PadKey::B => self.b = false,
        }
    }

    /// Decodes a byte-encoded key mask as used by the external
    /// `joypad_down`/`joypad_up` interface: bit 5 selects the action
    /// column (A/B/Select/Start), bit 4 the direction column
    /// (Right/Left/Up/Down), and exactly one of the low 4 bits picks
    /// the row within that column.
    pub fn key_from_mask(mask: u8) -> Option<PadKey> {
        let action = mask & 0x20 != 0;
        let direction = mask & 0x10 != 0;
        match (action, direction, mask & 0x0f) {
            (true, false, 0x01) => Some(PadKey::A),
            (true, false, 0x02) => Some(PadKey::B),
            (true, false, 0x04) => Some(PadKey::Select),
            (true, false, 0x08) => Some(PadKey::Start),
            (false, true, 0x01) => Some(PadKey::Right),
            (false, true, 0x02) => Some(PadKey::Left),
            (false, true, 0x04) => Some(PadKey::Up),
            (false, true, 0x08) => Some(PadKey::Down),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Pad, PadKey};

    #[test]
    fn test_key_from_mask_action_column() {
        assert_eq!(Pad::key_from_mask(0x21), Some(PadKey::A));
        assert_eq!(Pad::key_from_mask(0x28), Some(PadKey::Start));
    }

    #[test]
    fn test_key_from_mask_direction_column() {
        assert_eq!(Pad::key_from_mask(0x11), Some(PadKey::Right));
        assert_eq!(Pad::key_from_mask(0x14), Some(PadKey::Up));
    }

    #[test]
    fn test_key_from_mask_invalid_returns_none() {
        assert_eq!(Pad::key_from_mask(0x00), None);
        assert_eq!(Pad::key_from_mask(0x30), None);
    }
}
