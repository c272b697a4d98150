use bit_field::BitField;
use bitflags::bitflags;

/// Break codes are the make code with bit 7 set.
const BREAK_BIT: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Char(char),
    Enter,
    Backspace,
    Unknown,
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        const LSHIFT = 1 << 0;
        const RSHIFT = 1 << 1;
        const CTRL = 1 << 2;
        const ALT = 1 << 3;
        const CAPS_LOCK = 1 << 4;
    }
}

/// Scancode set 1 decoder for a US layout.
pub struct KeyboardState {
    modifiers: Modifiers,
    extended_scancode: bool,
}

impl KeyboardState {
    pub const fn new() -> Self {
        Self {
            modifiers: Modifiers::empty(),
            extended_scancode: false,
        }
    }

    pub fn process_scancode(&mut self, scancode: u8) -> KeyCode {
        if scancode == 0xE0 {
            self.extended_scancode = true;
            return KeyCode::Unknown;
        }

        let is_extended = self.extended_scancode;
        self.extended_scancode = false;

        let released = scancode.get_bit(BREAK_BIT);
        let code = scancode & 0x7F;

        if is_extended {
            // Extended set: right ctrl / right alt; arrows and the rest
            // have no binding in this shell
            match code {
                0x1D => self.modifiers.set(Modifiers::CTRL, !released),
                0x38 => self.modifiers.set(Modifiers::ALT, !released),
                _ => {}
            }
            return KeyCode::Unknown;
        }

        match code {
            0x2A => {
                self.modifiers.set(Modifiers::LSHIFT, !released);
                return KeyCode::Unknown;
            }
            0x36 => {
                self.modifiers.set(Modifiers::RSHIFT, !released);
                return KeyCode::Unknown;
            }
            0x1D => {
                self.modifiers.set(Modifiers::CTRL, !released);
                return KeyCode::Unknown;
            }
            0x38 => {
                self.modifiers.set(Modifiers::ALT, !released);
                return KeyCode::Unknown;
            }
            0x3A => {
                if !released {
                    self.modifiers.toggle(Modifiers::CAPS_LOCK);
                }
                return KeyCode::Unknown;
            }
            _ => {}
        }

        if released {
            return KeyCode::Unknown;
        }

        match code {
            0x1C => KeyCode::Enter,
            0x0E => KeyCode::Backspace,
            0x39 => KeyCode::Char(' '),

            // Number row
            0x02 => self.shifted('1', '!'),
            0x03 => self.shifted('2', '@'),
            0x04 => self.shifted('3', '#'),
            0x05 => self.shifted('4', '$'),
            0x06 => self.shifted('5', '%'),
            0x07 => self.shifted('6', '^'),
            0x08 => self.shifted('7', '&'),
            0x09 => self.shifted('8', '*'),
            0x0A => self.shifted('9', '('),
            0x0B => self.shifted('0', ')'),
            0x0C => self.shifted('-', '_'),
            0x0D => self.shifted('=', '+'),

            // Top letter row
            0x10 => self.shifted('q', 'Q'),
            0x11 => self.shifted('w', 'W'),
            0x12 => self.shifted('e', 'E'),
            0x13 => self.shifted('r', 'R'),
            0x14 => self.shifted('t', 'T'),
            0x15 => self.shifted('y', 'Y'),
            0x16 => self.shifted('u', 'U'),
            0x17 => self.shifted('i', 'I'),
            0x18 => self.shifted('o', 'O'),
            0x19 => self.shifted('p', 'P'),
            0x1A => self.shifted('[', '{'),
            0x1B => self.shifted(']', '}'),

            // Home row
            0x1E => self.shifted('a', 'A'),
            0x1F => self.shifted('s', 'S'),
            0x20 => self.shifted('d', 'D'),
            0x21 => self.shifted('f', 'F'),
            0x22 => self.shifted('g', 'G'),
            0x23 => self.shifted('h', 'H'),
            0x24 => self.shifted('j', 'J'),
            0x25 => self.shifted('k', 'K'),
            0x26 => self.shifted('l', 'L'),
            0x27 => self.shifted(';', ':'),
            0x28 => self.shifted('\'', '"'),
            0x29 => self.shifted('`', '~'),
            0x2B => self.shifted('\\', '|'),

            // Bottom row
            0x2C => self.shifted('z', 'Z'),
            0x2D => self.shifted('x', 'X'),
            0x2E => self.shifted('c', 'C'),
            0x2F => self.shifted('v', 'V'),
            0x30 => self.shifted('b', 'B'),
            0x31 => self.shifted('n', 'N'),
            0x32 => self.shifted('m', 'M'),
            0x33 => self.shifted(',', '<'),
            0x34 => self.shifted('.', '>'),
            0x35 => self.shifted('/', '?'),

            _ => KeyCode::Unknown,
        }
    }

    fn shift_active(&self) -> bool {
        self.modifiers.intersects(Modifiers::LSHIFT | Modifiers::RSHIFT)
    }

    fn shifted(&self, lower: char, upper: char) -> KeyCode {
        // Caps lock inverts shift for letters only
        let invert = lower.is_ascii_lowercase() && self.modifiers.contains(Modifiers::CAPS_LOCK);

        if self.shift_active() != invert {
            KeyCode::Char(upper)
        } else {
            KeyCode::Char(lower)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_letter_decodes_lowercase() {
        let mut state = KeyboardState::new();
        assert_eq!(state.process_scancode(0x1E), KeyCode::Char('a'));
    }

    #[test]
    fn shift_produces_uppercase_until_released() {
        let mut state = KeyboardState::new();
        assert_eq!(state.process_scancode(0x2A), KeyCode::Unknown); // shift make
        assert_eq!(state.process_scancode(0x1E), KeyCode::Char('A'));
        assert_eq!(state.process_scancode(0x2A | 0x80), KeyCode::Unknown); // shift break
        assert_eq!(state.process_scancode(0x1E), KeyCode::Char('a'));
    }

    #[test]
    fn caps_lock_inverts_shift_for_letters_only() {
        let mut state = KeyboardState::new();
        state.process_scancode(0x3A); // caps on
        assert_eq!(state.process_scancode(0x1E), KeyCode::Char('A'));
        assert_eq!(state.process_scancode(0x02), KeyCode::Char('1'));
        state.process_scancode(0x2A); // shift make
        assert_eq!(state.process_scancode(0x1E), KeyCode::Char('a'));
        assert_eq!(state.process_scancode(0x02), KeyCode::Char('!'));
    }

    #[test]
    fn break_codes_are_silent() {
        let mut state = KeyboardState::new();
        assert_eq!(state.process_scancode(0x1E | 0x80), KeyCode::Unknown);
    }

    #[test]
    fn extended_prefix_swallows_next_code() {
        let mut state = KeyboardState::new();
        assert_eq!(state.process_scancode(0xE0), KeyCode::Unknown);
        // 0x48 is keypad-8 / up-arrow in the extended set, not a character
        assert_eq!(state.process_scancode(0x48), KeyCode::Unknown);
        assert_eq!(state.process_scancode(0x24), KeyCode::Char('j'));
    }
}
