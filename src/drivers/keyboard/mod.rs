pub mod scancodes;

use core::sync::atomic::{AtomicUsize, Ordering};
use lazy_static::lazy_static;
use scancodes::{KeyCode, KeyboardState};
use spin::Mutex;
use x86_64::instructions::port::Port;

const BUFFER_SIZE: usize = 256;

/// Single-producer single-consumer ring buffer between the IRQ1 handler
/// and the tty loop. Head and tail are atomics; each slot is written by
/// exactly one side at a time.
pub struct KeyboardBuffer {
    buffer: [KeyCode; BUFFER_SIZE],
    head: AtomicUsize,
    tail: AtomicUsize,
}

impl KeyboardBuffer {
    pub const fn new() -> Self {
        Self {
            buffer: [KeyCode::Unknown; BUFFER_SIZE],
            head: AtomicUsize::new(0),
            tail: AtomicUsize::new(0),
        }
    }

    pub fn push(&self, key: KeyCode) -> Result<(), ()> {
        let head = self.head.load(Ordering::Acquire);
        let next_head = (head + 1) % BUFFER_SIZE;

        if next_head == self.tail.load(Ordering::Acquire) {
            return Err(()); // Buffer full, drop the key
        }

        // The head slot is owned by the producer until the head store below
        // publishes it, so the raw write cannot race the consumer.
        unsafe {
            let slot = self.buffer.as_ptr().add(head) as *mut KeyCode;
            *slot = key;
        }

        self.head.store(next_head, Ordering::Release);
        Ok(())
    }

    pub fn pop(&self) -> Option<KeyCode> {
        let tail = self.tail.load(Ordering::Acquire);

        if tail == self.head.load(Ordering::Acquire) {
            return None; // Buffer empty
        }

        let key = unsafe {
            let slot = self.buffer.as_ptr().add(tail) as *mut KeyCode;
            *slot
        };

        self.tail.store((tail + 1) % BUFFER_SIZE, Ordering::Release);
        Some(key)
    }
}

lazy_static! {
    pub static ref KEYBOARD_BUFFER: KeyboardBuffer = KeyboardBuffer::new();
    pub static ref KEYBOARD_STATE: Mutex<KeyboardState> = Mutex::new(KeyboardState::new());
}

pub fn init() {
    // Drain any residual scancode left in the 8042 controller from boot
    let mut port: Port<u8> = Port::new(0x60);
    let _scancode = unsafe { port.read() };
    crate::log_info!("PS/2 keyboard driver initialized.");
}

/// Called from the keyboard interrupt handler with a raw scancode.
pub fn push_scancode(scancode: u8) {
    let mut state = KEYBOARD_STATE.lock();
    let keycode = state.process_scancode(scancode);

    // Standalone modifiers and break codes decode to Unknown
    if let KeyCode::Unknown = keycode {
        return;
    }

    let _ = KEYBOARD_BUFFER.push(keycode);
}

pub fn try_read_char() -> Option<KeyCode> {
    KEYBOARD_BUFFER.pop()
}

/// Block until a key arrives, halting between interrupts.
pub fn read_char() -> KeyCode {
    loop {
        if let Some(key) = try_read_char() {
            return key;
        }
        x86_64::instructions::interrupts::enable_and_hlt();
    }
}
