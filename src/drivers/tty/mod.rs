use alloc::string::String;

use crate::drivers::keyboard;
use crate::drivers::keyboard::scancodes::KeyCode;
use crate::{print, println};

pub fn init() {
    crate::log_info!("Virtual TTY initialized.");
    println!("EmberOS Shell v1.0");
    println!("Type 'help' for a list of commands");
    println!();
}

pub fn print_prompt() {
    let ns = crate::fs::NAMESPACE.lock();
    print!("user@emberos:{}$ ", ns.pwd());
}

/// The kernel main loop: collect a line of input, hand it to the shell
/// dispatcher, repeat.
pub fn process_input_loop() -> ! {
    let mut command_buffer = String::new();
    print_prompt();

    loop {
        let key = keyboard::read_char();

        match key {
            KeyCode::Char(c) => {
                print!("{}", c);
                command_buffer.push(c);
            }
            KeyCode::Enter => {
                println!();
                crate::shell::exec_command(&command_buffer);
                command_buffer.clear();
                print_prompt();
            }
            KeyCode::Backspace => {
                if !command_buffer.is_empty() {
                    command_buffer.pop();
                    crate::vga::WRITER.lock().backspace();
                }
            }
            KeyCode::Unknown => {}
        }
    }
}
