pub mod commands;
pub mod state;

use alloc::vec::Vec;

use crate::println;

/// Parse an input line into command + arguments, then dispatch.
pub fn exec_command(input: &str) {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return;
    }

    // Split by whitespace: first token = command, rest = args
    let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
    let cmd = parts[0];
    let args = if parts.len() > 1 { parts[1] } else { "" };

    match cmd {
        "help"    => commands::help::run(args),
        "clear"   => commands::clear::run(args),
        "echo"    => commands::echo::run(args),
        "ls"      => commands::ls::run(args),
        "cd"      => commands::cd::run(args),
        "pwd"     => commands::pwd::run(args),
        "mkdir"   => commands::mkdir::run(args),
        "uptime"  => commands::uptime::run(args),
        "version" => commands::version::run(args),
        "log"     => commands::log::run(args),
        "fstest"  => commands::fstest::run(args),
        _         => println!("{}: command not found", cmd),
    }
}
