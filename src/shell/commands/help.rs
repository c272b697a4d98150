use crate::println;

pub fn run(_args: &str) {
    println!("EmberOS Shell - Available commands:");
    println!("");
    println!("  help              Show this help message");
    println!("  clear             Clear the screen");
    println!("  echo <text>       Print text to terminal");
    println!("  ls [dir]          List directory contents");
    println!("  cd [dir]          Change directory (no argument: /)");
    println!("  pwd               Show working directory");
    println!("  mkdir <dir>       Create a directory");
    println!("  uptime            Show time since boot");
    println!("  version           Show kernel version");
    println!("  log [n]           Show last n kernel log entries");
    println!("  fstest            Run the namespace self-test suite");
}
