use crate::println;
use super::super::state;

/// mkdir <path> — create a directory in the namespace.
pub fn run(args: &str) {
    let path = args.trim();
    if path.is_empty() {
        println!("mkdir: missing operand");
        return;
    }

    let mut ns = crate::fs::NAMESPACE.lock();
    match ns.mkdir(path) {
        Ok(_) => {
            println!("Created directory: {}", path);
            state::log_cmd(&alloc::format!("mkdir {}", path));
        }
        Err(err) => println!("mkdir: cannot create '{}': {}", path, err),
    }
}
