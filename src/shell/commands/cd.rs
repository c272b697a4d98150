use crate::fs::error::FsError;
use crate::println;
use super::super::state;

/// cd [path] — change the current working directory.
/// With no argument, returns to the root.
pub fn run(args: &str) {
    let target = args.trim();
    let target = if target.is_empty() { "/" } else { target };

    let mut ns = crate::fs::NAMESPACE.lock();
    match ns.chdir(target) {
        Ok(()) => state::log_cmd(&alloc::format!("cd {}", target)),
        Err(FsError::NotADirectory) => println!("cd: {}: Not a directory", target),
        Err(_) => println!("cd: {}: No such directory", target),
    }
}
