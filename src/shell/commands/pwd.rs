use crate::println;

/// pwd — print the canonical absolute path of the current directory.
pub fn run(_args: &str) {
    let ns = crate::fs::NAMESPACE.lock();
    println!("{}", ns.pwd());
}
