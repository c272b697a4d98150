use crate::println;
use super::super::state;

/// log [n] — display the kernel command log buffer.
pub fn run(args: &str) {
    let klog = state::KLOG.lock();

    if klog.entries.is_empty() {
        println!("(no log entries)");
        return;
    }

    let count = args.trim().parse::<usize>().unwrap_or(klog.entries.len());
    let start = klog.entries.len().saturating_sub(count);

    for entry in &klog.entries[start..] {
        println!("  {}", entry);
    }
}
