use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use lazy_static::lazy_static;
use spin::Mutex;

const KLOG_CAPACITY: usize = 64;

/// Kernel command log ring buffer.
pub struct KernelLog {
    pub entries: Vec<String>,
}

impl KernelLog {
    pub fn new() -> Self {
        KernelLog { entries: Vec::new() }
    }

    pub fn push(&mut self, msg: String) {
        if self.entries.len() >= KLOG_CAPACITY {
            self.entries.remove(0);
        }
        self.entries.push(msg);
    }
}

lazy_static! {
    pub static ref KLOG: Mutex<KernelLog> = Mutex::new(KernelLog::new());
}

/// Log a command execution to the kernel log buffer, tick-stamped.
pub fn log_cmd(msg: &str) {
    let ticks = crate::shell::commands::uptime::TICKS.load(core::sync::atomic::Ordering::Relaxed);
    KLOG.lock().push(format!("[{}] {}", ticks, msg));
}
