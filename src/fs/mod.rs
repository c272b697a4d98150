pub mod dentry;
pub mod entry;
pub mod error;
pub mod namespace;

use lazy_static::lazy_static;
use namespace::Namespace;
use spin::Mutex;

lazy_static! {
    /// The kernel's single namespace instance. Shell commands take the lock
    /// for the whole operation; the engine itself has no internal locking.
    pub static ref NAMESPACE: Mutex<Namespace> = Mutex::new(Namespace::new());
}

pub fn init() {
    let ns = NAMESPACE.lock();
    crate::log_info!(
        "Namespace initialized: {} of {} entries in use.",
        ns.entry_count(),
        ns.capacity()
    );
}
