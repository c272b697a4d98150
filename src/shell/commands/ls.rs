use crate::fs::entry::EntryKind;
use crate::println;

/// ls [dir] — list directory entries in table order.
pub fn run(args: &str) {
    let path = args.trim();
    let ns = crate::fs::NAMESPACE.lock();
    let listing = if path.is_empty() {
        ns.list(None)
    } else {
        ns.list(Some(path))
    };

    match listing {
        Ok(entries) if entries.is_empty() => println!("(empty)"),
        Ok(entries) => {
            for entry in entries {
                match entry.kind {
                    EntryKind::Directory => println!("  {}/", entry.name),
                    EntryKind::Regular => println!("  {}", entry.name),
                }
            }
        }
        Err(err) => println!("ls: {}: {}", path, err),
    }
}
