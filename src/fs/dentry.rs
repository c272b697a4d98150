use alloc::string::String;

use super::entry::EntryKind;

/// A directory listing record: the name and kind of one child entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}
