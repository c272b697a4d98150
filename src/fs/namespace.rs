use alloc::string::String;
use alloc::vec::Vec;

use super::dentry::DirEntry;
use super::entry::{Entry, EntryKind, DEFAULT_CAPACITY, MAX_NAME_LEN};
use super::error::{FsError, FsResult};

/// Path separator character.
pub const SEPARATOR: char = '/';

/// Table index of the root directory.
pub const ROOT_INDEX: usize = 0;

/// The namespace engine: a flat, append-only table of entries linked by
/// parent indices, plus the shell's cursor (current directory and its
/// canonical absolute path).
///
/// Indices are stable identities: entries are never removed or moved, so
/// a lookup is a linear scan over the live table filtered by parent. That
/// is O(entries) per path component, which is fine at this capacity and
/// keeps listing order equal to insertion order.
pub struct Namespace {
    entries: Vec<Entry>,
    capacity: usize,
    cwd: usize,
    cwd_path: String,
}

impl Namespace {
    pub fn new() -> Namespace {
        Namespace::with_capacity(DEFAULT_CAPACITY)
    }

    /// A fresh namespace holding only the root directory, with room for
    /// `capacity` entries in total (root included).
    pub fn with_capacity(capacity: usize) -> Namespace {
        let mut entries = Vec::with_capacity(capacity);
        entries.push(Entry::root());
        Namespace {
            entries,
            capacity,
            cwd: ROOT_INDEX,
            cwd_path: String::from("/"),
        }
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn entry(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Index of the current directory.
    pub fn cwd(&self) -> usize {
        self.cwd
    }

    /// Canonical absolute path of the current directory.
    pub fn pwd(&self) -> &str {
        &self.cwd_path
    }

    /// Exact-name lookup of a child of `dir`. Linear scan by design; see
    /// the type-level comment.
    fn find_in_dir(&self, dir: usize, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.parent == dir && entry.name == name)
    }

    /// Resolve `path` to a directory index.
    ///
    /// Absolute paths restart at the root; relative paths start at `start`.
    /// `".."` steps to the parent (a no-op at the root, which is its own
    /// parent). Every other component must name a directory: a missing name
    /// is `NotFound`, an existing non-directory is `NotADirectory`. Empty
    /// components (doubled or trailing separators) are skipped.
    pub fn resolve(&self, path: &str, start: usize) -> FsResult<usize> {
        let (mut dir, rest) = match path.strip_prefix(SEPARATOR) {
            Some(rest) => (ROOT_INDEX, rest),
            None => (start, path),
        };
        if dir >= self.entries.len() {
            return Err(FsError::NotFound);
        }
        if rest.is_empty() {
            // "/" or an empty relative path
            return Ok(dir);
        }

        for component in rest.split(SEPARATOR).filter(|c| !c.is_empty()) {
            if component == ".." {
                dir = self.entries[dir].parent;
                continue;
            }

            let found = self.find_in_dir(dir, component).ok_or(FsError::NotFound)?;
            if self.entries[found].kind != EntryKind::Directory {
                return Err(FsError::NotADirectory);
            }
            dir = found;
        }

        Ok(dir)
    }

    /// Create a directory, returning its table index.
    ///
    /// The path splits at the last separator into a parent portion and the
    /// new name; without a separator the parent is the current directory.
    /// Parent resolution failures surface as `ParentNotFound` /
    /// `ParentNotADirectory`. The name is truncated to `MAX_NAME_LEN`
    /// characters before the sibling-uniqueness check.
    pub fn mkdir(&mut self, path: &str) -> FsResult<usize> {
        let trimmed = path.trim_end_matches(SEPARATOR);
        if trimmed.is_empty() {
            return Err(FsError::InvalidPath);
        }

        let (parent, leaf) = match trimmed.rfind(SEPARATOR) {
            Some(pos) => {
                let parent_path = if pos == 0 { "/" } else { &trimmed[..pos] };
                let parent = self.resolve(parent_path, self.cwd).map_err(|err| match err {
                    FsError::NotFound => FsError::ParentNotFound,
                    FsError::NotADirectory => FsError::ParentNotADirectory,
                    other => other,
                })?;
                (parent, &trimmed[pos + 1..])
            }
            None => (self.cwd, trimmed),
        };

        let name: String = leaf.chars().take(MAX_NAME_LEN).collect();

        if self.find_in_dir(parent, &name).is_some() {
            return Err(FsError::AlreadyExists);
        }
        if self.entries.len() == self.capacity {
            return Err(FsError::AtCapacity);
        }

        let index = self.entries.len();
        self.entries.push(Entry::directory(name, parent));
        Ok(index)
    }

    /// List the children of the directory at `path` (or of the current
    /// directory), in table order.
    pub fn list(&self, path: Option<&str>) -> FsResult<Vec<DirEntry>> {
        let dir = match path {
            Some(path) => self.resolve(path, self.cwd)?,
            None => self.cwd,
        };

        // The index filter excludes the root's self-reference; no other
        // entry can be its own parent.
        Ok(self
            .entries
            .iter()
            .enumerate()
            .filter(|(index, entry)| entry.parent == dir && *index != dir)
            .map(|(_, entry)| DirEntry {
                name: entry.name.clone(),
                kind: entry.kind,
            })
            .collect())
    }

    /// Change the current directory. On failure the cursor is untouched.
    pub fn chdir(&mut self, path: &str) -> FsResult<()> {
        let dir = self.resolve(path, self.cwd)?;
        self.cwd = dir;
        self.cwd_path = self.absolute_path(dir);
        Ok(())
    }

    /// Rebuild the canonical absolute path of `dir` by walking the parent
    /// chain up to the root.
    fn absolute_path(&self, mut dir: usize) -> String {
        if dir == ROOT_INDEX {
            return String::from("/");
        }

        let mut names: Vec<&str> = Vec::new();
        while dir != ROOT_INDEX {
            names.push(&self.entries[dir].name);
            dir = self.entries[dir].parent;
        }

        let mut path = String::new();
        for name in names.iter().rev() {
            path.push(SEPARATOR);
            path.push_str(name);
        }
        path
    }
}

impl Default for Namespace {
    fn default() -> Namespace {
        Namespace::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    /// Seed a Regular entry directly; no public operation creates files.
    fn touch(ns: &mut Namespace, parent: usize, name: &str) -> usize {
        let index = ns.entries.len();
        ns.entries.push(Entry {
            name: name.to_string(),
            kind: EntryKind::Regular,
            size: 0,
            parent,
            content: [0; super::super::entry::ENTRY_CONTENT_CAPACITY],
        });
        index
    }

    #[test]
    fn fresh_namespace_holds_only_root() {
        let ns = Namespace::new();
        assert_eq!(ns.entry_count(), 1);
        assert_eq!(ns.capacity(), DEFAULT_CAPACITY);
        assert_eq!(ns.cwd(), ROOT_INDEX);
        assert_eq!(ns.pwd(), "/");

        let root = ns.entry(ROOT_INDEX).unwrap();
        assert_eq!(root.kind, EntryKind::Directory);
        assert_eq!(root.parent, ROOT_INDEX);
    }

    #[test]
    fn resolve_root_from_any_start() {
        let mut ns = Namespace::new();
        let docs = ns.mkdir("docs").unwrap();
        assert_eq!(ns.resolve("/", ROOT_INDEX).unwrap(), ROOT_INDEX);
        assert_eq!(ns.resolve("/", docs).unwrap(), ROOT_INDEX);
    }

    #[test]
    fn mkdir_appends_one_entry_with_live_directory_parent() {
        let mut ns = Namespace::new();
        for name in ["a", "b", "c"] {
            let before = ns.entry_count();
            let index = ns.mkdir(name).unwrap();
            assert_eq!(ns.entry_count(), before + 1);
            assert_eq!(index, before);

            let parent = ns.entry(index).unwrap().parent;
            assert_eq!(ns.entry(parent).unwrap().kind, EntryKind::Directory);
        }
    }

    #[test]
    fn mkdir_resolves_nested_parents() {
        let mut ns = Namespace::new();
        let a = ns.mkdir("a").unwrap();
        let b = ns.mkdir("a/b").unwrap();
        assert_eq!(ns.entry(b).unwrap().parent, a);
        assert_eq!(ns.resolve("/a/b", ROOT_INDEX).unwrap(), b);
    }

    #[test]
    fn mkdir_duplicate_name_fails_without_mutation() {
        let mut ns = Namespace::new();
        ns.mkdir("a").unwrap();
        let before = ns.entry_count();
        assert_eq!(ns.mkdir("a"), Err(FsError::AlreadyExists));
        assert_eq!(ns.entry_count(), before);
    }

    #[test]
    fn duplicate_check_ignores_entry_kind() {
        let mut ns = Namespace::new();
        touch(&mut ns, ROOT_INDEX, "notes");
        assert_eq!(ns.mkdir("notes"), Err(FsError::AlreadyExists));
    }

    #[test]
    fn mkdir_at_capacity_fails_without_mutation() {
        let mut ns = Namespace::with_capacity(4);
        ns.mkdir("a").unwrap();
        ns.mkdir("b").unwrap();
        ns.mkdir("c").unwrap();
        assert_eq!(ns.entry_count(), 4);
        assert_eq!(ns.mkdir("d"), Err(FsError::AtCapacity));
        assert_eq!(ns.entry_count(), 4);
    }

    #[test]
    fn mkdir_with_missing_parent_creates_nothing() {
        let mut ns = Namespace::new();
        assert_eq!(ns.mkdir("a/b"), Err(FsError::ParentNotFound));
        assert_eq!(ns.entry_count(), 1);
    }

    #[test]
    fn mkdir_through_a_file_reports_parent_not_a_directory() {
        let mut ns = Namespace::new();
        touch(&mut ns, ROOT_INDEX, "file");
        assert_eq!(ns.mkdir("file/sub"), Err(FsError::ParentNotADirectory));
    }

    #[test]
    fn mkdir_absolute_path_ignores_cursor() {
        let mut ns = Namespace::new();
        ns.mkdir("docs").unwrap();
        ns.chdir("docs").unwrap();
        let top = ns.mkdir("/top").unwrap();
        assert_eq!(ns.entry(top).unwrap().parent, ROOT_INDEX);
    }

    #[test]
    fn mkdir_ignores_trailing_separators() {
        let mut ns = Namespace::new();
        let a = ns.mkdir("a/").unwrap();
        assert_eq!(ns.entry(a).unwrap().name, "a");
    }

    #[test]
    fn mkdir_rejects_separator_only_paths() {
        let mut ns = Namespace::new();
        assert_eq!(ns.mkdir(""), Err(FsError::InvalidPath));
        assert_eq!(ns.mkdir("/"), Err(FsError::InvalidPath));
        assert_eq!(ns.mkdir("///"), Err(FsError::InvalidPath));
    }

    #[test]
    fn mkdir_truncates_long_names() {
        let mut ns = Namespace::new();
        let long = "x".repeat(MAX_NAME_LEN + 9);
        let index = ns.mkdir(&long).unwrap();
        assert_eq!(ns.entry(index).unwrap().name.chars().count(), MAX_NAME_LEN);
    }

    #[test]
    fn resolve_missing_component_is_not_found() {
        let ns = Namespace::new();
        assert_eq!(ns.resolve("nope", ROOT_INDEX), Err(FsError::NotFound));
        assert_eq!(ns.resolve("/nope", ROOT_INDEX), Err(FsError::NotFound));
    }

    #[test]
    fn resolve_through_a_file_is_not_a_directory() {
        let mut ns = Namespace::new();
        touch(&mut ns, ROOT_INDEX, "file");
        assert_eq!(ns.resolve("file", ROOT_INDEX), Err(FsError::NotADirectory));
        assert_eq!(ns.resolve("/file/deeper", ROOT_INDEX), Err(FsError::NotADirectory));
    }

    #[test]
    fn resolve_skips_empty_components() {
        let mut ns = Namespace::new();
        let a = ns.mkdir("a").unwrap();
        let b = ns.mkdir("a/b").unwrap();
        assert_eq!(ns.resolve("a//b", ROOT_INDEX).unwrap(), b);
        assert_eq!(ns.resolve("/a/", ROOT_INDEX).unwrap(), a);
    }

    #[test]
    fn dotdot_walks_to_parent_and_stops_at_root() {
        let mut ns = Namespace::new();
        let a = ns.mkdir("a").unwrap();
        ns.mkdir("a/b").unwrap();
        let b = ns.resolve("a/b", ROOT_INDEX).unwrap();
        assert_eq!(ns.resolve("..", b).unwrap(), a);
        assert_eq!(ns.resolve("../..", b).unwrap(), ROOT_INDEX);
        // Root is its own parent, so ".." saturates there
        assert_eq!(ns.resolve("../../../..", b).unwrap(), ROOT_INDEX);
    }

    #[test]
    fn chdir_updates_cursor_and_path() {
        let mut ns = Namespace::new();
        let docs = ns.mkdir("docs").unwrap();
        ns.chdir("docs").unwrap();
        assert_eq!(ns.cwd(), docs);
        assert_eq!(ns.pwd(), "/docs");
    }

    #[test]
    fn pwd_round_trips_through_resolve() {
        let mut ns = Namespace::new();
        ns.mkdir("a").unwrap();
        ns.mkdir("a/b").unwrap();
        ns.mkdir("a/b/c").unwrap();
        ns.chdir("a/b/c").unwrap();
        assert_eq!(ns.pwd(), "/a/b/c");
        assert_eq!(ns.resolve(ns.pwd(), ROOT_INDEX).unwrap(), ns.cwd());
    }

    #[test]
    fn chdir_dotdot_from_root_is_a_noop() {
        let mut ns = Namespace::new();
        ns.chdir("..").unwrap();
        assert_eq!(ns.cwd(), ROOT_INDEX);
        assert_eq!(ns.pwd(), "/");
    }

    #[test]
    fn failed_chdir_leaves_cursor_untouched() {
        let mut ns = Namespace::new();
        assert_eq!(ns.chdir("/nope"), Err(FsError::NotFound));
        assert_eq!(ns.cwd(), ROOT_INDEX);
        assert_eq!(ns.pwd(), "/");

        ns.mkdir("docs").unwrap();
        ns.chdir("docs").unwrap();
        touch(&mut ns, ROOT_INDEX, "file");
        assert_eq!(ns.chdir("/file"), Err(FsError::NotADirectory));
        assert_eq!(ns.pwd(), "/docs");
    }

    #[test]
    fn list_returns_children_in_insertion_order() {
        let mut ns = Namespace::new();
        ns.mkdir("b").unwrap();
        ns.mkdir("a").unwrap();
        touch(&mut ns, ROOT_INDEX, "z");

        let names: Vec<_> = ns
            .list(None)
            .unwrap()
            .into_iter()
            .map(|entry| entry.name)
            .collect();
        assert_eq!(names, ["b", "a", "z"]);
    }

    #[test]
    fn list_root_excludes_the_root_itself() {
        let ns = Namespace::new();
        assert!(ns.list(None).unwrap().is_empty());
        assert!(ns.list(Some("/")).unwrap().is_empty());
    }

    #[test]
    fn list_of_path_propagates_resolution_errors() {
        let ns = Namespace::new();
        assert_eq!(ns.list(Some("ghost")), Err(FsError::NotFound));
    }

    #[test]
    fn list_reports_entry_kinds() {
        let mut ns = Namespace::new();
        ns.mkdir("dir").unwrap();
        touch(&mut ns, ROOT_INDEX, "file");

        let listing = ns.list(None).unwrap();
        assert_eq!(listing[0].kind, EntryKind::Directory);
        assert_eq!(listing[1].kind, EntryKind::Regular);
    }

    #[test]
    fn docs_and_notes_walkthrough() {
        let mut ns = Namespace::new();

        ns.mkdir("docs").unwrap();
        ns.chdir("docs").unwrap();
        assert_eq!(ns.pwd(), "/docs");

        ns.mkdir("notes").unwrap();
        ns.chdir("..").unwrap();
        assert_eq!(ns.pwd(), "/");

        let listing = ns.list(None).unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].name, "docs");
        assert_eq!(listing[0].kind, EntryKind::Directory);

        let docs_listing = ns.list(Some("docs")).unwrap();
        assert_eq!(docs_listing.len(), 1);
        assert_eq!(docs_listing[0].name, "notes");
    }

    #[test]
    fn capacity_is_reached_exactly_once() {
        let capacity = 8;
        let mut ns = Namespace::with_capacity(capacity);
        for i in 0..capacity - 1 {
            let name = alloc::format!("dir{}", i);
            ns.mkdir(&name).unwrap();
        }
        assert_eq!(ns.entry_count(), capacity);
        assert_eq!(ns.mkdir("one-more"), Err(FsError::AtCapacity));
        assert_eq!(ns.entry_count(), capacity);
    }
}
