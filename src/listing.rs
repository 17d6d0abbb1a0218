//! Metadata collection: one immutable snapshot per filesystem entry.

use std::fs::{self, FileType, Metadata};
use std::io;
use std::os::unix::fs::{FileTypeExt, MetadataExt};
use std::path::Path;
use std::time::UNIX_EPOCH;

use dlcore::display::Quotable;
use dlcore::show_warning;
use dlcore::{entries, time};

/// Fixed-width month/day/hour:minute, the only timestamp style we print.
const TIME_FORMAT: &str = "%b %d %H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Regular,
    Directory,
    Symlink,
    Fifo,
    CharDevice,
    BlockDevice,
    Socket,
}

impl EntryKind {
    fn from_file_type(ft: &FileType) -> Self {
        if ft.is_dir() {
            Self::Directory
        } else if ft.is_symlink() {
            Self::Symlink
        } else if ft.is_fifo() {
            Self::Fifo
        } else if ft.is_char_device() {
            Self::CharDevice
        } else if ft.is_block_device() {
            Self::BlockDevice
        } else if ft.is_socket() {
            Self::Socket
        } else {
            Self::Regular
        }
    }

    /// The single-character type column of the long format.
    pub fn type_mark(self) -> char {
        match self {
            Self::Regular => '-',
            Self::Directory => 'd',
            Self::Symlink => 'l',
            Self::Fifo => 'p',
            Self::CharDevice => 'c',
            Self::BlockDevice => 'b',
            Self::Socket => 's',
        }
    }
}

/// Everything we ever print about one entry, captured at collection time and
/// never touched again. Owner and group are resolved to names here, falling
/// back to the numeric id when the databases have no entry for it.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Display name; symbolic links carry their target as `name -> target`.
    pub name: String,
    pub kind: EntryKind,
    pub mode: u32,
    pub nlink: u64,
    pub owner: String,
    pub group: String,
    pub size: u64,
    /// `(major, minor)` for character and block devices, displayed in place
    /// of the size.
    pub rdev: Option<(u64, u64)>,
    /// Modification time, already rendered with [`TIME_FORMAT`].
    pub time: String,
    /// Allocated blocks as reported by lstat (512-byte units).
    pub blocks: u64,
}

impl Entry {
    fn from_metadata(path: &Path, name: &str, md: &Metadata) -> Self {
        let kind = EntryKind::from_file_type(&md.file_type());
        let name = match kind {
            EntryKind::Symlink => match path.read_link() {
                Ok(target) => format!("{name} -> {}", target.display()),
                Err(_) => name.to_string(),
            },
            _ => name.to_string(),
        };
        let uid = md.uid();
        let gid = md.gid();
        Self {
            name,
            kind,
            mode: md.mode(),
            nlink: md.nlink(),
            owner: entries::uid2usr(uid).unwrap_or_else(|_| uid.to_string()),
            group: entries::gid2grp(gid).unwrap_or_else(|_| gid.to_string()),
            size: md.len(),
            rdev: device_numbers(md),
            time: format_time(md),
            blocks: md.blocks(),
        }
    }
}

fn format_time(md: &Metadata) -> String {
    let time = md.modified().unwrap_or(UNIX_EPOCH);
    let mut out = Vec::with_capacity(12);
    if time::format_system_time(&mut out, time, TIME_FORMAT).is_err() {
        return String::from("?");
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[allow(unused_variables)]
fn device_numbers(md: &Metadata) -> Option<(u64, u64)> {
    #[cfg(any(
        target_os = "linux",
        target_os = "macos",
        target_os = "freebsd",
        target_os = "openbsd"
    ))]
    {
        let ft = md.file_type();
        if ft.is_char_device() || ft.is_block_device() {
            let dev = md.rdev() as dlcore::libc::dev_t;
            return Some((
                dlcore::libc::major(dev) as u64,
                dlcore::libc::minor(dev) as u64,
            ));
        }
    }
    None
}

/// The ordered entries collected for one input path.
#[derive(Debug)]
pub struct Listing {
    /// The path as the user spelled it, used for section headers.
    pub label: String,
    pub entries: Vec<Entry>,
}

impl Listing {
    /// Stable byte-order sort by display name. Reversal flips the sorted
    /// sequence afterwards rather than inverting the comparator.
    pub fn sort(&mut self, reverse: bool) {
        self.entries.sort_by(|a, b| a.name.cmp(&b.name));
        if reverse {
            self.entries.reverse();
        }
    }
}

/// What one input path resolved to.
#[derive(Debug)]
pub enum Resolved {
    Directory(Listing),
    File(Box<Entry>),
}

/// Read `path` into entries. A directory yields its immediate children
/// (dotfiles only with `include_hidden`, which also synthesizes `.` and
/// `..`); anything else yields the single entry itself. Children are never
/// dereferenced, so link entries report their own type. Ordering of the
/// result is whatever the directory iteration produced; sorting is the
/// caller's step.
pub fn collect(path: &Path, include_hidden: bool) -> io::Result<Resolved> {
    // Follows links, so a dangling symlink argument reports NotFound here.
    let md = path.metadata()?;

    if !md.is_dir() {
        let lmd = path.symlink_metadata()?;
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        return Ok(Resolved::File(Box::new(Entry::from_metadata(path, &name, &lmd))));
    }

    let mut entries = Vec::new();
    if include_hidden {
        entries.push(Entry::from_metadata(path, ".", &md));
        let parent = path.join("..");
        if let Ok(parent_md) = parent.symlink_metadata() {
            entries.push(Entry::from_metadata(&parent, "..", &parent_md));
        }
    }

    for dirent in fs::read_dir(path)? {
        let dirent = match dirent {
            Ok(dirent) => dirent,
            Err(err) => {
                show_warning!("error reading directory entry: {err}");
                continue;
            }
        };
        let name = dirent.file_name().to_string_lossy().into_owned();
        if !include_hidden && name.starts_with('.') {
            continue;
        }
        // The child can vanish between enumeration and lstat; drop it rather
        // than fail the whole listing.
        match dirent.path().symlink_metadata() {
            Ok(md) => entries.push(Entry::from_metadata(&dirent.path(), &name, &md)),
            Err(err) => show_warning!("cannot access {}: {err}", name.quote()),
        }
    }

    Ok(Resolved::Directory(Listing {
        label: path.display().to_string(),
        entries,
    }))
}
