//! The `-l` renderer: one aligned line per entry plus a block total.

use crate::listing::Entry;
use dlcore::fs::display_permissions;

/// Per-set field widths. Alignment is local to one listing, so two
/// directories rendered in the same run can pick different widths.
struct FieldWidths {
    nlink: usize,
    owner: usize,
    group: usize,
    size: usize,
}

fn field_widths(entries: &[Entry]) -> FieldWidths {
    let mut widths = FieldWidths {
        nlink: 0,
        owner: 0,
        group: 0,
        size: 0,
    };
    for entry in entries {
        widths.nlink = widths.nlink.max(entry.nlink.to_string().len());
        widths.owner = widths.owner.max(entry.owner.len());
        widths.group = widths.group.max(entry.group.len());
        widths.size = widths.size.max(entry.size.to_string().len());
    }
    widths
}

/// Render `entries` in long form. Listings with more than one entry lead
/// with a `total <blocks>` line summing the allocated blocks in the unit
/// lstat reports them (no block-size normalization is attempted).
pub fn layout(entries: &[Entry]) -> Vec<String> {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    if entries.len() > 1 {
        let total: u64 = entries.iter().map(|e| e.blocks).sum();
        lines.push(format!("total {total}"));
    }
    let widths = field_widths(entries);
    for entry in entries {
        lines.push(build_row(entry, &widths));
    }
    lines
}

fn build_row(entry: &Entry, widths: &FieldWidths) -> String {
    // Device nodes show "major, minor" at its natural width; regular sizes
    // are right-aligned to the widest size in the set.
    let size_field = match entry.rdev {
        Some((major, minor)) => format!("{major}, {minor}"),
        None => format!("{:>width$}", entry.size, width = widths.size),
    };
    format!(
        "{}{} {:>nw$} {:<ow$} {:<gw$} {} {} {}",
        entry.kind.type_mark(),
        display_permissions(entry.mode),
        entry.nlink,
        entry.owner,
        entry.group,
        size_field,
        entry.time,
        entry.name,
        nw = widths.nlink,
        ow = widths.owner,
        gw = widths.group,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::EntryKind;
    use pretty_assertions::assert_eq;

    fn entry(name: &str, kind: EntryKind, mode: u32, size: u64, blocks: u64) -> Entry {
        Entry {
            name: name.to_string(),
            kind,
            mode,
            nlink: 1,
            owner: "alice".to_string(),
            group: "staff".to_string(),
            size,
            rdev: None,
            time: "Jun 01 12:30".to_string(),
            blocks,
        }
    }

    #[test]
    fn regular_file_row() {
        let entries = [entry("notes.txt", EntryKind::Regular, 0o644, 4096, 8)];
        assert_eq!(
            layout(&entries),
            ["-rw-r--r-- 1 alice staff 4096 Jun 01 12:30 notes.txt"]
        );
    }

    #[test]
    fn single_entry_has_no_total_line() {
        let entries = [entry("one", EntryKind::Regular, 0o644, 1, 8)];
        assert_eq!(layout(&entries).len(), 1);
    }

    #[test]
    fn total_sums_blocks_over_the_set() {
        let entries = [
            entry("a", EntryKind::Regular, 0o644, 10, 8),
            entry("b", EntryKind::Regular, 0o644, 20, 16),
            entry("c", EntryKind::Regular, 0o644, 30, 0),
        ];
        assert_eq!(layout(&entries)[0], "total 24");
    }

    #[test]
    fn columns_align_on_the_widest_field() {
        let mut wide = entry("big", EntryKind::Regular, 0o755, 123456, 0);
        wide.owner = "administrator".to_string();
        wide.nlink = 12;
        let entries = [wide, entry("small", EntryKind::Regular, 0o644, 5, 0)];

        let lines = layout(&entries);
        assert_eq!(
            lines[1],
            "-rwxr-xr-x 12 administrator staff 123456 Jun 01 12:30 big"
        );
        assert_eq!(
            lines[2],
            "-rw-r--r--  1 alice         staff      5 Jun 01 12:30 small"
        );
    }

    #[test]
    fn device_rows_show_major_minor_instead_of_size() {
        let mut dev = entry("tty0", EntryKind::CharDevice, 0o620, 0, 0);
        dev.rdev = Some((4, 0));
        let entries = [dev, entry("disk.img", EntryKind::Regular, 0o644, 1048576, 0)];

        let lines = layout(&entries);
        assert_eq!(lines[1], "crw--w---- 1 alice staff 4, 0 Jun 01 12:30 tty0");
        assert_eq!(
            lines[2],
            "-rw-r--r-- 1 alice staff 1048576 Jun 01 12:30 disk.img"
        );
    }

    #[test]
    fn directory_and_symlink_type_marks() {
        let entries = [
            entry("src", EntryKind::Directory, 0o755, 4096, 8),
            entry("link -> src", EntryKind::Symlink, 0o777, 3, 0),
        ];
        let lines = layout(&entries);
        assert!(lines[1].starts_with("drwxr-xr-x"));
        assert!(lines[2].starts_with("lrwxrwxrwx"));
        assert!(lines[2].ends_with("link -> src"));
    }
}
