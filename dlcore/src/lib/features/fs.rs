//! Rendering of filesystem permission bits.

/// Render the low nine mode bits as the classic `rwxrwxrwx` string, one
/// triplet each for owner, group and other. Setuid, setgid and sticky bits
/// are not rendered; the nine characters always stand for the plain
/// read/write/execute bits.
pub fn display_permissions(mode: u32) -> String {
    let mut out = String::with_capacity(9);
    for shift in [6u32, 3, 0] {
        let triplet = (mode >> shift) & 0o7;
        out.push(if triplet & 0o4 != 0 { 'r' } else { '-' });
        out.push(if triplet & 0o2 != 0 { 'w' } else { '-' });
        out.push(if triplet & 0o1 != 0 { 'x' } else { '-' });
    }
    out
}
