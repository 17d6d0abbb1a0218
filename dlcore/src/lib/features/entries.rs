//! Lookups in the passwd and group databases.
//!
//! Thin safe wrappers over the reentrant libc calls. Callers that want the
//! numeric-id fallback do it themselves:
//!
//! ```no_run
//! # let uid = 0;
//! let owner = dlcore::entries::uid2usr(uid).unwrap_or_else(|_| uid.to_string());
//! ```

use std::ffi::CStr;
use std::io;

use libc::{ERANGE, c_char, getgrgid_r, getpwuid_r, gid_t, group, passwd, uid_t};

/// Look up the user name for `uid`.
pub fn uid2usr(uid: uid_t) -> io::Result<String> {
    let mut buf = vec![0 as c_char; 1024];
    loop {
        let mut pwd: passwd = unsafe { std::mem::zeroed() };
        let mut result = std::ptr::null_mut();
        let ret = unsafe { getpwuid_r(uid, &mut pwd, buf.as_mut_ptr(), buf.len(), &mut result) };
        if ret == ERANGE {
            // buffer too small for this record
            buf.resize(buf.len() * 2, 0);
            continue;
        }
        if ret != 0 {
            return Err(io::Error::from_raw_os_error(ret));
        }
        if result.is_null() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no user with uid {uid}"),
            ));
        }
        let name = unsafe { CStr::from_ptr(pwd.pw_name) };
        return Ok(name.to_string_lossy().into_owned());
    }
}

/// Look up the group name for `gid`.
pub fn gid2grp(gid: gid_t) -> io::Result<String> {
    let mut buf = vec![0 as c_char; 1024];
    loop {
        let mut grp: group = unsafe { std::mem::zeroed() };
        let mut result = std::ptr::null_mut();
        let ret = unsafe { getgrgid_r(gid, &mut grp, buf.as_mut_ptr(), buf.len(), &mut result) };
        if ret == ERANGE {
            buf.resize(buf.len() * 2, 0);
            continue;
        }
        if ret != 0 {
            return Err(io::Error::from_raw_os_error(ret));
        }
        if result.is_null() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no group with gid {gid}"),
            ));
        }
        let name = unsafe { CStr::from_ptr(grp.gr_name) };
        return Ok(name.to_string_lossy().into_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_the_current_user() {
        let uid = unsafe { libc::getuid() };
        // The current user always has a passwd entry on the systems we test on.
        let name = uid2usr(uid).unwrap();
        assert!(!name.is_empty());
    }

    #[test]
    fn unknown_ids_report_not_found() {
        // Near the top of the uid range, unlikely to be allocated.
        let bogus: uid_t = uid_t::MAX - 3;
        assert!(uid2usr(bogus).is_err());
        assert!(gid2grp(bogus as gid_t).is_err());
    }
}
