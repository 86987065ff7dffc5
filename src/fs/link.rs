//! Link creation and removal through directory handles.
//!
//! Every mutation opens the parent with `O_DIRECTORY | O_NOFOLLOW` and then acts on
//! the final component with `*at` calls, so a swapped parent cannot redirect it.
use std::ffi::OsStr;
use std::io;
use std::path::Path;

use rustix::fd::OwnedFd;
use rustix::fs::{openat, symlinkat, unlinkat, AtFlags, Mode, OFlags, CWD};
use rustix::io::Errno;

use super::meta::kind_of;
use crate::types::NodeKind;

fn errno_to_io(e: Errno) -> io::Error {
    io::Error::from_raw_os_error(e.raw_os_error())
}

/// Open a directory with `O_DIRECTORY` | `O_NOFOLLOW`.
///
/// # Errors
///
/// Returns an IO error if the directory cannot be opened.
pub fn open_dir_nofollow(dir: &Path) -> io::Result<OwnedFd> {
    openat(
        CWD,
        dir,
        OFlags::RDONLY | OFlags::DIRECTORY | OFlags::CLOEXEC | OFlags::NOFOLLOW,
        Mode::empty(),
    )
    .map_err(errno_to_io)
}

fn fsync_dirfd(dirfd: &OwnedFd) -> io::Result<()> {
    rustix::fs::fsync(dirfd).map_err(errno_to_io)
}

/// Create `dir/name` as a symlink storing `target` verbatim.
///
/// # Errors
///
/// Returns an IO error if the parent cannot be opened or the link cannot be created
/// (including `AlreadyExists` when the name is occupied).
pub fn symlink_in(dir: &Path, name: &OsStr, target: &OsStr) -> io::Result<()> {
    let dirfd = open_dir_nofollow(dir)?;
    symlinkat(target, &dirfd, name).map_err(errno_to_io)?;
    let _ = fsync_dirfd(&dirfd);
    Ok(())
}

/// Remove whatever occupies `dir/name`.
///
/// Directory-style removal is tried first and only applies to real directories;
/// the file-style unlink that follows covers files and symlinks of either kind.
/// An attempt that does not apply is not an error; the call fails only when the
/// entry is still present afterwards.
///
/// # Errors
///
/// Returns the last removal error when the entry survives both attempts.
pub fn remove_existing(dir: &Path, name: &OsStr) -> io::Result<()> {
    let path = dir.join(name);
    let mut last_err: Option<io::Error> = None;

    if kind_of(&path) == NodeKind::Dir {
        if let Err(e) = std::fs::remove_dir_all(&path) {
            last_err = Some(e);
        }
    }

    let dirfd = open_dir_nofollow(dir)?;
    match unlinkat(&dirfd, name, AtFlags::empty()) {
        Ok(()) => {}
        Err(e) if e == Errno::NOENT || e == Errno::ISDIR => {}
        Err(e) => last_err = Some(errno_to_io(e)),
    }
    let _ = fsync_dirfd(&dirfd);

    if kind_of(&path).exists() {
        return Err(last_err.unwrap_or_else(|| {
            io::Error::new(
                io::ErrorKind::Other,
                format!("{} still present after removal", path.display()),
            )
        }));
    }
    Ok(())
}
