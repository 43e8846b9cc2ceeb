use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// How long a store write waits for other writers by default
pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(5);

/// Longest pause between two lock attempts
const MAX_BACKOFF: Duration = Duration::from_millis(50);

/// Exclusive writer lock on one store document.
///
/// The lock is an flock on a sibling `<file>.lock` that is created once and
/// never removed: every writer must contend on the same inode, so the file
/// outlives any single holder. Dropping the guard closes the descriptor,
/// which releases the lock. The document itself is replaced by rename while
/// the lock is held.
#[derive(Debug)]
pub struct StoreLock {
    _file: File,
    store: PathBuf,
}

/// Error type for lock operations
#[derive(Debug, thiserror::Error)]
pub enum LockError {
    #[error("could not open lock file {path}: {source}")]
    CreateError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("store {store} is busy: another mis process is still writing")]
    Timeout { store: PathBuf },
}

impl StoreLock {
    /// Lock the document at `store_path`, waiting up to `timeout`.
    pub fn acquire(store_path: &Path, timeout: Duration) -> Result<Self, LockError> {
        let lock_path = lock_path_for(store_path);
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| LockError::CreateError {
                path: lock_path,
                source: e,
            })?;

        let start = Instant::now();
        let mut backoff = Duration::from_millis(1);
        while try_lock(&file).is_err() {
            if start.elapsed() >= timeout {
                return Err(LockError::Timeout {
                    store: store_path.to_path_buf(),
                });
            }
            std::thread::sleep(backoff);
            backoff = (backoff * 2).min(MAX_BACKOFF);
        }
        Ok(StoreLock {
            _file: file,
            store: store_path.to_path_buf(),
        })
    }

    /// Run `f` while holding the writer lock on `store_path`.
    pub fn with_lock<T>(store_path: &Path, f: impl FnOnce() -> T) -> Result<T, LockError> {
        let _guard = Self::acquire(store_path, DEFAULT_LOCK_TIMEOUT)?;
        Ok(f())
    }

    /// Document this guard protects
    pub fn store_path(&self) -> &Path {
        &self.store
    }
}

fn lock_path_for(store_path: &Path) -> PathBuf {
    let mut name = store_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".lock");
    store_path.with_file_name(name)
}

#[cfg(unix)]
fn try_lock(file: &File) -> Result<(), std::io::Error> {
    use std::os::unix::io::AsRawFd;
    let result = unsafe { libc::flock(file.as_raw_fd(), libc::LOCK_EX | libc::LOCK_NB) };
    if result == 0 {
        Ok(())
    } else {
        Err(std::io::Error::last_os_error())
    }
}

#[cfg(not(unix))]
fn try_lock(_file: &File) -> Result<(), std::io::Error> {
    Ok(())
}
