//! Size-rotating file sink
//!
//! Lines are appended to `<path>` until the next line would bring the file
//! to `max_bytes`. The file is then rotated: `<path>.1` becomes `<path>.2`
//! and so on up to `<path>.<backup_count>`, `<path>` becomes `<path>.1`,
//! and a fresh `<path>` is started. The oldest backup is dropped.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::traits::Sink;
use crate::error::{LogError, LogResult};
use crate::level::Level;

struct FileState {
    file: Option<File>,
    size: u64,
}

/// A sink appending UTF-8 lines to a size-rotated file
pub struct RotatingFileSink {
    path: PathBuf,
    max_bytes: u64,
    backup_count: usize,
    state: Mutex<FileState>,
}

impl RotatingFileSink {
    /// Open `path` for appending, creating missing parent directories
    ///
    /// `max_bytes == 0` disables rotation. With `backup_count == 0` the
    /// file is truncated instead of rotated.
    pub fn open(path: impl Into<PathBuf>, max_bytes: u64, backup_count: usize) -> LogResult<Self> {
        let path = path.into();
        ensure_parent_dir(&path)?;
        let file = open_append(&path).map_err(|e| LogError::open_file(&path, e))?;
        let size = file
            .metadata()
            .map(|m| m.len())
            .map_err(|e| LogError::open_file(&path, e))?;

        Ok(Self {
            path,
            max_bytes,
            backup_count,
            state: Mutex::new(FileState {
                file: Some(file),
                size,
            }),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    pub fn backup_count(&self) -> usize {
        self.backup_count
    }

    /// Path of the `index`-th backup (`<path>.<index>`)
    pub fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(format!(".{}", index));
        PathBuf::from(name)
    }

    /// Current size of the active file as tracked by the sink
    pub fn current_size(&self) -> u64 {
        self.state.lock().size
    }

    fn should_rollover(&self, current: u64, incoming: u64) -> bool {
        // an empty file is never rotated, even for a line larger than the limit
        self.max_bytes > 0 && current > 0 && current + incoming >= self.max_bytes
    }

    fn rollover(&self, state: &mut FileState) -> io::Result<()> {
        // close before renaming
        state.file = None;

        if self.backup_count == 0 {
            state.file = Some(File::create(&self.path)?);
            state.size = 0;
            return Ok(());
        }

        for index in (1..self.backup_count).rev() {
            let src = self.backup_path(index);
            if src.exists() {
                let dst = self.backup_path(index + 1);
                if dst.exists() {
                    fs::remove_file(&dst)?;
                }
                fs::rename(&src, &dst)?;
            }
        }

        let first = self.backup_path(1);
        if first.exists() {
            fs::remove_file(&first)?;
        }
        if self.path.exists() {
            fs::rename(&self.path, &first)?;
        }

        state.file = Some(open_append(&self.path)?);
        state.size = 0;
        Ok(())
    }
}

impl std::fmt::Debug for RotatingFileSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFileSink")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("backup_count", &self.backup_count)
            .finish()
    }
}

impl Sink for RotatingFileSink {
    fn write_line(&self, _level: Level, line: &str) -> io::Result<()> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        let incoming = buf.len() as u64;

        let mut state = self.state.lock();
        if self.should_rollover(state.size, incoming) {
            self.rollover(&mut state)?;
        }

        // a failed rollover leaves no handle; reopen on the next write
        if state.file.is_none() {
            let file = open_append(&self.path)?;
            state.size = file.metadata()?.len();
            state.file = Some(file);
        }

        if let Some(file) = state.file.as_mut() {
            file.write_all(buf.as_bytes())?;
        }
        state.size += incoming;
        Ok(())
    }

    fn flush(&self) -> io::Result<()> {
        match self.state.lock().file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

/// Create every missing parent directory of `path`
pub fn ensure_parent_dir(path: &Path) -> LogResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| LogError::create_directory(parent, e))?;
        }
    }
    Ok(())
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
