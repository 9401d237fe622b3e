//! Size-rotating file writer used by the file output layer.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing_subscriber::fmt::MakeWriter;

use super::config::{FileConfig, RotationConfig};
use super::error::LoggerError;

/// File writer with size-based rotation.
///
/// If the file cannot be written (disk full, file removed from under us),
/// output falls back to stderr rather than being lost.
pub struct RotatingFileWriter {
    state: Arc<Mutex<WriterState>>,
}

/// Per-event handle; flushes the buffered file when the event is done.
pub struct RotatingWriterGuard {
    state: Arc<Mutex<WriterState>>,
}

struct WriterState {
    path: PathBuf,
    rotation: RotationConfig,
    file: BufWriter<File>,
    current_size: u64,
    fallback_mode: bool,
}

impl RotatingFileWriter {
    pub fn new(config: &FileConfig) -> Result<Self, LoggerError> {
        if let Some(parent) = config.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let file = open_log_file(&config.path, config.append)?;
        let current_size = if config.append {
            fs::metadata(&config.path).map(|m| m.len()).unwrap_or(0)
        } else {
            0
        };

        Ok(Self {
            state: Arc::new(Mutex::new(WriterState {
                path: config.path.clone(),
                rotation: config.rotation.clone(),
                file,
                current_size,
                fallback_mode: false,
            })),
        })
    }
}

impl<'a> MakeWriter<'a> for RotatingFileWriter {
    type Writer = RotatingWriterGuard;

    fn make_writer(&'a self) -> Self::Writer {
        RotatingWriterGuard {
            state: self.state.clone(),
        }
    }
}

impl RotatingWriterGuard {
    fn lock(&self) -> io::Result<MutexGuard<'_, WriterState>> {
        self.state
            .lock()
            .map_err(|_| io::Error::other("Failed to acquire writer lock"))
    }
}

impl Write for RotatingWriterGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.lock()?;

        if state.fallback_mode {
            return io::stderr().write(buf);
        }

        if state.current_size > 0
            && state.current_size + buf.len() as u64 > state.rotation.max_size
            && let Err(e) = state.rotate()
        {
            return state.fall_back(buf, e);
        }

        match state.file.write(buf) {
            Ok(written) => {
                state.current_size += written as u64;
                Ok(written)
            }
            Err(e) => state.fall_back(buf, e),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut state = self.lock()?;
        if state.fallback_mode {
            return io::stderr().flush();
        }
        state.file.flush()
    }
}

impl Drop for RotatingWriterGuard {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            let _ = state.file.flush();
        }
    }
}

impl WriterState {
    /// Shifts `<path>.N` to `<path>.N+1`, drops whatever falls past
    /// `max_files`, and starts a fresh active file.
    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        let max_files = self.rotation.max_files;
        let oldest = rotated_path(&self.path, max_files);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..max_files).rev() {
            let from = rotated_path(&self.path, index);
            if from.exists() {
                fs::rename(&from, rotated_path(&self.path, index + 1))?;
            }
        }
        fs::rename(&self.path, rotated_path(&self.path, 1))?;

        self.file = open_log_file(&self.path, false)?;
        self.current_size = 0;
        Ok(())
    }

    fn fall_back(&mut self, buf: &[u8], error: io::Error) -> io::Result<usize> {
        self.fallback_mode = true;
        eprintln!(
            "[Logger] Writing to {} failed, falling back to stderr: {}",
            self.path.display(),
            error
        );
        io::stderr().write(buf)
    }
}

fn rotated_path(path: &Path, index: usize) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(format!(".{index}"));
    PathBuf::from(name)
}

fn open_log_file(path: &Path, append: bool) -> io::Result<BufWriter<File>> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)?;

    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn file_config(dir: &TempDir, max_size: u64, max_files: usize) -> FileConfig {
        FileConfig {
            enabled: true,
            path: dir.path().join("logs").join("app.log"),
            append: true,
            rotation: RotationConfig {
                max_size,
                max_files,
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let config = file_config(&dir, 1024, 2);

        let writer = RotatingFileWriter::new(&config).unwrap();
        writer.make_writer().write_all(b"hello\n").unwrap();

        assert_eq!(fs::read_to_string(&config.path).unwrap(), "hello\n");
    }

    #[test]
    fn test_rotates_when_size_exceeded() {
        let dir = TempDir::new().unwrap();
        let config = file_config(&dir, 10, 3);

        let writer = RotatingFileWriter::new(&config).unwrap();
        writer.make_writer().write_all(b"first-line\n").unwrap();
        writer.make_writer().write_all(b"second\n").unwrap();

        assert_eq!(fs::read_to_string(&config.path).unwrap(), "second\n");
        assert_eq!(
            fs::read_to_string(rotated_path(&config.path, 1)).unwrap(),
            "first-line\n"
        );
    }

    #[test]
    fn test_keeps_at_most_max_files() {
        let dir = TempDir::new().unwrap();
        let config = file_config(&dir, 1, 2);

        let writer = RotatingFileWriter::new(&config).unwrap();
        for line in ["a\n", "b\n", "c\n", "d\n"] {
            writer.make_writer().write_all(line.as_bytes()).unwrap();
        }

        assert_eq!(fs::read_to_string(&config.path).unwrap(), "d\n");
        assert_eq!(fs::read_to_string(rotated_path(&config.path, 1)).unwrap(), "c\n");
        assert_eq!(fs::read_to_string(rotated_path(&config.path, 2)).unwrap(), "b\n");
        assert!(!rotated_path(&config.path, 3).exists());
    }

    #[test]
    fn test_append_mode_counts_existing_bytes() {
        let dir = TempDir::new().unwrap();
        let config = file_config(&dir, 8, 1);
        fs::create_dir_all(config.path.parent().unwrap()).unwrap();
        fs::write(&config.path, "old-data").unwrap();

        let writer = RotatingFileWriter::new(&config).unwrap();
        writer.make_writer().write_all(b"new\n").unwrap();

        assert_eq!(fs::read_to_string(&config.path).unwrap(), "new\n");
        assert_eq!(
            fs::read_to_string(rotated_path(&config.path, 1)).unwrap(),
            "old-data"
        );
    }

    #[test]
    fn test_truncate_mode_discards_existing_content() {
        let dir = TempDir::new().unwrap();
        let mut config = file_config(&dir, 1024, 1);
        config.append = false;
        fs::create_dir_all(config.path.parent().unwrap()).unwrap();
        fs::write(&config.path, "stale").unwrap();

        let writer = RotatingFileWriter::new(&config).unwrap();
        writer.make_writer().write_all(b"fresh").unwrap();

        assert_eq!(fs::read_to_string(&config.path).unwrap(), "fresh");
    }
}
