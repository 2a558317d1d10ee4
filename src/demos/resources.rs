//! `IDisposable`/`using` and `async`/`await`.
//!
//! Disposal is `Drop`: the value releases what it holds when its scope ends, on every exit path. The async
//! demonstration runs on a current-thread Tokio runtime and simulates the download with a timer.

use std::cell::RefCell;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use super::DemoResult;
use crate::config::TourConfig;

/// Unique scratch path for one run of a file-writing demonstration.
fn scratch_path(config: &TourConfig, stem: &str) -> PathBuf {
    static NEXT: AtomicU64 = AtomicU64::new(0);
    let n = NEXT.fetch_add(1, Ordering::Relaxed);
    config
        .scratch_dir
        .join(format!("keytour-{stem}-{}-{n}.txt", std::process::id()))
}

/// Run `work` against `path`, then remove the file whether or not `work` succeeded.
///
/// An error from `work` takes precedence over a failed removal; a file that was never created is not an error.
pub fn with_scratch_file<T>(path: &Path, work: impl FnOnce(&Path) -> io::Result<T>) -> io::Result<T> {
    let outcome = work(path);
    let removed = match fs::remove_file(path) {
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    };
    let value = outcome?;
    removed?;
    Ok(value)
}

// ----------------------------------------------------------------------------
// IDisposable / using
// ----------------------------------------------------------------------------

/// Holds a resource and records its own release.
#[derive(Debug)]
pub struct DisposableExample<'a> {
    name: &'static str,
    log: &'a RefCell<Vec<String>>,
}

impl<'a> DisposableExample<'a> {
    pub fn acquire(name: &'static str, log: &'a RefCell<Vec<String>>) -> Self {
        log.borrow_mut().push(format!("acquired {name}"));
        Self { name, log }
    }

    pub fn use_it(&self) {
        self.log.borrow_mut().push(format!("using {}", self.name));
    }
}

impl Drop for DisposableExample<'_> {
    fn drop(&mut self) {
        self.log.borrow_mut().push(format!("disposed {}", self.name));
    }
}

pub struct FileOutput;

impl FileOutput {
    /// Write `text` to `path`; the file is closed when the block ends. Returns the number of bytes written.
    pub fn write_to_file(&self, path: &Path, text: &str) -> io::Result<usize> {
        {
            let mut file = File::create(path)?;
            file.write_all(text.as_bytes())?;
        }
        Ok(text.len())
    }
}

pub fn run_disposal(out: &mut dyn Write, config: &TourConfig) -> DemoResult {
    let log = RefCell::new(Vec::new());
    {
        let handle = DisposableExample::acquire("scratch handle", &log);
        handle.use_it();
    }
    for line in log.into_inner() {
        writeln!(out, "{line}")?;
    }

    let path = scratch_path(config, "using");
    let (written, contents) = with_scratch_file(&path, |path| {
        let written = FileOutput.write_to_file(path, "Hello, world!")?;
        Ok((written, fs::read_to_string(path)?))
    })?;
    writeln!(out, "wrote {written} bytes")?;
    writeln!(out, "{contents}")?;
    Ok(())
}

// ----------------------------------------------------------------------------
// async / await
// ----------------------------------------------------------------------------

pub struct AsyncAwaitExample {
    /// Simulated transfer time
    pub latency: Duration,
}

impl Default for AsyncAwaitExample {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(10),
        }
    }
}

impl AsyncAwaitExample {
    /// Pretend to fetch `url` and store the body in `file_name`. Returns the number of bytes stored.
    pub async fn download_file_async(&self, url: &str, file_name: &Path) -> io::Result<usize> {
        tokio::time::sleep(self.latency).await;
        let body = format!("contents of {url}");
        tokio::fs::write(file_name, body.as_bytes()).await?;
        Ok(body.len())
    }
}

pub fn run_async_await(out: &mut dyn Write, config: &TourConfig) -> DemoResult {
    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    let path = scratch_path(config, "download");
    let url = "https://example.com/file.txt";

    let example = AsyncAwaitExample::default();
    let bytes = with_scratch_file(&path, |path| runtime.block_on(example.download_file_async(url, path)))?;

    writeln!(out, "downloaded {bytes} bytes from {url}")?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn scratch_config(name: &str) -> TourConfig {
        let dir = std::env::temp_dir().join(format!("keytour-resources-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        TourConfig::new().with_scratch_dir(dir)
    }

    #[test]
    fn drop_runs_at_end_of_scope() {
        let log = RefCell::new(Vec::new());
        {
            let first = DisposableExample::acquire("a", &log);
            let _second = DisposableExample::acquire("b", &log);
            first.use_it();
        }
        assert_eq!(
            log.into_inner(),
            vec!["acquired a", "acquired b", "using a", "disposed b", "disposed a"]
        );
    }

    #[test]
    fn disposal_output_and_cleanup() {
        let config = scratch_config("disposal");
        let mut out = Vec::new();
        run_disposal(&mut out, &config).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "acquired scratch handle\nusing scratch handle\ndisposed scratch handle\nwrote 13 bytes\nHello, world!\n"
        );
        assert_eq!(fs::read_dir(&config.scratch_dir).unwrap().count(), 0);
        fs::remove_dir(&config.scratch_dir).unwrap();
    }

    #[test]
    fn async_download_reports_bytes() {
        let config = scratch_config("async");
        let mut out = Vec::new();
        run_async_await(&mut out, &config).unwrap();
        let expected_len = "contents of https://example.com/file.txt".len();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("downloaded {expected_len} bytes from https://example.com/file.txt\n")
        );
        fs::remove_dir(&config.scratch_dir).unwrap();
    }

    #[test]
    fn scratch_file_is_removed_when_work_fails_after_creating_it() {
        let config = scratch_config("cleanup");
        let path = scratch_path(&config, "partial");
        let err = with_scratch_file(&path, |path| -> io::Result<()> {
            File::create(path)?.write_all(b"half")?;
            Err(io::Error::other("write failed"))
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "write failed");
        assert!(!path.exists());
        fs::remove_dir(&config.scratch_dir).unwrap();
    }

    #[test]
    fn scratch_file_never_created_is_not_an_error() {
        let config = scratch_config("untouched");
        let path = scratch_path(&config, "untouched");
        assert_eq!(with_scratch_file(&path, |_| Ok(7)).unwrap(), 7);
        fs::remove_dir(&config.scratch_dir).unwrap();
    }

    #[test]
    fn missing_scratch_dir_is_an_io_error() {
        let config = TourConfig::new().with_scratch_dir("/nonexistent/keytour/scratch");
        let mut out = Vec::new();
        let err = run_disposal(&mut out, &config).unwrap_err();
        assert!(matches!(err, crate::demos::DemoError::Io(_)));
    }
}
