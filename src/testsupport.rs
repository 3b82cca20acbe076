//! Shared test fixtures for prompt, terminal, registry, and config tests.

use std::fs;
use std::io::{self, BufRead, Cursor, Read, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::PromptError;
use crate::prompt::MaskedRead;

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// In-memory input stream that stands in for a terminal.
///
/// Masked reads are counted so tests can tell which read path ran; echo
/// control can be switched off to mimic a non-terminal input.
#[derive(Debug)]
pub struct ScriptedInput {
    cursor: Cursor<Vec<u8>>,
    echo_control: bool,
    masked_reads: usize,
}

impl ScriptedInput {
    pub fn new(script: &str) -> Self {
        Self::from_bytes(script.as_bytes())
    }

    /// Script raw bytes, for input that is not valid UTF-8.
    pub fn from_bytes(script: &[u8]) -> Self {
        Self {
            cursor: Cursor::new(script.to_vec()),
            echo_control: true,
            masked_reads: 0,
        }
    }

    /// Make masked reads fail as they would on a pipe or regular file.
    pub fn without_echo_control(mut self) -> Self {
        self.echo_control = false;
        self
    }

    /// Number of masked reads performed so far.
    pub fn masked_reads(&self) -> usize {
        self.masked_reads
    }

    /// Bytes not consumed yet.
    pub fn remaining(&self) -> &[u8] {
        let pos = self.cursor.position() as usize;
        &self.cursor.get_ref()[pos..]
    }
}

impl Read for ScriptedInput {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.cursor.read(buf)
    }
}

impl BufRead for ScriptedInput {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.cursor.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.cursor.consume(amt)
    }
}

impl MaskedRead for ScriptedInput {
    fn read_masked_line(&mut self, buf: &mut Vec<u8>) -> Result<usize, PromptError> {
        if !self.echo_control {
            return Err(PromptError::EchoDisable(io::Error::new(
                io::ErrorKind::Unsupported,
                "scripted input is not a terminal",
            )));
        }
        self.masked_reads += 1;
        Ok(self.cursor.read_until(b'\n', buf)?)
    }
}

/// Writer whose every write fails.
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "output closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!(
            "ttyprompt-{prefix}-{}-{millis}-{suffix}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dirs_are_unique_and_removed_on_drop() {
        let first = TestTempDir::new("fixture");
        let second = TestTempDir::new("fixture");
        assert_ne!(first.child(""), second.child(""));

        let nested = first.write_text("dev/pts/0", "Name: ");
        assert_eq!(fs::read_to_string(&nested).unwrap(), "Name: ");

        let root = first.child("");
        drop(first);
        assert!(!root.exists());
        assert!(second.child("").exists());
    }

    #[test]
    fn scripted_input_refuses_masked_reads_without_echo_control() {
        let mut input = ScriptedInput::new("secret\n").without_echo_control();
        let err = input.read_masked_line(&mut Vec::new()).unwrap_err();
        assert!(matches!(err, PromptError::EchoDisable(_)));
        assert_eq!(input.masked_reads(), 0);
        assert_eq!(input.remaining(), b"secret\n");
    }
}
