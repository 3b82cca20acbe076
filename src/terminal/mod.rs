//! Controlling-terminal acquisition and the terminal-backed prompts.
//!
//! Prompts talk to the controlling terminal device directly so they stay
//! visible and interactive when stdout is redirected (for example when the
//! answer is captured with `$(ttyprompt secret ...)`). When the device cannot
//! be opened, typically because the process has no controlling terminal, the
//! prompts run against stdin and stderr instead.
//!
//! The device is opened per prompt and closed as soon as the prompt returns;
//! the stdin/stderr fallback is only borrowed and never closed.

#[cfg(unix)]
mod echo;

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Read, StdinLock, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::PromptError;
use crate::prompt::{read_line_from, read_mfa_code_from, read_secret_from, MaskedRead};

/// Controlling-terminal device path on unix.
#[cfg(unix)]
pub const DEFAULT_DEVICE_PATH: &str = "/dev/tty";

/// Platform controlling-terminal device, if the platform has one addressable
/// by path. Other platforms always use the stdin/stderr fallback.
pub fn default_device_path() -> Option<PathBuf> {
    #[cfg(unix)]
    {
        Some(PathBuf::from(DEFAULT_DEVICE_PATH))
    }
    #[cfg(not(unix))]
    {
        None
    }
}

// ---------------------------------------------------------------------------
// Streams
// ---------------------------------------------------------------------------

/// Input half of an acquired terminal.
pub struct TerminalInput<'a> {
    source: InputSource<'a>,
}

enum InputSource<'a> {
    Device(BufReader<&'a File>),
    Stdin(StdinLock<'static>),
}

impl<'a> TerminalInput<'a> {
    fn device(tty: &'a File) -> Self {
        Self {
            source: InputSource::Device(BufReader::new(tty)),
        }
    }

    fn stdin() -> Self {
        Self {
            source: InputSource::Stdin(io::stdin().lock()),
        }
    }

    /// True when reading from the opened terminal device rather than stdin.
    pub fn is_device(&self) -> bool {
        matches!(self.source, InputSource::Device(_))
    }

    #[cfg(unix)]
    fn raw_fd(&self) -> std::os::unix::io::RawFd {
        use std::os::unix::io::AsRawFd;
        match &self.source {
            InputSource::Device(reader) => reader.get_ref().as_raw_fd(),
            InputSource::Stdin(lock) => lock.as_raw_fd(),
        }
    }
}

impl Read for TerminalInput<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match &mut self.source {
            InputSource::Device(reader) => reader.read(buf),
            InputSource::Stdin(lock) => lock.read(buf),
        }
    }
}

impl BufRead for TerminalInput<'_> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match &mut self.source {
            InputSource::Device(reader) => reader.fill_buf(),
            InputSource::Stdin(lock) => lock.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match &mut self.source {
            InputSource::Device(reader) => reader.consume(amt),
            InputSource::Stdin(lock) => lock.consume(amt),
        }
    }
}

impl MaskedRead for TerminalInput<'_> {
    #[cfg(unix)]
    fn read_masked_line(&mut self, buf: &mut Vec<u8>) -> Result<usize, PromptError> {
        let _echo_off = echo::EchoGuard::disable(self.raw_fd()).map_err(PromptError::EchoDisable)?;
        Ok(self.read_until(b'\n', buf)?)
    }

    #[cfg(not(unix))]
    fn read_masked_line(&mut self, buf: &mut Vec<u8>) -> Result<usize, PromptError> {
        // The console API reads the secret itself with echo disabled and
        // strips the line terminator.
        let secret = rpassword::read_password().map_err(PromptError::EchoDisable)?;
        buf.extend_from_slice(secret.as_bytes());
        buf.push(b'\n');
        Ok(secret.len() + 1)
    }
}

/// Output half of an acquired terminal.
pub enum TerminalOutput<'a> {
    Device(&'a File),
    Stderr(io::Stderr),
}

impl Write for TerminalOutput<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Device(tty) => tty.write(buf),
            Self::Stderr(stderr) => stderr.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Device(tty) => tty.flush(),
            Self::Stderr(stderr) => stderr.flush(),
        }
    }
}

// ---------------------------------------------------------------------------
// Prompter
// ---------------------------------------------------------------------------

/// Prompts on the controlling terminal, falling back to stdin/stderr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalPrompter {
    device: Option<PathBuf>,
}

impl TerminalPrompter {
    /// Prompter for the platform's controlling terminal.
    pub fn new() -> Self {
        Self {
            device: default_device_path(),
        }
    }

    /// Prompter that opens `device` instead of the platform default.
    pub fn with_device(device: impl Into<PathBuf>) -> Self {
        Self {
            device: Some(device.into()),
        }
    }

    /// Prompter that never opens a device and always uses stdin/stderr.
    pub fn without_device() -> Self {
        Self { device: None }
    }

    /// Device path tried before falling back to stdin/stderr.
    pub fn device(&self) -> Option<&Path> {
        self.device.as_deref()
    }

    /// Run `action` with the terminal streams.
    ///
    /// The device, when it opens, is closed again before this returns on every
    /// path. When it does not open, `action` gets stdin and stderr.
    pub fn with_streams<T, F>(&self, action: F) -> Result<T, PromptError>
    where
        F: FnOnce(&mut TerminalInput<'_>, &mut TerminalOutput<'_>) -> Result<T, PromptError>,
    {
        match self.open_device() {
            Some(tty) => {
                let mut input = TerminalInput::device(&tty);
                let mut output = TerminalOutput::Device(&tty);
                action(&mut input, &mut output)
            }
            None => {
                let mut input = TerminalInput::stdin();
                let mut output = TerminalOutput::Stderr(io::stderr());
                action(&mut input, &mut output)
            }
        }
    }

    /// Show `message` and read one line of text.
    pub fn prompt(&self, message: &str) -> Result<String, PromptError> {
        self.with_streams(|input, output| read_line_from(input, output, message))
    }

    /// Show `message` and read one line without echoing it.
    pub fn prompt_secret(&self, message: &str) -> Result<String, PromptError> {
        self.with_streams(|input, output| read_secret_from(input, output, message))
    }

    /// Ask for the code of the MFA device identified by `mfa_serial`.
    pub fn prompt_mfa(&self, mfa_serial: &str) -> Result<String, PromptError> {
        self.with_streams(|input, output| read_mfa_code_from(input, output, mfa_serial))
    }

    fn open_device(&self) -> Option<File> {
        let path = self.device.as_deref()?;
        match OpenOptions::new().read(true).write(true).open(path) {
            Ok(tty) => Some(tty),
            Err(err) => {
                debug!(
                    device = %path.display(),
                    error = %err,
                    "controlling terminal unavailable, using stdin/stderr"
                );
                None
            }
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

/// Run `action` with the controlling terminal streams, or stdin/stderr.
pub fn with_terminal<T, F>(action: F) -> Result<T, PromptError>
where
    F: FnOnce(&mut TerminalInput<'_>, &mut TerminalOutput<'_>) -> Result<T, PromptError>,
{
    TerminalPrompter::new().with_streams(action)
}

/// Prompt for a line of text on the controlling terminal.
pub fn terminal_prompt(message: &str) -> Result<String, PromptError> {
    TerminalPrompter::new().prompt(message)
}

/// Prompt for a secret on the controlling terminal with echo disabled.
pub fn terminal_secret_prompt(message: &str) -> Result<String, PromptError> {
    TerminalPrompter::new().prompt_secret(message)
}

/// Prompt for an MFA code on the controlling terminal.
pub fn terminal_mfa_prompt(mfa_serial: &str) -> Result<String, PromptError> {
    TerminalPrompter::new().prompt_mfa(mfa_serial)
}
