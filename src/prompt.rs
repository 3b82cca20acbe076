//! Prompt operations over an arbitrary input/output pair.
//!
//! These functions never decide where the streams come from; the
//! [`terminal`](crate::terminal) module acquires the controlling terminal (or
//! the stdin/stderr fallback) and hands the pair in. Keeping the two apart lets
//! every prompt behave identically on either stream source.

use std::io::{BufRead, Write};

use crate::error::PromptError;

/// Input stream capable of reading one line with echo disabled.
pub trait MaskedRead: BufRead {
    /// Read bytes up to and including `\n` into `buf` without echoing them.
    ///
    /// Returns the number of bytes read, like [`BufRead::read_until`]. Fails
    /// with [`PromptError::EchoDisable`] when echo cannot be turned off.
    fn read_masked_line(&mut self, buf: &mut Vec<u8>) -> Result<usize, PromptError>;
}

/// Build the message shown when asking for an MFA code.
pub fn mfa_prompt_message(mfa_serial: &str) -> String {
    format!("Enter MFA code for {mfa_serial}: ")
}

/// Write `message` to `output` and read one trimmed line from `input`.
pub fn read_line_from<R, W>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<String, PromptError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    write_message(output, message)?;

    let mut line = Vec::new();
    input.read_until(b'\n', &mut line)?;
    complete_line(&line)
}

/// Write `message` to `output` and read one trimmed line with echo disabled.
///
/// A newline is written after the secret so following output starts on a
/// fresh line; typed characters were never echoed, including the Enter key.
pub fn read_secret_from<R, W>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<String, PromptError>
where
    R: MaskedRead + ?Sized,
    W: Write + ?Sized,
{
    write_message(output, message)?;

    let mut line = Vec::new();
    input.read_masked_line(&mut line)?;
    let secret = complete_line(&line)?;

    output.write_all(b"\n")?;
    output.flush()?;
    Ok(secret)
}

/// Ask for an MFA code on `input`/`output` using the fixed MFA message.
pub fn read_mfa_code_from<R, W>(
    input: &mut R,
    output: &mut W,
    mfa_serial: &str,
) -> Result<String, PromptError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    read_line_from(input, output, &mfa_prompt_message(mfa_serial))
}

fn write_message<W: Write + ?Sized>(output: &mut W, message: &str) -> Result<(), PromptError> {
    output.write_all(message.as_bytes())?;
    output.flush()?;
    Ok(())
}

/// A line only counts once its terminating newline arrived; anything read
/// before end of input is discarded. Invalid UTF-8 is replaced, not rejected.
fn complete_line(line: &[u8]) -> Result<String, PromptError> {
    if !line.ends_with(b"\n") {
        return Err(PromptError::UnexpectedEof);
    }
    Ok(String::from_utf8_lossy(line).trim().to_string())
}
