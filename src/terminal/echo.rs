//! Echo control for masked reads on unix terminals.

use std::io;
use std::mem::MaybeUninit;
use std::os::unix::io::RawFd;

/// Echo-off lifetime guard so terminal state is restored on any return path.
pub(crate) struct EchoGuard {
    fd: RawFd,
    saved: libc::termios,
}

impl EchoGuard {
    /// Turn echo off on `fd` and return a guard that restores the saved mode
    /// on drop.
    ///
    /// Canonical mode and signal keys stay enabled so the user still gets line
    /// editing and `Ctrl-C`. Fails with `ENOTTY` when `fd` is not a terminal.
    pub(crate) fn disable(fd: RawFd) -> io::Result<Self> {
        let mut saved = MaybeUninit::<libc::termios>::uninit();
        // SAFETY: tcgetattr fully initializes `saved` when it returns 0.
        if unsafe { libc::tcgetattr(fd, saved.as_mut_ptr()) } != 0 {
            return Err(io::Error::last_os_error());
        }
        // SAFETY: tcgetattr returned 0, so `saved` is initialized.
        let saved = unsafe { saved.assume_init() };

        let mut hidden = saved;
        hidden.c_lflag &= !libc::ECHO;
        hidden.c_lflag |= libc::ICANON | libc::ISIG;
        hidden.c_iflag |= libc::ICRNL;
        // SAFETY: `hidden` is a valid termios copied from the current state.
        if unsafe { libc::tcsetattr(fd, libc::TCSANOW, &hidden) } != 0 {
            return Err(io::Error::last_os_error());
        }

        Ok(Self { fd, saved })
    }
}

impl Drop for EchoGuard {
    fn drop(&mut self) {
        // SAFETY: restores the termios captured in `disable` on the same fd.
        unsafe {
            libc::tcsetattr(self.fd, libc::TCSANOW, &self.saved);
        }
    }
}
