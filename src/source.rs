//! Where the raw command line comes from.
//!
//! Windows hands every process its command line as one string, which is
//! read back verbatim. Other platforms only keep the split `argv`, so the
//! string is rebuilt by quoting each argument the way Windows would.

use cmdline::CommandLine;

/// Source of the command line to analyse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// The current process's own command line.
    Process,
    /// A caller-supplied raw string.
    Given(String),
}

impl Source {
    pub fn read(self) -> CommandLine {
        match self {
            Source::Process => {
                let line = process_command_line();
                tracing::debug!(len = line.as_str().len(), "read process command line");
                line
            }
            Source::Given(raw) => {
                tracing::debug!(len = raw.len(), "using supplied command line");
                CommandLine::new(raw)
            }
        }
    }
}

/// The raw command line of the current process.
#[cfg(windows)]
pub fn process_command_line() -> CommandLine {
    CommandLine::new(win32::command_line())
}

/// The raw command line of the current process, rebuilt from `argv`.
#[cfg(not(windows))]
pub fn process_command_line() -> CommandLine {
    let args: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    CommandLine::new(cmdline::join_args(args))
}

#[cfg(windows)]
mod win32 {
    use winapi::um::processenv::GetCommandLineW;

    pub(super) fn command_line() -> String {
        // SAFETY: GetCommandLineW returns a NUL-terminated buffer owned by the
        // process that stays valid and unmodified for its whole lifetime.
        unsafe {
            let buf = GetCommandLineW();
            if buf.is_null() {
                return String::new();
            }
            let len = libc::wcslen(buf);
            String::from_utf16_lossy(std::slice::from_raw_parts(buf, len))
        }
    }
}
