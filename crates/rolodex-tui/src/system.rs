//! Clipboard and URI hand-off to the desktop.

use std::io::Write;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};

use anyhow::{anyhow, bail, Context as _, Result};

type ClipboardTool = (&'static str, &'static [&'static str]);

#[cfg(target_os = "macos")]
const CLIPBOARD_TOOLS: &[ClipboardTool] = &[("pbcopy", &[])];

#[cfg(target_os = "windows")]
const CLIPBOARD_TOOLS: &[ClipboardTool] = &[("clip", &[])];

#[cfg(all(unix, not(target_os = "macos")))]
const CLIPBOARD_TOOLS: &[ClipboardTool] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

#[cfg(not(any(unix, target_os = "windows")))]
const CLIPBOARD_TOOLS: &[ClipboardTool] = &[];

/// Copies text to the system clipboard. The first tool that runs wins.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut last_error = None;
    for (program, args) in CLIPBOARD_TOOLS {
        match pipe_to(program, args, text) {
            Ok(()) => return Ok(()),
            Err(err) => last_error = Some(err),
        }
    }
    Err(last_error.unwrap_or_else(|| anyhow!("clipboard not supported on this platform")))
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("failed to spawn {program}"))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .with_context(|| format!("failed to write to {program}"))?;
    }

    let status = child
        .wait()
        .with_context(|| format!("failed to wait for {program}"))?;
    if !status.success() {
        bail!("{program} exited with {status}");
    }
    Ok(())
}

/// Hands a `mailto:`, `tel:`, `sms:` or web link to the desktop opener.
pub fn open_uri(uri: &str) -> Result<()> {
    spawn_reaped(opener_command(uri)).with_context(|| format!("failed to open {uri}"))?;
    Ok(())
}

/// Spawns `command` and waits for it on a background thread so the exited
/// child does not linger as a zombie.
fn spawn_reaped(mut command: Command) -> Result<JoinHandle<Option<ExitStatus>>> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(thread::spawn(move || child.wait().ok()))
}

fn opener_command(uri: &str) -> Command {
    if cfg!(target_os = "macos") {
        let mut command = Command::new("open");
        command.arg(uri);
        command
    } else if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]).arg(uri);
        command
    } else {
        let mut command = Command::new("xdg-open");
        command.arg(uri);
        command
    }
}
