use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::Context;

pub(crate) fn send_to_clipboard(data: &[u8]) -> anyhow::Result<()> {
    pipe_to(clipboard_cmd(), data)
}

fn pipe_to(mut cmd: Command, data: &[u8]) -> anyhow::Result<()> {
    cmd.stdin(Stdio::piped());
    let mut child = cmd
        .spawn()
        .with_context(|| format!("failed to run {:?}", cmd.get_program()))?;
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin
            .write_all(data)
            .context("failed to send the password to the clipboard command"),
        None => Err(anyhow::anyhow!("clipboard command has no stdin")),
    };
    if let Err(err) = written {
        // Don't leave the child behind.
        let _ = child.kill();
        let _ = child.wait();
        return Err(err);
    }
    let status = child.wait().context("failed to wait for the clipboard command")?;
    if !status.success() {
        anyhow::bail!("clipboard command exited with {status}");
    }
    Ok(())
}

#[cfg(target_os = "macos")]
fn clipboard_cmd() -> Command {
    Command::new("pbcopy")
}

#[cfg(not(target_os = "macos"))]
fn clipboard_cmd() -> Command {
    let mut cmd = Command::new("xsel");
    cmd.arg("-b");
    cmd
}

#[cfg(all(test, unix))]
mod tests {
    use std::process::{Command, Stdio};

    use super::pipe_to;

    #[test]
    fn piped_data_is_delivered() {
        let mut cmd = Command::new("cat");
        cmd.stdout(Stdio::null());
        pipe_to(cmd, b"hunter22").unwrap();
    }

    #[test]
    fn command_that_stops_reading_is_an_error() {
        // More than a pipe buffer, so the write fails once `true` has exited.
        let data = vec![b'x'; 4 * 1024 * 1024];
        let err = pipe_to(Command::new("true"), &data).unwrap_err();
        assert!(err.to_string().contains("failed to send the password"), "{err:#}");
    }

    #[test]
    fn missing_command_is_an_error() {
        assert!(pipe_to(Command::new("passgen-no-such-clipboard-tool"), b"x").is_err());
    }
}
