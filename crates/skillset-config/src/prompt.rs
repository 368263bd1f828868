//! Interactive line prompts

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::{ConfigError, Result};

/// Asks the operator for a single line of input
// Only ever used through generics, never as a trait object.
#[allow(async_fn_in_trait)]
pub trait Prompter {
    /// Show `message` and wait for one line; returns it trimmed, empty if nothing was entered
    async fn ask(&mut self, message: &str) -> Result<String>;
}

/// Prompter bound to the process terminal
///
/// Standard input is opened for the duration of a single prompt and released
/// when the prompt returns, whether or not the read succeeded. Nothing past
/// the answered line is consumed, so later prompts see the following lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    async fn ask(&mut self, message: &str) -> Result<String> {
        let mut input = tokio::io::stdin();
        let mut output = tokio::io::stdout();
        prompt_line(&mut input, &mut output, message).await
    }
}

/// Prompter over arbitrary streams
#[derive(Debug)]
pub struct StreamPrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> StreamPrompter<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Create a prompter reading answers from `reader` and writing prompts to `writer`
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the underlying streams
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R, W> Prompter for StreamPrompter<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    async fn ask(&mut self, message: &str) -> Result<String> {
        prompt_line(&mut self.reader, &mut self.writer, message).await
    }
}

/// Write `message`, then read one line and trim it
///
/// End of input counts as an empty answer.
///
/// # Errors
///
/// Returns [`ConfigError::Prompt`] if writing the prompt or reading the answer fails.
pub async fn prompt_line<R, W>(reader: &mut R, writer: &mut W, message: &str) -> Result<String>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer
        .write_all(message.as_bytes())
        .await
        .map_err(ConfigError::Prompt)?;
    writer.flush().await.map_err(ConfigError::Prompt)?;

    let line = read_line(reader).await.map_err(ConfigError::Prompt)?;
    Ok(line.trim().to_string())
}

/// Read up to and excluding the next `\n`
///
/// Reads a byte at a time: a buffered reader would pull in the lines meant for
/// later prompts and lose them when dropped.
async fn read_line<R: AsyncRead + Unpin>(reader: &mut R) -> std::io::Result<String> {
    let mut line = Vec::new();
    let mut byte = [0u8; 1];

    loop {
        if reader.read(&mut byte).await? == 0 || byte[0] == b'\n' {
            break;
        }
        line.push(byte[0]);
    }

    Ok(String::from_utf8_lossy(&line).into_owned())
}
