use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::config::CheckerConfig;
use crate::response::Verdict;
use crate::schema::ResponseSchema;

/// Counts reported once the input is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub checked: usize,
    pub failed: usize,
}

impl CheckSummary {
    pub fn all_valid(&self) -> bool {
        self.failed == 0
    }
}

/// Checks newline-delimited JSON responses, writing one verdict line per instance.
pub struct ResponseChecker<'a> {
    schema: &'a ResponseSchema,
    max_line_bytes: usize,
}

impl<'a> ResponseChecker<'a> {
    pub fn new(schema: &'a ResponseSchema, config: &CheckerConfig) -> Self {
        Self {
            schema,
            max_line_bytes: config.max_line_bytes,
        }
    }

    pub async fn run<R, W>(
        &self,
        mut reader: R,
        mut writer: W,
    ) -> Result<CheckSummary, Box<dyn std::error::Error>>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut summary = CheckSummary::default();
        let mut raw = Vec::new();
        // A full-length payload plus its `\r\n` terminator fits in one read.
        let cap = (self.max_line_bytes as u64).saturating_add(2);

        loop {
            raw.clear();
            let n = (&mut reader).take(cap).read_until(b'\n', &mut raw).await?;
            if n == 0 {
                break;
            }
            if raw.last() != Some(&b'\n') && n as u64 == cap {
                discard_line(&mut reader).await?;
            }

            let verdict = match self.check_line(&raw) {
                Some(v) => v,
                None => continue,
            };

            summary.checked += 1;
            if !verdict.valid {
                summary.failed += 1;
            }
            write_verdict(&mut writer, &verdict).await?;
        }

        Ok(summary)
    }

    /// Returns `None` for blank lines.
    fn check_line(&self, raw: &[u8]) -> Option<Verdict> {
        let raw = strip_terminator(raw);
        if raw.len() > self.max_line_bytes {
            eprintln!("Line too large (limit {} bytes)", self.max_line_bytes);
            return Some(Verdict::rejected(format!(
                "Line exceeds {} bytes",
                self.max_line_bytes
            )));
        }

        let trimmed = match std::str::from_utf8(raw) {
            Ok(s) => s.trim(),
            Err(_) => return Some(Verdict::rejected("Line is not valid UTF-8")),
        };

        if trimmed.is_empty() {
            return None;
        }

        match serde_json::from_str::<serde_json::Value>(trimmed) {
            Ok(instance) => Some(self.schema.check(&instance)),
            Err(e) => {
                eprintln!("Parse error: {e}");
                Some(Verdict::rejected(format!("Parse error: {e}")))
            }
        }
    }
}

fn strip_terminator(raw: &[u8]) -> &[u8] {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    raw.strip_suffix(b"\r").unwrap_or(raw)
}

/// Skip the remainder of an oversized line without buffering it.
async fn discard_line<R: AsyncBufRead + Unpin>(reader: &mut R) -> std::io::Result<()> {
    loop {
        let (consumed, done) = {
            let buf = reader.fill_buf().await?;
            if buf.is_empty() {
                return Ok(());
            }
            match buf.iter().position(|&b| b == b'\n') {
                Some(i) => (i + 1, true),
                None => (buf.len(), false),
            }
        };
        reader.consume(consumed);
        if done {
            return Ok(());
        }
    }
}

async fn write_verdict<W: AsyncWrite + Unpin>(
    writer: &mut W,
    verdict: &Verdict,
) -> Result<(), Box<dyn std::error::Error>> {
    let out = serde_json::to_string(verdict)?;
    writer.write_all(out.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}
