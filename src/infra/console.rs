// ============================================================
// Layer 5 — Console
// ============================================================
// The concrete Interaction used by the binary and the tests.
//
// Console is generic over any BufRead + Write pair:
//   - Console::stdio()            → locked stdin / stdout
//   - Console::new(Cursor, Vec)   → scripted input in tests
//
// Prompts are flushed before reading so they appear even when
// stdout is line-buffered and the prompt has no newline.
//
// Why read raw bytes instead of read_line?
//   read_line fails with InvalidData on a line that is not
//   UTF-8 (a pasted Latin-1 file, a stray byte from a serial
//   console). That error would end the whole session, while a
//   malformed line is supposed to be asked for again. Decoding
//   lossily hands the garbage to the parser, which rejects it.
//
// Reference: std::io::BufRead::read_until
//            String::from_utf8_lossy

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use crate::domain::traits::Interaction;

pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the writer, e.g. to inspect captured output
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl Console<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Interaction for Console<R, W> {
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        writeln!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        // Invalid UTF-8 becomes U+FFFD and fails parsing like any
        // other bad token, so the question is asked again
        let line = String::from_utf8_lossy(&buf);
        // Strip the line terminator only; the parser trims the rest
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_reads_lines_then_eof() {
        let mut c = Console::new(Cursor::new("1 2\r\n3 4\n"), Vec::new());
        assert_eq!(c.ask("A?").unwrap().as_deref(), Some("1 2"));
        assert_eq!(c.ask("B?").unwrap().as_deref(), Some("3 4"));
        assert_eq!(c.ask("C?").unwrap(), None);

        let out = String::from_utf8(c.into_writer()).unwrap();
        assert_eq!(out, "A?\nB?\nC?\n");
    }

    #[test]
    fn test_invalid_utf8_is_replaced_not_fatal() {
        let mut c = Console::new(Cursor::new(b"\xff\xfe 1\n1 0\n".to_vec()), Vec::new());
        assert_eq!(c.ask("A?").unwrap().as_deref(), Some("\u{FFFD}\u{FFFD} 1"));
        assert_eq!(c.ask("A?").unwrap().as_deref(), Some("1 0"));
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut c = Console::new(Cursor::new("3"), Vec::new());
        assert_eq!(c.ask("size?").unwrap().as_deref(), Some("3"));
        assert_eq!(c.ask("size?").unwrap(), None);
    }

    #[test]
    fn test_say_writes_line() {
        let mut c = Console::new(Cursor::new(""), Vec::new());
        c.say("hello").unwrap();
        assert_eq!(c.into_writer(), b"hello\n");
    }
}
