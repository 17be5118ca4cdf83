// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The session never talks to stdin/stdout directly. It talks
// to an Interaction, which supplies lines of text and accepts
// lines of output. This keeps the retry loop testable with
// in-memory buffers.
//
// Implementations:
//   - infra::console::Console → any BufRead + Write pair
//     (stdin/stdout in the binary, Cursor/Vec in tests)

use std::io;

/// A line-oriented conversation with the user.
pub trait Interaction {
    /// Show `prompt` and read one line of reply.
    /// Returns Ok(None) once the input is exhausted.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Emit one line of output.
    fn say(&mut self, line: &str) -> io::Result<()>;
}
