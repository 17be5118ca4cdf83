// ============================================================
// Layer 4 — Input Preprocessor
// ============================================================
// Cleans a raw input line before it is split into numbers.
//
// Why do we need to clean input?
//   Lines typed or pasted into a console often contain:
//   - Decimal commas (1,5) from locales that write them
//   - Tabs or non-breaking spaces between numbers
//   - A byte order mark at the start of piped files
//   - A trailing \r from Windows line endings
//
// Cleaning steps (applied in order):
//   1. Map whitespace variants and control characters to a space
//   2. Replace decimal commas with decimal points
//   3. Trim the line
//
// Numbers are then always parsed with '.' as the decimal
// separator, whatever the user's locale.

pub struct Preprocessor;

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Normalise one input line for number parsing.
    pub fn clean(&self, line: &str) -> String {
        line.chars()
            .map(|c| match c {
                // Decimal comma → decimal point
                ',' => '.',
                '\t' | '\u{00A0}' | '\u{200B}' | '\u{FEFF}' => ' ',
                c if c.is_control() => ' ',
                c => c,
            })
            .collect::<String>()
            .trim()
            .to_string()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}
