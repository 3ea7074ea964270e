//! Logical line counting for text bodies.

/// Counts logical lines in `body`.
///
/// Terminators are `\n`, `\r` and `\r\n`; a final unterminated line counts as
/// one line and an empty body has zero lines. Invalid UTF-8 is decoded lossily
/// (terminators are ASCII, so counting is unaffected).
pub fn count_lines(body: &[u8]) -> u64 {
    let text = String::from_utf8_lossy(body);
    let mut count = 0u64;
    let mut open_line = false;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                count += 1;
                open_line = false;
            }
            '\n' => {
                count += 1;
                open_line = false;
            }
            _ => open_line = true,
        }
    }
    if open_line {
        count += 1;
    }
    count
}
