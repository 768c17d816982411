//! Sanitizing remote text before it reaches the terminal.
//!
//! Result titles, descriptions and URLs come from a remote file and are
//! printed by the `search` command and drawn by the TUI. Escape sequences in
//! them could recolor the screen, move the cursor, retitle the window or plant
//! hyperlinks, so they are removed before display.

const ESC: char = '\x1b';
const BEL: char = '\x07';

/// Remove ANSI CSI/OSC escape sequences and control characters.
///
/// Tabs and newlines are kept.
///
/// ```
/// use web_search_client::utils::terminal::strip_escape_sequences;
///
/// assert_eq!(strip_escape_sequences("\x1b[31mRed\x1b[0m"), "Red");
/// ```
pub fn strip_escape_sequences(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ESC {
            match chars.peek() {
                // CSI: ESC [ params final-byte
                Some('[') => {
                    chars.next();
                    for next in chars.by_ref() {
                        if ('\x40'..='\x7e').contains(&next) {
                            break;
                        }
                    }
                }
                // OSC: ESC ] ... terminated by BEL or ESC \
                Some(']') => {
                    chars.next();
                    while let Some(next) = chars.next() {
                        if next == BEL {
                            break;
                        }
                        if next == ESC && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                // Two-character escape
                Some(_) => {
                    chars.next();
                }
                None => {}
            }
            continue;
        }

        if ch.is_control() && ch != '\t' && ch != '\n' {
            continue;
        }

        result.push(ch);
    }

    result
}

/// Sanitize and collapse to a single line, for list rows and status text
pub fn single_line(text: &str) -> String {
    strip_escape_sequences(text).split_whitespace().collect::<Vec<_>>().join(" ")
}
