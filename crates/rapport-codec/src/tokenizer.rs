//! One-pass positional scanner for the key grammar
//!
//! Captures every delimiter group in order of appearance; assigning groups
//! to dimensions happens in the parser. A single forward pass eliminates the
//! group-miscount bugs that repeated independent pattern scans invite, and
//! keeps glyph content fully opaque.

use crate::grammar;

/// Delimiter groups captured from one scan of a key string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Groups {
    /// Bracket groups in order (topic, goal, context)
    pub brackets: Vec<String>,

    /// Angle groups in order (approach)
    pub angles: Vec<String>,

    /// Brace groups in order (tone)
    pub braces: Vec<String>,

    /// Pipe groups in order (trust, style, humor, collab)
    pub pipes: Vec<String>,
}

enum Mode {
    Outside,
    Bracket,
    Angle,
    Brace,
    Pipe,
}

/// Scan a key string once, capturing every delimiter group by position
///
/// Inside a group, everything except that group's own closing delimiter is
/// content. A pipe both closes the open pipe group and opens the next one;
/// any group still open at end of input is unterminated and discarded.
/// Characters between groups (the context marker included) are skipped.
pub fn scan(input: &str) -> Groups {
    let mut groups = Groups::default();
    let mut mode = Mode::Outside;
    let mut buf = String::new();

    for c in input.chars() {
        match mode {
            Mode::Outside => match c {
                grammar::BRACKET_OPEN => mode = Mode::Bracket,
                grammar::ANGLE_OPEN => mode = Mode::Angle,
                grammar::BRACE_OPEN => mode = Mode::Brace,
                grammar::PIPE => mode = Mode::Pipe,
                _ => {}
            },
            Mode::Bracket => {
                if c == grammar::BRACKET_CLOSE {
                    groups.brackets.push(std::mem::take(&mut buf));
                    mode = Mode::Outside;
                } else {
                    buf.push(c);
                }
            }
            Mode::Angle => {
                if c == grammar::ANGLE_CLOSE {
                    groups.angles.push(std::mem::take(&mut buf));
                    mode = Mode::Outside;
                } else {
                    buf.push(c);
                }
            }
            Mode::Brace => {
                if c == grammar::BRACE_CLOSE {
                    groups.braces.push(std::mem::take(&mut buf));
                    mode = Mode::Outside;
                } else {
                    buf.push(c);
                }
            }
            Mode::Pipe => {
                if c == grammar::PIPE {
                    groups.pipes.push(std::mem::take(&mut buf));
                    // the same pipe opens the next group
                } else {
                    buf.push(c);
                }
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_canonical_key() {
        let groups = scan("[💻🌐]⟨🔍🤝⟩[🎯🔄]{😊🤔}➡️~[🌈🧩]|🔒🔒|📊|😂|🤝|");

        assert_eq!(groups.brackets, vec!["💻🌐", "🎯🔄", "🌈🧩"]);
        assert_eq!(groups.angles, vec!["🔍🤝"]);
        assert_eq!(groups.braces, vec!["😊🤔"]);
        assert_eq!(groups.pipes, vec!["🔒🔒", "📊", "😂", "🤝"]);
    }

    #[test]
    fn test_pipes_share_separators() {
        // Five pipe characters delimit exactly four groups.
        let groups = scan("|a|b|c|d|");
        assert_eq!(groups.pipes, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_unterminated_trailing_pipe_group_is_dropped() {
        let groups = scan("|a|b|c|d|junk");
        assert_eq!(groups.pipes, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_unterminated_bracket_group_is_dropped() {
        let groups = scan("[💻🌐");
        assert!(groups.brackets.is_empty());
    }

    #[test]
    fn test_empty_groups_are_captured() {
        let groups = scan("[]{}||");
        assert_eq!(groups.brackets, vec![""]);
        assert_eq!(groups.braces, vec![""]);
        assert_eq!(groups.pipes, vec![""]);
    }

    #[test]
    fn test_content_between_groups_is_skipped() {
        let groups = scan("noise [a] ➡️~ more {b}");
        assert_eq!(groups.brackets, vec!["a"]);
        assert_eq!(groups.braces, vec!["b"]);
    }

    #[test]
    fn test_foreign_delimiters_inside_group_are_content() {
        let groups = scan("[a{b|c]");
        assert_eq!(groups.brackets, vec!["a{b|c"]);
    }

    #[test]
    fn test_stray_closers_outside_groups_are_ignored() {
        let groups = scan("]}⟩[a]");
        assert_eq!(groups.brackets, vec!["a"]);
        assert!(groups.braces.is_empty());
    }
}
