use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A single terminal line that is rewritten in place
///
/// Each update returns carriage return, the new content, and enough
/// spaces to blank whatever the previous content left behind.
#[derive(Debug, Default)]
pub struct StatusLine {
    last_width: usize,
}

impl StatusLine {
    pub fn update(&mut self, content: &str) -> String {
        let width = UnicodeWidthStr::width(content);
        let padding = self.last_width.saturating_sub(width);
        self.last_width = width;
        format!("\r{}{}", content, " ".repeat(padding))
    }

    /// Terminate the line so the next write starts on a fresh one
    pub fn finish(&mut self) -> Option<&'static str> {
        if self.last_width == 0 {
            return None;
        }
        self.last_width = 0;
        Some("\n")
    }
}

/// Cut `content` to at most `max_width` display columns
///
/// A wrapped line can no longer be rewritten with a carriage return.
pub fn fit_width(content: &str, max_width: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in content.char_indices() {
        used += ch.width().unwrap_or(0);
        if used > max_width {
            return &content[..idx];
        }
    }
    content
}
