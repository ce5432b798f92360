use crate::ui::primitives::icon::Icon;

const SPINNER_FRAMES_BRAILLE: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const SPINNER_FRAMES_ASCII: &[char] = &['-', '\\', '|', '/'];

#[derive(Debug, Clone, Default)]
pub struct Spinner {
    current: usize,
    message: String,
}

impl Spinner {
    pub fn tick(&mut self) {
        self.current = self.current.wrapping_add(1);
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Advance one frame and show `label`
    pub fn next(&mut self, label: impl Into<String>, supports_unicode: bool) -> String {
        self.tick();
        self.set_message(label);
        self.render(supports_unicode)
    }

    pub fn render(&self, supports_unicode: bool) -> String {
        let frames = Self::frames(supports_unicode);
        let frame = frames[self.current % frames.len()];
        if self.message.is_empty() {
            frame.to_string()
        } else {
            format!("{} {}", frame, self.message)
        }
    }

    pub fn succeed(&self, message: &str, supports_color: bool, supports_unicode: bool) -> String {
        format!(
            "{} {}",
            Icon::Success.colored(supports_color, supports_unicode),
            message
        )
    }

    pub fn fail(&self, message: &str, supports_color: bool, supports_unicode: bool) -> String {
        format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            message
        )
    }

    fn frames(supports_unicode: bool) -> &'static [char] {
        if supports_unicode {
            SPINNER_FRAMES_BRAILLE
        } else {
            SPINNER_FRAMES_ASCII
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loading() -> Spinner {
        let mut s = Spinner::default();
        s.set_message("Loading");
        s
    }

    #[test]
    fn render_uses_braille_frames_when_unicode_supported() {
        let s = loading();
        assert!(s.render(true).starts_with('⠋'));
    }

    #[test]
    fn render_uses_ascii_frames_when_unicode_unsupported() {
        let s = loading();
        assert!(s.render(false).starts_with('-'));
    }

    #[test]
    fn next_advances_frame_and_replaces_label() {
        let mut s = Spinner::default();
        assert_eq!(s.next("create in progress", false), "\\ create in progress");
        assert_eq!(s.next("almost done", false), "| almost done");
    }

    #[test]
    fn frames_wrap_around() {
        let mut s = Spinner::default();
        for _ in 0..SPINNER_FRAMES_ASCII.len() {
            s.tick();
        }
        assert_eq!(s.render(false), "-");
    }

    #[test]
    fn succeed_without_color_is_plain() {
        let s = Spinner::default();
        assert_eq!(s.succeed("db1 created", false, false), "[OK] db1 created");
    }
}
