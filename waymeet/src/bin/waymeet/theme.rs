use colored::{Color, Colorize};

/// Icon and colour for one kind of status line.
#[derive(Clone, Copy)]
pub struct Tone {
    pub icon: &'static str,
    pub color: Color,
}

impl Tone {
    const fn new(icon: &'static str, color: Color) -> Self {
        Self { icon, color }
    }

    /// The icon alone, coloured unless `plain`.
    pub fn mark(&self, plain: bool) -> String {
        if plain { self.icon.to_string() } else { self.icon.color(self.color).to_string() }
    }

    /// `icon message`, both coloured unless `plain`.
    pub fn line(&self, message: &str, plain: bool) -> String {
        if plain {
            format!("{} {message}", self.icon)
        } else {
            format!("{} {}", self.mark(false), message.color(self.color))
        }
    }
}

pub const SUCCESS: Tone = Tone::new("✓", Color::Green);
pub const ERROR: Tone = Tone::new("✗", Color::Red);
pub const WARNING: Tone = Tone::new("⚠", Color::Yellow);
pub const INFO: Tone = Tone::new("ℹ", Color::Blue);
pub const PROGRESS: Tone = Tone::new("⟳", Color::Cyan);
pub const BULLET: Tone = Tone::new("•", Color::BrightBlack);

/// Colours for help text, headings and key/value rows.
pub struct Palette {
    pub heading: Color,
    pub title: Color,
    pub command: Color,
    pub placeholder: Color,
    pub key: Color,
    pub value: Color,
}

pub const PALETTE: Palette = Palette {
    heading: Color::Cyan,
    title: Color::BrightBlue,
    command: Color::Magenta,
    placeholder: Color::BrightBlack,
    key: Color::BrightCyan,
    value: Color::White,
};

pub const ARROW: &str = "→";
pub const PIN: &str = "📍";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_keep_icon_and_text() {
        assert_eq!(SUCCESS.line("Joined event 2", true), "✓ Joined event 2");
        assert_eq!(BULLET.mark(true), "•");
    }

    #[test]
    fn coloured_lines_carry_the_text() {
        colored::control::set_override(true);
        let line = WARNING.line("Not going to event 3", false);
        colored::control::unset_override();
        assert!(line.contains("Not going to event 3"));
        assert_ne!(line, "⚠ Not going to event 3");
    }
}
