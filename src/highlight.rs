use inksac::prelude::*;

/// Colours for the text the binary prints around the shell: the banner,
/// hints and fatal errors. Falls back to plain text when the terminal has
/// no colour support.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    color_support: ColorSupport,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl Palette {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    fn enabled(&self) -> bool {
        !matches!(self.color_support, ColorSupport::NoColor)
    }

    pub fn command(&self, name: &str) -> String {
        if !self.enabled() {
            return name.to_string();
        }

        let command_style = Style::builder()
            .foreground(Color::Cyan)
            .bold()
            .build();
        name.style(command_style).to_string()
    }

    pub fn error(&self, error: &str) -> String {
        if !self.enabled() {
            return error.to_string();
        }

        let error_style = Style::builder()
            .foreground(Color::Red)
            .bold()
            .build();
        error.style(error_style).to_string()
    }

    pub fn success(&self, message: &str) -> String {
        if !self.enabled() {
            return message.to_string();
        }

        let success_style = Style::builder()
            .foreground(Color::Green)
            .build();
        message.style(success_style).to_string()
    }

    pub fn hint(&self, hint: &str) -> String {
        if !self.enabled() {
            return hint.to_string();
        }

        let hint_style = Style::builder()
            .foreground(Color::RGB(128, 128, 128))
            .build();
        hint.style(hint_style).to_string()
    }
}
