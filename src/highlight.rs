use inksac::prelude::*;

/// Colours the command word of an input line: built-ins in bold cyan,
/// anything that will go to the external fallback left plain.
#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
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

    pub fn highlight_command(&self, input: &str, is_builtin: impl Fn(&str) -> bool) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return input.to_string();
        }

        let start = input.len() - input.trim_start().len();
        let end = input[start..]
            .find(char::is_whitespace)
            .map_or(input.len(), |pos| start + pos);
        let word = &input[start..end];
        if word.is_empty() || !is_builtin(word) {
            return input.to_string();
        }

        let command_style = Style::builder()
            .foreground(Color::Cyan)
            .bold()
            .build();
        format!(
            "{}{}{}",
            &input[..start],
            word.to_string().style(command_style),
            &input[end..]
        )
    }
}
