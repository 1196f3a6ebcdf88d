use inksac::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl SyntaxHighlighter {
    /// Colors are used only when `enabled` and the terminal supports them.
    pub fn new(enabled: bool) -> Self {
        let support = if enabled {
            check_color_support().unwrap_or(ColorSupport::NoColor)
        } else {
            ColorSupport::NoColor
        };
        Self {
            color_support: support,
        }
    }

    fn plain(&self) -> bool {
        matches!(self.color_support, ColorSupport::NoColor)
    }

    /// Colors each word of `input` in place, keeping the original spacing so
    /// the cursor stays where the editor expects it.
    pub fn highlight_command(&self, input: &str, is_known: impl Fn(&str) -> bool) -> String {
        if self.plain() {
            return input.to_string();
        }

        let mut result = String::with_capacity(input.len() * 2);
        let mut word_index = 0;
        let mut rest = input;
        while !rest.is_empty() {
            let word_start = rest.find(|c: char| !c.is_whitespace()).unwrap_or(rest.len());
            result.push_str(&rest[..word_start]);
            rest = &rest[word_start..];
            if rest.is_empty() {
                break;
            }

            let word_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            let word = &rest[..word_end];
            result.push_str(&self.style_word(word, word_index == 0, &is_known));
            word_index += 1;
            rest = &rest[word_end..];
        }
        result
    }

    fn style_word(&self, word: &str, is_command: bool, is_known: &impl Fn(&str) -> bool) -> String {
        let style = if is_command {
            let color = if is_known(word) { Color::Cyan } else { Color::Red };
            Style::builder().foreground(color).bold().build()
        } else if matches!(word, ">" | ">>" | "|") {
            Style::builder().foreground(Color::Green).bold().build()
        } else if word.starts_with('-') {
            Style::builder().foreground(Color::Yellow).build()
        } else {
            return word.to_string();
        };
        word.style(style).to_string()
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if self.plain() {
            return error.to_string();
        }

        let error_style = Style::builder()
            .foreground(Color::Red)
            .bold()
            .build();

        error.style(error_style).to_string()
    }

    pub fn highlight_success(&self, message: &str) -> String {
        if self.plain() {
            return message.to_string();
        }

        let success_style = Style::builder()
            .foreground(Color::Green)
            .build();

        message.style(success_style).to_string()
    }

    pub fn highlight_hint(&self, hint: &str) -> String {
        if self.plain() {
            return hint.to_string();
        }

        let hint_style = Style::builder()
            .foreground(Color::RGB(128, 128, 128))
            .build();

        hint.style(hint_style).to_string()
    }
}
