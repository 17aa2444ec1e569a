use colored::Colorize;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use jobboard::Prompter;

/// Terminal prompts backed by `dialoguer`.
///
/// A failed prompt (closed stdin, interrupted terminal) counts as "no".
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl std::fmt::Debug for TerminalPrompter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalPrompter")
            .field("theme", &"ColorfulTheme")
            .finish()
    }
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    pub fn theme(&self) -> &ColorfulTheme {
        &self.theme
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&self, message: &str) -> bool {
        match Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(false)
            .interact()
        {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!("Confirmation prompt failed: {}", e);
                false
            }
        }
    }

    fn alert(&self, message: &str) {
        eprintln!("{} {}", "!".red().bold(), message.red());
    }
}
