use crate::error::{Result, SeleneError};
use dialoguer::Input;
use std::io::{self, Write};

/// Line-oriented user interaction used by the menu.
pub trait Console {
    /// Reads one line of input. The prompt is shown without a trailing colon.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Blocks until the user presses Enter.
    fn wait_for_enter(&mut self) -> Result<()> {
        println!();
        self.read_line("Press Enter to continue...").map(|_| ())
    }

    fn clear_screen(&mut self) {}
}

/// Asks a yes/no question. Anything other than `y` is a no.
pub fn confirm(console: &mut dyn Console, prompt: &str) -> Result<bool> {
    let answer = console.read_line(prompt)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

/// Interactive terminal backed by dialoguer.
#[derive(Default)]
pub struct TerminalConsole;

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let input: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| match e {
                dialoguer::Error::IO(ref err) if err.kind() == io::ErrorKind::Interrupted => {
                    SeleneError::Interrupted
                }
                other => SeleneError::from(other),
            })?;
        Ok(input.trim().to_string())
    }

    fn wait_for_enter(&mut self) -> Result<()> {
        print!("\nPress Enter to continue...");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Err(SeleneError::Interrupted);
        }
        Ok(())
    }

    fn clear_screen(&mut self) {
        print!("\x1B[2J\x1B[1;1H");
        let _ = io::stdout().flush();
    }
}
