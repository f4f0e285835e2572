//! Main command loop

use std::io::{self, BufRead, Write};

use super::ChatApp;
use crate::commands::{parse_user_command, UserCommand, HELP_LINES};
use crate::error::SessionError;
use crate::protocol::BackendAction;
use crate::ui;

const PROMPT: &str = "> ";

impl<R: BufRead, W: Write> ChatApp<R, W> {
    /// Run until `/quit`, end of input, or a fatal backend error.
    pub fn run(&mut self) -> io::Result<()> {
        self.print_help()?;

        loop {
            self.process_events()?;
            if self.state.fatal.is_some() {
                break;
            }

            self.prompt(PROMPT)?;
            let Some(line) = self.read_line()? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match parse_user_command(&line) {
                UserCommand::Submit => {
                    if !self.submit()? {
                        break;
                    }
                }
                UserCommand::Summary => self.show_summary()?,
                UserCommand::Help => self.print_help()?,
                UserCommand::Quit => break,
                UserCommand::Unknown(cmd) => {
                    writeln!(self.output, "Unknown command: /{}. Type /help for a list.", cmd)?;
                }
                UserCommand::Chat(text) => self.send_and_wait(BackendAction::SendMessage(text))?,
            }
        }

        // The backend thread ends when it sees Quit or the channel closes
        let _ = self.action_tx.send(BackendAction::Quit);
        self.output.flush()
    }

    /// Collect and send the form. Returns false if input ended while prompting.
    fn submit(&mut self) -> io::Result<bool> {
        if !self.state.visibility().form {
            writeln!(self.output, "{}", SessionError::AlreadySubmitted)?;
            return Ok(true);
        }
        let Some(form) = self.prompt_form()? else {
            return Ok(false);
        };
        self.send_and_wait(BackendAction::Submit(form))?;
        Ok(true)
    }

    fn show_summary(&mut self) -> io::Result<()> {
        match self.state.record() {
            Some(record) => {
                for line in ui::summary_lines(record) {
                    writeln!(self.output, "{}", line)?;
                }
            }
            None => writeln!(self.output, "{}", SessionError::NotSubmitted)?,
        }
        Ok(())
    }

    fn print_help(&mut self) -> io::Result<()> {
        for line in HELP_LINES {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    fn send_and_wait(&mut self, action: BackendAction) -> io::Result<()> {
        if self.dispatch(action) {
            self.wait_for_idle()?;
        }
        Ok(())
    }
}
