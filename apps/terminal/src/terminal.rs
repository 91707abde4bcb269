//! Line-oriented presentation layer.

use glosor_core::{
    Advance, LoadError, Mode, Pool, SessionController, SessionError, Status, Verdict,
};
use rand::Rng;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::UnboundedReceiver;

/// Completion of one source load.
pub type LoadEvent = (Mode, Result<Pool, LoadError>);

const HELP: &str = "Type your answer and press Enter. Press Enter again for the next item.\n\
Commands: :words  :verbs  :restart  :score  :help  :quit";

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Answer(String),
    Blank,
    Switch(Mode),
    Restart,
    Score,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let Some(name) = trimmed.strip_prefix(':') else {
            return if trimmed.is_empty() {
                Self::Blank
            } else {
                Self::Answer(line.to_string())
            };
        };

        match name.trim() {
            "words" | "w" => Self::Switch(Mode::Words),
            "verbs" | "v" => Self::Switch(Mode::Verbs),
            "restart" | "r" => Self::Restart,
            "score" | "s" => Self::Score,
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Renders the session and forwards user actions to the controller.
pub struct Terminal<R, W> {
    controller: SessionController<R>,
    out: W,
}

impl<R: Rng, W: Write> Terminal<R, W> {
    pub fn new(controller: SessionController<R>, out: W) -> Self {
        Self { controller, out }
    }

    /// Process load completions and input lines until quit or end of input.
    pub async fn run<I>(
        &mut self,
        input: I,
        mut loads: UnboundedReceiver<LoadEvent>,
    ) -> std::io::Result<()>
    where
        I: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        writeln!(self.out, "English Practice")?;
        self.render()?;

        loop {
            tokio::select! {
                biased;
                Some((mode, result)) = loads.recv() => {
                    self.on_loaded(mode, result)?;
                }
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    if self.handle(Command::parse(&line))? == Flow::Quit {
                        break;
                    }
                }
            }
        }

        writeln!(self.out, "Final score: {}", self.controller.score())?;
        self.out.flush()
    }

    fn on_loaded(&mut self, mode: Mode, result: Result<Pool, LoadError>) -> std::io::Result<()> {
        let was_waiting = self.controller.status() == Status::Loading;
        if let Err(e) = &result {
            writeln!(self.out, "Could not load {}: {}", mode, e)?;
        }
        self.controller.deck_loaded(mode, result);

        if was_waiting && mode == self.controller.mode() {
            self.render()?;
        }
        Ok(())
    }

    fn handle(&mut self, command: Command) -> std::io::Result<Flow> {
        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => writeln!(self.out, "{}", HELP)?,
            Command::Unknown(name) => writeln!(self.out, "Unknown command :{}\n{}", name, HELP)?,
            Command::Score => self.render_score()?,
            Command::Restart => match self.controller.restart() {
                Ok(()) => self.render()?,
                Err(e) => self.report(e)?,
            },
            Command::Switch(mode) => match self.controller.switch_mode(mode) {
                Ok(()) => self.render()?,
                Err(e) => self.report(e)?,
            },
            Command::Blank => self.on_blank()?,
            Command::Answer(text) => self.on_answer(&text)?,
        }
        Ok(Flow::Continue)
    }

    fn on_answer(&mut self, text: &str) -> std::io::Result<()> {
        match self.controller.status() {
            // Enter on the feedback screen moves on, whatever was typed.
            Status::Active { answered: Some(_), .. } => self.next(),
            Status::Finished => writeln!(self.out, "Type :restart to practise again."),
            _ => match self.controller.submit(text) {
                Ok(Some(verdict)) => self.render_verdict(&verdict),
                Ok(None) => Ok(()),
                Err(e) => self.report(e),
            },
        }
    }

    fn on_blank(&mut self) -> std::io::Result<()> {
        match self.controller.status() {
            Status::Active { answered: Some(_), .. } => self.next(),
            Status::Finished => writeln!(self.out, "Type :restart to practise again."),
            _ => Ok(()),
        }
    }

    fn next(&mut self) -> std::io::Result<()> {
        match self.controller.advance() {
            Ok(Advance::Next) => self.render(),
            Ok(Advance::Finished) => {
                writeln!(
                    self.out,
                    "🎉 You've completed all {}!",
                    self.controller.mode()
                )?;
                self.render_score()?;
                writeln!(self.out, "Type :restart to practise again.")
            }
            Err(e) => self.report(e),
        }
    }

    fn render(&mut self) -> std::io::Result<()> {
        match self.controller.status() {
            Status::Loading => writeln!(self.out, "Loading {}...", self.controller.mode()),
            Status::Unavailable(reason) => writeln!(
                self.out,
                "The {} deck is unavailable ({}). Try another mode.",
                self.controller.mode(),
                reason
            ),
            Status::Finished => Ok(()),
            Status::Active { .. } => {
                let (Some(item), Some(prompt), Some(progress)) = (
                    self.controller.current_item(),
                    self.controller.prompt(),
                    self.controller.progress(),
                ) else {
                    return Ok(());
                };

                writeln!(self.out)?;
                writeln!(self.out, "{}    Score: {}", progress.label(item), self.controller.score())?;
                writeln!(self.out, "{}", prompt.question)?;
                writeln!(self.out, "  {}", prompt.display)?;
                if let Some(clue) = prompt.clue {
                    writeln!(self.out, "  {}", clue)?;
                }
                write!(self.out, "{} ", prompt.placeholder)?;
                self.out.flush()
            }
        }
    }

    fn render_verdict(&mut self, verdict: &Verdict) -> std::io::Result<()> {
        if verdict.is_correct {
            writeln!(self.out, "✅ Correct! Well done!")?;
        } else {
            writeln!(
                self.out,
                "❌ Not quite. The correct answer is: {}",
                verdict.canonical_answer
            )?;
        }
        writeln!(self.out, "(Enter for next)")
    }

    fn render_score(&mut self) -> std::io::Result<()> {
        writeln!(self.out, "Score: {}", self.controller.score())
    }

    fn report(&mut self, e: SessionError) -> std::io::Result<()> {
        tracing::debug!(error = %e, "rejected action");
        match e {
            SessionError::DeckUnavailable { mode, reason } => writeln!(
                self.out,
                "The {} deck is unavailable ({}).",
                mode, reason
            ),
            SessionError::InvalidTransition { state: "loading", .. } => {
                writeln!(self.out, "Still loading {}...", self.controller.mode())
            }
            other => writeln!(self.out, "{}", other),
        }
    }
}
