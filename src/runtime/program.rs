//! Program: owns a [`Root`] and runs it on the terminal.
//!
//! The program is the entry point for applications. It prepares the
//! terminal, spawns the input and timer actors, and runs the main loop
//! until a pane returns [`Action::Quit`].

use super::{InputActor, TimerActor};
use crate::block::output::FrameWriter;
use crate::error::{Error, Result};
use crate::input::Event;
use crate::layout::{Root, Size};
use crate::widget::Action;
use crossbeam_channel::{bounded, Receiver};
use crossterm::{
    cursor,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use std::time::Duration;
use tracing::{debug, info};

/// Configuration for the [`Program`].
#[derive(Debug, Clone)]
pub struct ProgramConfig {
    /// Input poll timeout.
    pub input_poll_timeout: Duration,
    /// Whether to use alternate screen buffer.
    pub alternate_screen: bool,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            input_poll_timeout: Duration::from_millis(10),
            alternate_screen: true,
        }
    }
}

/// A running terminal application.
#[derive(Debug)]
pub struct Program {
    /// Configuration.
    config: ProgramConfig,
    /// The participant tree.
    root: Root,
    /// Diffing ANSI writer.
    writer: FrameWriter,
    /// Whether the terminal is in raw mode and needs restoring.
    terminal_active: bool,
}

impl Program {
    /// Create a program with default configuration.
    pub fn new(root: Root) -> Self {
        Self::with_config(root, ProgramConfig::default())
    }

    /// Create a program with custom configuration.
    pub fn with_config(root: Root, config: ProgramConfig) -> Self {
        Self {
            config,
            root,
            writer: FrameWriter::new(),
            terminal_active: false,
        }
    }

    /// The participant tree.
    pub const fn root(&self) -> &Root {
        &self.root
    }

    /// Mutable access to the participant tree.
    pub fn root_mut(&mut self) -> &mut Root {
        &mut self.root
    }

    /// Run until a pane quits. The terminal is restored before returning.
    pub fn run(&mut self) -> Result<()> {
        self.enter_terminal()?;
        let result = self.event_loop();
        self.restore_terminal();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let (event_tx, event_rx) = bounded::<Event>(64);
        let input = InputActor::spawn(event_tx.clone(), self.config.input_poll_timeout)?;
        let timer = TimerActor::spawn(event_tx)?;

        let (width, height) = terminal::size()?;
        self.root.set_size(Size::new(width, height));
        info!(width, height, "program started");

        let mut result = match self.root.init() {
            Some(action) => self.handle_action(action, &timer),
            None => Ok(true),
        };
        if matches!(result, Ok(true)) {
            result = self.paint().and_then(|()| self.pump(&event_rx, &timer));
        }

        // Actors blocked on a full channel see the disconnect and exit.
        drop(event_rx);
        input.join();
        timer.join();
        info!("program stopped");
        result.map(|_| ())
    }

    /// Process events until quit. Returns `Ok(false)` on a clean quit.
    fn pump(&mut self, events: &Receiver<Event>, timer: &TimerActor) -> Result<bool> {
        loop {
            let event = events.recv().map_err(|_| Error::Disconnected)?;
            if let Event::Resize { width, height } = event {
                debug!(width, height, "terminal resized");
                self.writer.invalidate();
            }
            if let Some(action) = self.root.update(&event) {
                if !self.handle_action(action, timer)? {
                    return Ok(false);
                }
            }
            self.paint()?;
        }
    }

    /// Returns `false` when the program should stop.
    fn handle_action(&self, action: Action, timer: &TimerActor) -> Result<bool> {
        match action {
            Action::Quit => {
                debug!("quit requested");
                Ok(false)
            }
            Action::Schedule { delay, event } => {
                timer.schedule(delay, event)?;
                Ok(true)
            }
        }
    }

    fn paint(&mut self) -> Result<()> {
        let frame = self.root.view();
        let mut stdout = io::stdout().lock();
        self.writer.write_to(&frame, &mut stdout)?;
        stdout.flush()?;
        Ok(())
    }

    fn enter_terminal(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.terminal_active = true;

        let mut stdout = io::stdout();
        if self.config.alternate_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        execute!(stdout, EnableBracketedPaste, cursor::Hide)?;
        self.writer.invalidate();
        Ok(())
    }

    fn restore_terminal(&mut self) {
        if !self.terminal_active {
            return;
        }
        self.terminal_active = false;

        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show, DisableBracketedPaste);
        if self.config.alternate_screen {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        self.restore_terminal();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Key, TimerEvent};
    use crate::layout::Direction;

    #[test]
    fn test_default_config() {
        let config = ProgramConfig::default();
        assert_eq!(config.input_poll_timeout, Duration::from_millis(10));
        assert!(config.alternate_screen);
    }

    #[test]
    fn test_handle_action() {
        let (tx, rx) = bounded(4);
        let timer = TimerActor::spawn(tx).unwrap();
        let program = Program::new(Root::new(Direction::Vertical));

        assert!(!program.handle_action(Action::Quit, &timer).unwrap());

        let event = Event::Timer(TimerEvent { target: 7, tag: 1 });
        let schedule = Action::Schedule {
            delay: Duration::from_millis(1),
            event: event.clone(),
        };
        assert!(program.handle_action(schedule, &timer).unwrap());
        assert_eq!(rx.recv_timeout(Duration::from_secs(2)).unwrap(), event);
        timer.join();
    }

    #[test]
    fn test_pump_stops_on_quit() {
        let (tx, rx) = bounded(4);
        let (timer_tx, _timer_rx) = bounded(4);
        let timer = TimerActor::spawn(timer_tx).unwrap();
        let mut program = Program::new(Root::new(Direction::Vertical));

        tx.send(Event::Key(Key::ctrl('c'))).unwrap();
        assert!(!program.pump(&rx, &timer).unwrap());
        timer.join();
    }

    #[test]
    fn test_pump_reports_disconnect() {
        let (tx, rx) = bounded::<Event>(1);
        drop(tx);
        let (timer_tx, _timer_rx) = bounded(4);
        let timer = TimerActor::spawn(timer_tx).unwrap();
        let mut program = Program::new(Root::new(Direction::Vertical));
        assert!(matches!(program.pump(&rx, &timer), Err(Error::Disconnected)));
        timer.join();
    }
}
