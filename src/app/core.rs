//! Core ChatApp struct definition and initialization

use crossbeam_channel::{unbounded, Receiver, Sender};
use std::io::{self, BufRead, Write};
use std::thread;

use crate::backend::run_backend;
use crate::logging::TranscriptLogger;
use crate::protocol::{BackendAction, GuiEvent};
use crate::state::ClientState;

pub struct ChatApp<R, W> {
    // Mirror of what the backend reported (session phase, transcript)
    pub state: ClientState,

    // Channels for backend communication
    pub action_tx: Sender<BackendAction>,
    pub event_rx: Receiver<GuiEvent>,

    // Optional HTML transcript
    pub logger: Option<TranscriptLogger>,

    pub(super) input: R,
    pub(super) output: W,
}

impl<R: BufRead, W: Write> ChatApp<R, W> {
    /// Wire the app to an already running backend.
    pub fn new(
        action_tx: Sender<BackendAction>,
        event_rx: Receiver<GuiEvent>,
        input: R,
        output: W,
    ) -> Self {
        Self {
            state: ClientState::new(),
            action_tx,
            event_rx,
            logger: None,
            input,
            output,
        }
    }

    /// Spawn the backend thread talking to `base_url` and wire the app to it.
    pub fn spawn(base_url: String, input: R, output: W) -> Self {
        // Create channels for UI <-> Backend
        let (action_tx, action_rx) = unbounded::<BackendAction>();
        let (event_tx, event_rx) = unbounded::<GuiEvent>();

        thread::spawn(move || {
            run_backend(action_rx, event_tx, &base_url);
        });

        Self::new(action_tx, event_rx, input, output)
    }

    pub fn with_logger(mut self, logger: TranscriptLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Hand an action to the backend. Returns false if the backend is gone.
    pub(super) fn dispatch(&mut self, action: BackendAction) -> bool {
        if self.action_tx.send(action).is_err() {
            self.state.fatal.get_or_insert_with(|| "backend stopped".to_string());
            return false;
        }
        self.state.pending = true;
        true
    }

    /// Read one line without its line ending. `None` at end of input.
    pub(super) fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    pub(super) fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    /// Give back the output sink (tests inspect what was printed).
    pub fn into_output(self) -> W {
        self.output
    }
}
