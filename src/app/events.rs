//! Event processing from backend

use crossbeam_channel::TryRecvError;
use std::io::{self, BufRead, Write};

use super::ChatApp;
use crate::events;
use crate::protocol::GuiEvent;

impl<R: BufRead, W: Write> ChatApp<R, W> {
    /// Apply whatever the backend has already sent, without blocking.
    pub fn process_events(&mut self) -> io::Result<()> {
        loop {
            match self.event_rx.try_recv() {
                Ok(event) => self.process_single_event(event)?,
                Err(TryRecvError::Empty) => return Ok(()),
                Err(TryRecvError::Disconnected) => {
                    self.backend_gone();
                    return Ok(());
                }
            }
        }
    }

    /// Block until the backend has finished the action in flight.
    pub fn wait_for_idle(&mut self) -> io::Result<()> {
        while self.state.pending {
            match self.event_rx.recv() {
                Ok(event) => self.process_single_event(event)?,
                Err(_) => self.backend_gone(),
            }
        }
        Ok(())
    }

    fn process_single_event(&mut self, event: GuiEvent) -> io::Result<()> {
        events::process_single_event(
            &mut self.state,
            event,
            &mut self.output,
            self.logger.as_ref(),
        )
    }

    fn backend_gone(&mut self) {
        self.state.pending = false;
        self.state
            .fatal
            .get_or_insert_with(|| "backend stopped".to_string());
    }
}
