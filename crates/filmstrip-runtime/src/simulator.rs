#![forbid(unsafe_code)]

//! Deterministic carousel simulator for testing.
//!
//! Runs a [`Model`] without threads or real timers: the pending tick is
//! tracked as data and fired on demand, so scenario tests can interleave
//! manual navigation and auto-advance exactly.
//!
//! # Example
//!
//! ```ignore
//! let mut sim = Simulator::new(CarouselController::new(deck));
//! sim.event(CarouselEvent::Measured(Size::new(300, 200)));
//! assert!(sim.has_pending_tick());
//! sim.fire_tick();
//! assert_eq!(sim.model().current_index(), Some(1));
//! ```

use std::time::Duration;

use filmstrip_core::event::CarouselEvent;

use crate::program::{Cmd, Model};

/// Record of a command executed during simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CmdRecord {
    /// No-op command.
    None,
    /// Quit command.
    Quit,
    /// Message recursed through update.
    Msg,
    /// Batch of commands.
    Batch(usize),
    /// Tick armed (replacing any pending one).
    Tick(Duration),
}

/// Headless driver for a [`Model`].
///
/// Mirrors the program loop's command semantics — `Tick` replaces the
/// single pending tick, `Quit` clears it — but leaves firing to the test.
pub struct Simulator<M: Model> {
    model: M,
    running: bool,
    pending_tick: Option<Duration>,
    command_log: Vec<CmdRecord>,
}

impl<M: Model> Simulator<M> {
    /// Create a simulator; the model is not initialized until
    /// [`init`](Self::init).
    pub fn new(model: M) -> Self {
        Self {
            model,
            running: true,
            pending_tick: None,
            command_log: Vec::new(),
        }
    }

    /// Execute the model's startup command.
    pub fn init(&mut self) {
        let cmd = self.model.init();
        self.execute_cmd(cmd);
    }

    /// Dispatch a message through the model.
    pub fn send(&mut self, msg: M::Message) {
        if !self.running {
            return;
        }
        let cmd = self.model.update(msg);
        self.execute_cmd(cmd);
    }

    /// Dispatch a carousel event through the model.
    pub fn event(&mut self, event: CarouselEvent) {
        self.send(M::Message::from(event));
    }

    /// Fire the pending tick, if one is armed.
    ///
    /// Consumes the pending tick and delivers [`CarouselEvent::Tick`];
    /// the model's command may arm a new one. Returns whether a tick fired.
    pub fn fire_tick(&mut self) -> bool {
        if self.pending_tick.take().is_none() {
            return false;
        }
        self.event(CarouselEvent::Tick);
        true
    }

    /// The interval of the pending tick, if one is armed.
    pub fn pending_tick(&self) -> Option<Duration> {
        self.pending_tick
    }

    /// Whether exactly one tick is armed.
    pub fn has_pending_tick(&self) -> bool {
        self.pending_tick.is_some()
    }

    /// Whether the simulated program is still running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The wrapped model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable access to the wrapped model.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// The command execution log.
    pub fn command_log(&self) -> &[CmdRecord] {
        &self.command_log
    }

    /// Number of ticks armed so far (including replaced ones).
    pub fn ticks_armed(&self) -> usize {
        self.command_log
            .iter()
            .filter(|record| matches!(record, CmdRecord::Tick(_)))
            .count()
    }

    fn execute_cmd(&mut self, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None => self.command_log.push(CmdRecord::None),
            Cmd::Quit => {
                self.running = false;
                self.pending_tick = None;
                self.command_log.push(CmdRecord::Quit);
            }
            Cmd::Msg(m) => {
                self.command_log.push(CmdRecord::Msg);
                let next = self.model.update(m);
                self.execute_cmd(next);
            }
            Cmd::Batch(cmds) => {
                self.command_log.push(CmdRecord::Batch(cmds.len()));
                for c in cmds {
                    self.execute_cmd(c);
                    if !self.running {
                        break;
                    }
                }
            }
            Cmd::Tick(interval) => {
                self.pending_tick = Some(interval);
                self.command_log.push(CmdRecord::Tick(interval));
            }
        }
    }
}
