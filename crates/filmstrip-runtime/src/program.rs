#![forbid(unsafe_code)]

//! Elm-style update loop for carousel models.
//!
//! A [`Model`] maps messages to state changes and returns a [`Cmd`]
//! describing the side effect to execute. The loop processes one message to
//! completion (update, then command) before taking the next, so reads after
//! a dispatch always observe a consistent model.

use std::sync::mpsc;
use std::time::Duration;

use filmstrip_core::event::CarouselEvent;

use crate::timer::{TickScheduler, TimerStats};

/// Application state and behavior for the update loop.
pub trait Model: Sized {
    /// The message type dispatched through [`update`](Self::update).
    ///
    /// Must be constructible from a [`CarouselEvent`] so the tick scheduler
    /// and input sources can feed the same channel.
    type Message: From<CarouselEvent> + Send + 'static;

    /// Startup command, executed once before any message is processed.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::none()
    }

    /// Core state transition: consume a message, return the side effect.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;
}

/// Side effects the loop executes on behalf of a model.
#[derive(Default)]
pub enum Cmd<M> {
    /// No operation.
    #[default]
    None,
    /// Stop the loop and cancel the pending tick.
    Quit,
    /// Feed another message through `update`.
    Msg(M),
    /// Execute several commands in order, stopping early on quit.
    Batch(Vec<Cmd<M>>),
    /// Replace the pending auto-advance tick with one firing after the
    /// given interval. There is never more than one pending tick.
    Tick(Duration),
}

impl<M> Cmd<M> {
    /// Create a no-op command.
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    /// Create a quit command.
    #[inline]
    pub fn quit() -> Self {
        Self::Quit
    }

    /// Create a message command.
    #[inline]
    pub fn msg(m: M) -> Self {
        Self::Msg(m)
    }

    /// Create a tick command.
    #[inline]
    pub fn tick(interval: Duration) -> Self {
        Self::Tick(interval)
    }

    /// Create a batch, collapsing trivial cases.
    pub fn batch(cmds: Vec<Self>) -> Self {
        let mut cmds = cmds;
        match cmds.len() {
            0 => Self::None,
            1 => cmds.remove(0),
            _ => Self::Batch(cmds),
        }
    }

    /// Stable name for tracing.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Quit => "Quit",
            Self::Msg(_) => "Msg",
            Self::Batch(_) => "Batch",
            Self::Tick(_) => "Tick",
        }
    }
}

impl<M: std::fmt::Debug> std::fmt::Debug for Cmd<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Quit => write!(f, "Quit"),
            Self::Msg(m) => f.debug_tuple("Msg").field(m).finish(),
            Self::Batch(cmds) => f.debug_tuple("Batch").field(cmds).finish(),
            Self::Tick(d) => f.debug_tuple("Tick").field(d).finish(),
        }
    }
}

/// One payload on the program's input channel.
///
/// External senders deliver `Message`s; the tick scheduler delivers `Tick`s
/// stamped with the generation that armed them. A tick can fire into the
/// channel and then be overtaken by a manual navigation; the stamp lets the
/// loop recognize and discard it instead of advancing off a reset clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<M> {
    /// A message from a nav control, indicator, or measurement source.
    Message(M),
    /// A fired auto-advance tick.
    Tick {
        /// Scheduler generation at the moment the tick was armed.
        generation: u64,
    },
}

/// Error returned when the program has shut down and dropped its receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disconnected;

impl std::fmt::Display for Disconnected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "program input channel disconnected")
    }
}

impl std::error::Error for Disconnected {}

/// Cloneable sender that input sources use to reach a running [`Program`].
pub struct ProgramHandle<M> {
    sender: mpsc::Sender<Input<M>>,
}

impl<M> ProgramHandle<M> {
    /// Deliver a message to the program.
    pub fn send(&self, msg: M) -> Result<(), Disconnected> {
        self.sender
            .send(Input::Message(msg))
            .map_err(|_| Disconnected)
    }
}

impl<M> Clone for ProgramHandle<M> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

/// Runs a model against a message channel until quit.
///
/// Owns the model and the tick scheduler. Input sources (nav controls,
/// indicator clicks, measurement reports) send through the handle returned
/// by [`Program::new`]; ticks arrive on the same channel, so all mutation
/// happens on this loop's thread.
pub struct Program<M: Model> {
    model: M,
    events: mpsc::Receiver<Input<M::Message>>,
    scheduler: TickScheduler<M::Message>,
    running: bool,
}

impl<M: Model> Program<M> {
    /// Create a program and the handle input sources use to reach it.
    pub fn new(model: M) -> (Self, ProgramHandle<M::Message>) {
        let (sender, events) = mpsc::channel();
        let scheduler = TickScheduler::new(sender.clone());
        (
            Self {
                model,
                events,
                scheduler,
                running: true,
            },
            ProgramHandle { sender },
        )
    }

    /// Execute the model's startup command.
    pub fn init(&mut self) {
        let cmd = self.model.init();
        self.execute_cmd(cmd);
    }

    /// Process messages until a quit command arrives.
    ///
    /// The pending tick is cancelled on the way out regardless of how the
    /// loop ends; a stale tick after teardown would mutate state for a
    /// rendering surface that no longer exists.
    pub fn run(&mut self) {
        while self.running {
            match self.events.recv() {
                Ok(Input::Message(msg)) => self.dispatch(msg),
                Ok(Input::Tick { generation }) => self.dispatch_tick(generation),
                Err(mpsc::RecvError) => break,
            }
        }
        self.scheduler.cancel();
    }

    /// Deliver a fired tick, unless a later restart or cancel made it stale.
    ///
    /// The fire and the clock reset race through the same channel: a tick
    /// already sent cannot be revoked, so it is vetted here against the
    /// scheduler's current generation before it can touch the model.
    fn dispatch_tick(&mut self, generation: u64) {
        if generation != self.scheduler.generation() {
            tracing::debug!(generation, "stale tick discarded");
            return;
        }
        self.dispatch(M::Message::from(CarouselEvent::Tick));
    }

    /// Dispatch a single message through the model.
    pub fn dispatch(&mut self, msg: M::Message) {
        if !self.running {
            return;
        }
        let cmd = self.model.update(msg);
        tracing::trace!(cmd = cmd.type_name(), "update produced command");
        self.execute_cmd(cmd);
    }

    /// The wrapped model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable access to the wrapped model.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Whether the loop is still accepting messages.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether a tick handle is currently armed.
    pub fn has_pending_tick(&self) -> bool {
        self.scheduler.has_pending()
    }

    /// Shared timer counters, for instrumented tests.
    pub fn timer_stats(&self) -> TimerStats {
        self.scheduler.stats()
    }

    fn execute_cmd(&mut self, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None => {}
            Cmd::Quit => {
                self.running = false;
                self.scheduler.cancel();
            }
            Cmd::Msg(m) => {
                let next = self.model.update(m);
                self.execute_cmd(next);
            }
            Cmd::Batch(cmds) => {
                for c in cmds {
                    self.execute_cmd(c);
                    if !self.running {
                        break;
                    }
                }
            }
            Cmd::Tick(interval) => self.scheduler.restart(interval),
        }
    }
}
