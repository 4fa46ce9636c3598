#![forbid(unsafe_code)]

//! Event loop, timer discipline, and controller for the filmstrip carousel.
//!
//! The runtime follows an Elm-style update cycle: a [`Model`] turns each
//! message into a state change plus a [`Cmd`], and the loop executes the
//! command before taking the next message. The only scheduled resource is a
//! single pending auto-advance tick; `Cmd::Tick` always replaces it, so a
//! manual navigation implicitly resets the auto-advance clock.

pub mod controller;
pub mod program;
pub mod simulator;
pub mod timer;

pub use controller::{CarouselConfig, CarouselController, DEFAULT_AUTO_ADVANCE};
pub use program::{Cmd, Disconnected, Input, Model, Program, ProgramHandle};
pub use simulator::{CmdRecord, Simulator};
pub use timer::{StopSignal, TickScheduler, TimerStats};
