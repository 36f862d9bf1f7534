//! Runtime: drives a [`Root`](crate::layout::Root) on a real terminal.
//!
//! Two actor threads feed one event channel consumed by the main loop:
//!
//! ```text
//! ┌──────────────┐    Event     ┌──────────────┐   Block   ┌─────────────┐
//! │ Input Thread │ ───────────▶ │              │ ────────▶ │ FrameWriter │
//! └──────────────┘              │  Main Loop   │           └─────────────┘
//! ┌──────────────┐    Event     │ (Root owner) │
//! │ Timer Thread │ ───────────▶ │              │
//! └──────────────┘ ◀─────────── └──────────────┘
//!                    Schedule
//! ```

mod input;
mod program;
mod timer;

pub use input::InputActor;
pub use program::{Program, ProgramConfig};
pub use timer::TimerActor;
