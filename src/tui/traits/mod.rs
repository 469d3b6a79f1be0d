//! Component trait system for TUI architecture
//!
//! Panels declare their own capabilities instead of App knowing how to
//! render and drive each one.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         App                                 │
//! │     (orchestrator: owns PassengerView, routes key events)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!              ┌───────────────┼───────────────┐
//!              ▼               ▼               ▼
//!        ┌──────────┐   ┌──────────┐   ┌──────────┐
//!        │  Search  │   │  Class   │   │Passenger │
//!        │   Bar    │   │  Chart   │   │  Table   │
//!        └──────────┘   └──────────┘   └──────────┘
//!                              │
//!                     Implements traits:
//!                   Component, Interactive
//! ```
//!
//! - [`Component`] - render from an immutable [`RenderContext`]
//! - [`Interactive`] - handle keys while focused

mod component;
mod interactive;

pub use component::{Component, RenderContext};
pub use interactive::{Handled, Interactive};
