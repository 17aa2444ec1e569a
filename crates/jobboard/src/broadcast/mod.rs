//! Board change notifications.
//!
//! Every applied intent publishes a [`BoardEvent`] after the store has been
//! mutated and persisted, so observers only ever see settled state.

pub mod board_events;

pub use board_events::{drain, BoardEvent, BoardEvents};
