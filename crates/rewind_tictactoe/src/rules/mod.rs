//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Rules are kept apart from
//! history so they can be evaluated against any snapshot on the timeline.

pub mod win;

pub use win::check_winner;
