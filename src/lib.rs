//! Engine for a timed color-matching game: a target color is shown briefly, hidden, and
//! must then be picked out from a set of similar looking options before time runs out.
//!
//! [`game::Game`] is the entry point. Rendering and sound are left to the caller, which
//! feeds in time with [`game::Game::advance`] and reads back [`game::Game::snapshot`] and
//! [`game::Game::drain_events`].

pub mod color;
pub mod config;
pub mod driver;
pub mod game;
pub mod player;
pub mod timer;
