//! finfolio - single-page portfolio with an embedded FinBot chat companion.
//!
//! The UI lives in [`ui`] and [`views`]; the chat widget's state machine lives
//! in [`companion`] and talks to a language model through [`ai`].

pub mod ai;
pub mod companion;
pub mod content;
pub mod theme;
pub mod types;
pub mod ui;
pub mod views;
