//! Terminal UI, split Model-View-Intent style:
//! - Model (state.rs): `App` and what the output half of the screen shows
//! - View (view.rs): pure render functions over the state
//! - Intent (actions.rs, input.rs): key presses mapped to semantic actions
//! - logic.rs: the dispatch function applying actions to state

pub mod actions;
pub mod input;
pub mod logic;
pub mod state;
pub mod view;

pub use input::action_for_key;
pub use state::App;
pub use view::render;
