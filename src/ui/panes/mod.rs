//! TUI pane rendering modules
//!
//! Stateless render functions for the visible panes:
//!
//! - [`bars`]: bar chart of a recorded step with comparison/swap/sorted
//!   highlighting
//! - [`input`]: current data values and the modal edit buffer
//! - [`info`]: algorithm description lines and the current action
//! - [`status`]: status bar with keybindings and playback state badges

pub mod bars;
pub mod info;
pub mod input;
pub mod status;

pub use bars::render_chart_pane;
pub use info::render_info_pane;
pub use input::render_input_pane;
pub use status::render_status_bar;
