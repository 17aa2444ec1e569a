//! The board front end state: view model, user intents, and the dashboard
//! that ties store, persistence and observers together.

pub mod colors;
pub mod dashboard;
pub mod intent;
pub mod preview;
pub mod prompt;
pub mod view;

pub use colors::{priority_color, status_color, Hue, Swatch};
pub use dashboard::Dashboard;
pub use intent::{DraftEdit, Intent, Outcome};
pub use preview::PreviewRegistry;
pub use prompt::{FixedAnswer, Prompter, RecordingPrompter, DELETE_CONFIRMATION};
pub use view::{
    render_board, BoardView, ColumnView, DraftView, HeaderView, ImageView, JobCard, BOARD_TITLE,
};
