pub mod preferences;
pub mod state;
pub mod view;
