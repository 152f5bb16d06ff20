// View state: the loaded catalog, its filtered subset and the current page.

pub mod pagination;
pub mod state;

pub use state::ViewState;
