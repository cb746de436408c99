mod controller;
mod derive;
mod error;
mod options;
mod state;

#[cfg(test)]
mod tests;

pub use controller::ListingController;
pub use derive::derive;
pub use error::ViewError;
pub use options::filter_options;
pub use state::{Direction, SortSpec, ViewState};
