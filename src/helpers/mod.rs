//! Helper functions shared by the views and the boundary adapters

mod url;

pub use url::*;
