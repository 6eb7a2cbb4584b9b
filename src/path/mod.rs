mod expander;
mod home;

pub use expander::{abbreviate_home, PathExpander};
pub use home::home_dir;
