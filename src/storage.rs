/// Loading of the project configuration layer from `pyproject.toml` or
/// `package.json`.
pub mod config_file;
mod input;

pub use config_file::{
    Format, LoadError, discover, load_layer, load_layer_or_unset, load_project_layer,
};
pub use input::{Candidate, html_class_names, whitespace_tokens};
