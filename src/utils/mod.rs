pub mod environment;
pub mod paths;

pub use environment::default_projects_dir;
pub use paths::{decode_path, expand_tilde, format_path_with_tilde, truncate_name};
