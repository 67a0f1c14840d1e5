pub mod declarations;
pub mod extract;
pub mod io;
pub mod models;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use declarations::{
    DeclarationError, parse_builtin_fn, parse_builtin_fns_dir, parse_enum_variants, parse_field,
    parse_step, parse_steps_dir, parse_struct,
};
pub use extract::{ChannelKey, ChannelRegistry, ExtractError, Extractor};
pub use io::{IoError, PathResolver};
pub use models::*;
