/// Argument validation layer: path resolution, existence and extension checks.
pub mod arguments;
pub mod errors;
pub mod extension;
pub mod path;

pub use arguments::{DEFAULT_PALETTE, ParsedArguments, RawArguments, SchemeMode, validate};
pub use errors::ValidationError;
