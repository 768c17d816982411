pub mod terminal;

pub use terminal::{single_line, strip_escape_sequences};
