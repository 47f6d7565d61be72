pub mod error;
pub mod reader;

pub use error::InputError;
pub use reader::{read_rows, RowReader};
