mod row;
mod writer;

pub use row::*;
pub use writer::*;
