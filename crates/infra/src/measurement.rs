pub mod line_counter;

pub use line_counter::{ByteLineCounter, count_lines};
