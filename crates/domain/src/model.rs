pub mod entities;
pub mod tally;

pub use entities::FileEntry;
pub use tally::ExtensionTally;
