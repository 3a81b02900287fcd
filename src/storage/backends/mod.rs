mod file;
mod memory;

pub use file::FileKvStore;
pub use memory::MemoryKvStore;
