mod json_file;
#[cfg(test)]
mod memory;

pub use json_file::JsonFileEntryRepository;
#[cfg(test)]
pub use memory::InMemoryEntryRepository;
