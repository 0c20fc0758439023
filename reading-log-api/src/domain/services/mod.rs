mod entries;

pub use entries::EntryServiceImpl;
