pub mod map_storage;

pub use map_storage::{load_mapped_items, save_mapped_items};
