pub mod fs;
pub mod storage;
pub mod time;

pub use fs::{read_image_data_url, ImageFileReader};
pub use storage::{FileKeyValueStorage, InMemoryKeyValueStorage};
pub use time::SystemClock;
