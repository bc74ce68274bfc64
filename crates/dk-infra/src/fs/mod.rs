mod image_file;

pub use image_file::{read_image_data_url, ImageFileReader};
