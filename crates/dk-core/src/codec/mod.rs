//! Text and binary codecs.
pub mod base64;
pub mod data_url;

pub use self::base64::{decode, encode, estimate_encoded_len, is_valid_base64};
pub use self::data_url::ImageConversion;
