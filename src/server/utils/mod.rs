pub mod genre_utils;
pub mod name_utils;
pub mod stream_url_utils;
