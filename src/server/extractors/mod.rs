mod addon_path_extractor;

pub use addon_path_extractor::*;
