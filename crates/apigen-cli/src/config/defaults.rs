use std::path::PathBuf;

pub fn default_out_dir() -> PathBuf {
    PathBuf::from("api_docs")
}

pub fn default_max_depth() -> usize {
    16
}
