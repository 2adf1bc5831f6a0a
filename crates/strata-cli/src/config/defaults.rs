use std::path::PathBuf;

use strata_analysis::{DEFAULT_IGNORES, MAX_FILE_SIZE};

pub fn default_root() -> PathBuf {
    PathBuf::from(".")
}

pub fn default_exclude() -> Vec<String> {
    DEFAULT_IGNORES.iter().map(|s| s.to_string()).collect()
}

pub fn default_max_file_size() -> u64 {
    MAX_FILE_SIZE
}
