// src/config/consts.rs

// Input
pub const DEFAULT_INPUT: &str = "./input/rtf/coaching_candidates.rtf";

// Local cache of normalized tables
pub const DEFAULT_CACHE_DIR: &str = "./input/csv";
pub const CACHE_SUFFIX: &str = "_cleaned.csv";
pub const CACHE_ID_LEN: usize = 16; // hex digits of the input's SHA-256

// Debug log
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Output
pub const DEFAULT_COUNT: usize = 10;
pub const MAX_GUI_COUNT: usize = 500;
