use std::env;
use std::path::PathBuf;

pub struct StoreConfig {
    /// Path of the JSON file holding the user records.
    pub data_file: PathBuf,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        let data_file = env::var("USERS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/users.json"));
        StoreConfig { data_file }
    }
}
