pub mod config;
pub mod persistence;

pub use persistence::hashmap_user_directory::HashMapUserDirectory;
