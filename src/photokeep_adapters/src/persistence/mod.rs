pub mod hashmap_user_directory;

pub use hashmap_user_directory::HashMapUserDirectory;
