pub mod env {
    pub const SETTINGS_PREFIX: &str = "PHOTOKEEP";
    pub const SETTINGS_FILE: &str = "photokeep";
}

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
