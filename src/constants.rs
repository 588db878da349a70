/// Categories of the built-in catalog, in seeding order.
pub const CATEGORIES: &[&str] = &["protection", "privacy", "utility", "operations"];

pub mod export {

    pub const CSV_HEADER: &str = "Name,Category,Status,Description";

    pub const FILE_STEM: &str = "knox-export";
}

pub mod limits {

    pub const MAX_USERNAME_LEN: usize = 64;

    pub const MAX_SEARCH_LEN: usize = 100;
}
