pub const SITE_NAME: &str = "Backoffice";

pub const PER_PAGE_OPTIONS: [u64; 4] = [5, 10, 20, 50];
pub const DEFAULT_PER_PAGE: u64 = 10;
