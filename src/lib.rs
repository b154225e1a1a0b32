pub mod args;
pub mod error;
pub mod model;
pub mod score;
pub mod storage;
pub mod controller {
    pub mod matches;
    pub mod seed;
}
pub mod view {
    pub mod index;
    pub mod matches;
}

pub const HTMX_PATH: &str = "https://unpkg.com/htmx.org@1.9.12";
