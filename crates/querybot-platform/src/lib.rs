pub mod storage;
pub mod flows;
pub mod files;
