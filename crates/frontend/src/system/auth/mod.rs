pub mod context;
pub mod mock;
pub mod storage;
