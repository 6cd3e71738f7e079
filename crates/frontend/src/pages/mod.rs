pub mod ai_model;
pub mod frame;
pub mod m107_lots;
pub mod not_found;
pub mod overview;
pub mod personnel;
pub mod reports;
pub mod settings;
pub mod shell_lots;
pub mod shift_details;
pub mod workspace;
