pub mod lots;
pub mod shifts;
pub mod workspace;
