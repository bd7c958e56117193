pub mod backup;
pub mod compare;
