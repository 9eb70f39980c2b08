pub mod form;
pub mod health;
pub mod region;
pub mod reservation;
pub mod slot;
