pub mod notification;
pub mod region;
pub mod reservation;
