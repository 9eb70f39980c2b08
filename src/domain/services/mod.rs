pub mod availability;
pub mod reservation_form;
