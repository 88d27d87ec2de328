pub mod datetime;
pub mod html;
