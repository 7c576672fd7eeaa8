pub mod controls;
pub mod input_field;
pub mod toast;
pub mod typing_area;
