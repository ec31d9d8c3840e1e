pub mod date_picker;
pub mod date_range_picker;
pub mod month_picker;
