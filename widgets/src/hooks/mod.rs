mod use_outside_click;

pub use use_outside_click::use_outside_click;
