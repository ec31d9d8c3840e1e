//! Date picker components for Yew.
//!
//! Three widgets, each rendering a trigger control that opens a floating
//! calendar panel and reports selections through a [`yew::Callback`]:
//!
//! - [`DatePicker`] — single-date selection
//! - [`DateRangePicker`] — two-endpoint range selection with hover preview
//! - [`MonthPicker`] — month selection with year navigation
//!
//! The calendar arithmetic and selection state machines live under
//! [`services`] and are plain `chrono` code with no DOM dependency.

pub mod components;
pub mod hooks;
pub mod services;

pub use components::date_picker::DatePicker;
pub use components::date_range_picker::DateRangePicker;
pub use components::month_picker::MonthPicker;
pub use services::selection::{RangePhase, RangeValue};
