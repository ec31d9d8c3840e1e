use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::services::date_utils::first_of_month;

/// Committed range value reported through the range picker's callback.
///
/// Both endpoints `None` means "no selection". A value with both endpoints
/// present always satisfies `start <= end` after [`RangeValue::normalized`];
/// inverted input is swapped silently rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RangeValue {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl RangeValue {
    pub fn empty() -> Self {
        Self { start: None, end: None }
    }

    /// Single-day range (start == end).
    pub fn single(date: NaiveDate) -> Self {
        Self { start: Some(date), end: Some(date) }
    }

    /// Range from two endpoints in either order.
    pub fn of(a: NaiveDate, b: NaiveDate) -> Self {
        Self { start: Some(a.min(b)), end: Some(a.max(b)) }
    }

    /// Swap the endpoints if they arrived inverted.
    pub fn normalized(self) -> Self {
        match (self.start, self.end) {
            (Some(start), Some(end)) if end < start => Self { start: Some(end), end: Some(start) },
            _ => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// Phase of an interactive range selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePhase {
    /// Nothing chosen yet.
    Empty,
    /// One endpoint chosen, awaiting the second.
    Pending,
    /// Both endpoints confirmed, start <= end.
    Complete,
}

/// Interactive range selection state.
///
/// Tracks the two endpoints plus the ephemeral hovered day used for the
/// preview interval while the second endpoint is pending. The hover date is
/// never part of the committed value and is discarded whenever the selection
/// resets or completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSelection {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    hover: Option<NaiveDate>,
}

impl RangeSelection {
    pub fn empty() -> Self {
        Self { start: None, end: None, hover: None }
    }

    /// Re-derive interactive state from the last committed value.
    ///
    /// An end without a start is malformed input and collapses to a
    /// single-day range.
    pub fn from_value(value: RangeValue) -> Self {
        let value = value.normalized();
        match (value.start, value.end) {
            (None, Some(end)) => Self { start: Some(end), end: Some(end), hover: None },
            (start, end) => Self { start, end, hover: None },
        }
    }

    pub fn phase(&self) -> RangePhase {
        match (self.start, self.end) {
            (None, _) => RangePhase::Empty,
            (Some(_), None) => RangePhase::Pending,
            (Some(_), Some(_)) => RangePhase::Complete,
        }
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Apply a day click. Returns the committed range when this click
    /// completes the selection.
    ///
    /// From Empty or Complete the click starts a fresh selection with the
    /// clicked day as the sole start (a third click after a complete range
    /// always restarts, it never extends). From Pending the click becomes
    /// whichever endpoint keeps start <= end.
    pub fn click(&mut self, day: NaiveDate) -> Option<RangeValue> {
        match (self.start, self.end) {
            (Some(start), None) => {
                let value = RangeValue::of(start, day);
                self.start = value.start;
                self.end = value.end;
                self.hover = None;
                Some(value)
            }
            _ => {
                self.start = Some(day);
                self.end = None;
                self.hover = None;
                None
            }
        }
    }

    /// Track the hovered day. Ignored unless a second endpoint is pending.
    pub fn hover(&mut self, day: NaiveDate) {
        if self.phase() == RangePhase::Pending {
            self.hover = Some(day);
        }
    }

    pub fn clear_hover(&mut self) {
        self.hover = None;
    }

    /// Collapse to a completed single-day range (the "Today" shortcut).
    pub fn select_single(&mut self, day: NaiveDate) -> RangeValue {
        let value = RangeValue::single(day);
        *self = Self::from_value(value);
        value
    }

    pub fn clear(&mut self) -> RangeValue {
        *self = Self::empty();
        RangeValue::empty()
    }

    /// Interval to highlight in the grid: the hover preview while Pending,
    /// the confirmed range while Complete, nothing while Empty.
    pub fn active_interval(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((start, end)),
            (Some(start), None) => self.hover.map(|hover| (start.min(hover), start.max(hover))),
            (None, _) => None,
        }
    }
}

/// Rendering classification of one visible day against the active interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayHighlight {
    pub is_start: bool,
    pub is_end: bool,
    /// Inclusive boundary test: true for the endpoints as well.
    pub is_between: bool,
    /// Strictly interior, no boundary rounding.
    pub is_range_middle: bool,
}

/// Classify `day` against an interval, confirmed or preview.
pub fn classify_day(day: NaiveDate, interval: Option<(NaiveDate, NaiveDate)>) -> DayHighlight {
    let Some((start, end)) = interval else {
        return DayHighlight::default();
    };
    let is_start = day == start;
    let is_end = day == end;
    let is_between = start <= day && day <= end;
    DayHighlight {
        is_start,
        is_end,
        is_between,
        is_range_middle: is_between && !is_start && !is_end,
    }
}

/// Normalize any day of a month to the month's first day.
pub fn select_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date.year(), date.month())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn clicks_commit_in_either_order() {
        // Jan 10 then Jan 5 commits (Jan 5, Jan 10)
        let mut selection = RangeSelection::empty();
        assert_eq!(selection.click(date(2024, 1, 10)), None);
        assert_eq!(selection.phase(), RangePhase::Pending);
        let committed = selection.click(date(2024, 1, 5));
        assert_eq!(committed, Some(RangeValue::of(date(2024, 1, 5), date(2024, 1, 10))));
        assert_eq!(selection.start(), Some(date(2024, 1, 5)));
        assert_eq!(selection.end(), Some(date(2024, 1, 10)));

        // same endpoints, forward order, same result
        let mut forward = RangeSelection::empty();
        forward.click(date(2024, 1, 5));
        let committed = forward.click(date(2024, 1, 10));
        assert_eq!(committed, Some(RangeValue::of(date(2024, 1, 5), date(2024, 1, 10))));
    }

    #[test]
    fn same_day_twice_is_a_single_day_range() {
        let mut selection = RangeSelection::empty();
        selection.click(date(2024, 3, 3));
        let committed = selection.click(date(2024, 3, 3));
        assert_eq!(committed, Some(RangeValue::single(date(2024, 3, 3))));
        assert_eq!(selection.phase(), RangePhase::Complete);
    }

    #[test]
    fn third_click_restarts_the_selection() {
        let mut selection = RangeSelection::empty();
        selection.click(date(2024, 1, 5));
        selection.click(date(2024, 1, 10));
        assert_eq!(selection.phase(), RangePhase::Complete);

        assert_eq!(selection.click(date(2024, 2, 20)), None);
        assert_eq!(selection.phase(), RangePhase::Pending);
        assert_eq!(selection.start(), Some(date(2024, 2, 20)));
        assert_eq!(selection.end(), None);
    }

    #[test]
    fn hover_preview_only_while_pending() {
        let mut selection = RangeSelection::empty();
        selection.hover(date(2024, 1, 8));
        assert_eq!(selection.active_interval(), None);

        selection.click(date(2024, 1, 5));
        selection.hover(date(2024, 1, 8));
        assert_eq!(selection.active_interval(), Some((date(2024, 1, 5), date(2024, 1, 8))));

        // hovering before the start flips the preview bounds
        selection.hover(date(2024, 1, 2));
        assert_eq!(selection.active_interval(), Some((date(2024, 1, 2), date(2024, 1, 5))));

        // completing drops the hover; interval is the confirmed range
        selection.click(date(2024, 1, 10));
        assert_eq!(selection.active_interval(), Some((date(2024, 1, 5), date(2024, 1, 10))));
        selection.hover(date(2024, 1, 20));
        assert_eq!(selection.active_interval(), Some((date(2024, 1, 5), date(2024, 1, 10))));
    }

    #[test]
    fn pending_without_hover_shows_no_interval() {
        let mut selection = RangeSelection::empty();
        selection.click(date(2024, 1, 5));
        assert_eq!(selection.active_interval(), None);
        selection.hover(date(2024, 1, 7));
        selection.clear_hover();
        assert_eq!(selection.active_interval(), None);
    }

    #[test]
    fn dismissal_rolls_back_to_the_committed_value() {
        let committed = RangeValue::of(date(2024, 1, 5), date(2024, 1, 10));
        let mut selection = RangeSelection::from_value(committed);
        selection.click(date(2024, 2, 20));
        selection.hover(date(2024, 2, 25));
        assert_eq!(selection.phase(), RangePhase::Pending);

        selection = RangeSelection::from_value(committed);
        assert_eq!(selection.phase(), RangePhase::Complete);
        assert_eq!(selection.start(), Some(date(2024, 1, 5)));
        assert_eq!(selection.end(), Some(date(2024, 1, 10)));
        assert_eq!(selection.active_interval(), Some((date(2024, 1, 5), date(2024, 1, 10))));
    }

    #[test]
    fn clear_resets_to_empty() {
        let mut selection = RangeSelection::from_value(RangeValue::single(date(2024, 3, 3)));
        let cleared = selection.clear();
        assert_eq!(cleared, RangeValue::empty());
        assert!(cleared.is_empty());
        assert_eq!(selection.phase(), RangePhase::Empty);
    }

    #[test]
    fn select_single_completes_immediately() {
        let mut selection = RangeSelection::empty();
        selection.click(date(2024, 1, 5));
        let committed = selection.select_single(date(2024, 6, 1));
        assert_eq!(committed, RangeValue::single(date(2024, 6, 1)));
        assert_eq!(selection.phase(), RangePhase::Complete);
        assert_eq!(selection.active_interval(), Some((date(2024, 6, 1), date(2024, 6, 1))));
    }

    #[test]
    fn inverted_input_is_normalized_silently() {
        let inverted = RangeValue { start: Some(date(2024, 1, 10)), end: Some(date(2024, 1, 5)) };
        let normalized = inverted.normalized();
        assert_eq!(normalized.start, Some(date(2024, 1, 5)));
        assert_eq!(normalized.end, Some(date(2024, 1, 10)));

        let selection = RangeSelection::from_value(inverted);
        assert_eq!(selection.start(), Some(date(2024, 1, 5)));
        assert_eq!(selection.end(), Some(date(2024, 1, 10)));
    }

    #[test]
    fn end_without_start_collapses_to_single_day() {
        let malformed = RangeValue { start: None, end: Some(date(2024, 4, 4)) };
        let selection = RangeSelection::from_value(malformed);
        assert_eq!(selection.phase(), RangePhase::Complete);
        assert_eq!(selection.start(), Some(date(2024, 4, 4)));
        assert_eq!(selection.end(), Some(date(2024, 4, 4)));
    }

    #[test]
    fn day_classification_against_an_interval() {
        let interval = Some((date(2024, 1, 5), date(2024, 1, 10)));

        let start = classify_day(date(2024, 1, 5), interval);
        assert!(start.is_start && !start.is_end && start.is_between && !start.is_range_middle);

        let end = classify_day(date(2024, 1, 10), interval);
        assert!(end.is_end && !end.is_start && end.is_between && !end.is_range_middle);

        let middle = classify_day(date(2024, 1, 7), interval);
        assert!(!middle.is_start && !middle.is_end && middle.is_between && middle.is_range_middle);

        let outside = classify_day(date(2024, 1, 11), interval);
        assert_eq!(outside, DayHighlight::default());

        let no_interval = classify_day(date(2024, 1, 7), None);
        assert_eq!(no_interval, DayHighlight::default());
    }

    #[test]
    fn single_day_interval_has_no_middle() {
        let interval = Some((date(2024, 3, 3), date(2024, 3, 3)));
        let cell = classify_day(date(2024, 3, 3), interval);
        assert!(cell.is_start && cell.is_end && cell.is_between && !cell.is_range_middle);
    }

    #[test]
    fn select_month_normalizes_to_day_one() {
        assert_eq!(select_month(date(2024, 2, 29)), date(2024, 2, 1));
        assert_eq!(select_month(date(2023, 12, 31)), date(2023, 12, 1));
        assert_eq!(select_month(date(2023, 7, 1)), date(2023, 7, 1));
    }
}
