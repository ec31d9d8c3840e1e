use chrono::{Datelike, NaiveDate};
use yew::prelude::*;

use crate::hooks::use_outside_click;
use crate::services::date_utils::{
    first_of_month, format_iso_date, format_month_year, month_matrix, next_month, prev_month,
    today, WEEKDAY_LABELS,
};
use crate::services::logging::Logger;
use crate::services::selection::{classify_day, RangePhase, RangeSelection, RangeValue};

#[derive(Properties, PartialEq)]
pub struct DateRangePickerProps {
    /// Committed range; both endpoints None means no selection
    #[prop_or_default]
    pub value: RangeValue,
    /// Callback invoked with the normalized range on every committed change
    pub on_change: Callback<RangeValue>,
    /// Text for the start slot while empty
    #[prop_or_default]
    pub start_placeholder: Option<String>,
    /// Text for the end slot while empty
    #[prop_or_default]
    pub end_placeholder: Option<String>,
    /// Whether the range picker is disabled
    #[prop_or_default]
    pub disabled: bool,
}

/// Date-range picker with two-click selection and hover preview.
///
/// The first day click starts a pending range, the second completes it with
/// the endpoints ordered so start <= end, emits through `on_change` and
/// closes the panel. Hovering while pending previews the would-be interval.
/// Clicking outside the component abandons the pending endpoint and falls
/// back to the last committed value.
#[function_component(DateRangePicker)]
pub fn date_range_picker(props: &DateRangePickerProps) -> Html {
    let open = use_state(|| false);
    let root_ref = use_node_ref();
    let selection = use_state(|| RangeSelection::from_value(props.value));

    let anchor = use_state(|| {
        let base = props.value.normalized().start.unwrap_or_else(today);
        (base.year(), base.month())
    });

    // Re-derive interactive state whenever the external value changes; this
    // also re-anchors the panel to the range's start month.
    {
        let selection = selection.clone();
        let anchor = anchor.clone();
        use_effect_with(props.value, move |value| {
            selection.set(RangeSelection::from_value(*value));
            if let Some(start) = value.normalized().start {
                anchor.set((start.year(), start.month()));
            }
        });
    }

    let toggle_panel = {
        let open = open.clone();
        let disabled = props.disabled;
        Callback::from(move |_: MouseEvent| {
            if disabled {
                return;
            }
            open.set(!*open);
        })
    };

    // Outside interaction is an implicit cancel: any pending endpoint and
    // hover state roll back to the committed value.
    {
        let open = open.clone();
        let selection = selection.clone();
        let committed = props.value;
        use_outside_click(
            root_ref.clone(),
            *open,
            Callback::from(move |_| {
                selection.set(RangeSelection::from_value(committed));
                open.set(false);
            }),
        );
    }

    let on_day_click = {
        let selection = selection.clone();
        let on_change = props.on_change.clone();
        let open = open.clone();
        Callback::from(move |day: NaiveDate| {
            let mut next = *selection;
            if let Some(committed) = next.click(day) {
                Logger::info_with_component(
                    "date-range-picker",
                    &format!(
                        "range committed {} .. {}",
                        committed.start.map(format_iso_date).unwrap_or_default(),
                        committed.end.map(format_iso_date).unwrap_or_default(),
                    ),
                );
                on_change.emit(committed);
                open.set(false);
            }
            selection.set(next);
        })
    };

    let on_day_hover = {
        let selection = selection.clone();
        Callback::from(move |day: NaiveDate| {
            let mut next = *selection;
            if next.phase() == RangePhase::Pending {
                next.hover(day);
                selection.set(next);
            }
        })
    };

    let on_grid_leave = {
        let selection = selection.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *selection;
            next.clear_hover();
            selection.set(next);
        })
    };

    let on_today_click = {
        let selection = selection.clone();
        let on_change = props.on_change.clone();
        let open = open.clone();
        let anchor = anchor.clone();
        Callback::from(move |_: MouseEvent| {
            let now = today();
            let mut next = *selection;
            let committed = next.select_single(now);
            selection.set(next);
            anchor.set((now.year(), now.month()));
            on_change.emit(committed);
            open.set(false);
        })
    };

    let on_clear_click = {
        let selection = selection.clone();
        let on_change = props.on_change.clone();
        let open = open.clone();
        Callback::from(move |_: MouseEvent| {
            selection.set(RangeSelection::empty());
            on_change.emit(RangeValue::empty());
            open.set(false);
        })
    };

    let on_prev_month = {
        let anchor = anchor.clone();
        Callback::from(move |_: MouseEvent| {
            let (year, month) = *anchor;
            anchor.set(prev_month(year, month));
        })
    };

    let on_next_month = {
        let anchor = anchor.clone();
        Callback::from(move |_: MouseEvent| {
            let (year, month) = *anchor;
            anchor.set(next_month(year, month));
        })
    };

    let (anchor_year, anchor_month) = *anchor;
    let days = month_matrix(first_of_month(anchor_year, anchor_month));
    let interval = selection.active_interval();

    let committed = props.value.normalized();
    let start_text = committed
        .start
        .map(format_iso_date)
        .unwrap_or_else(|| {
            props
                .start_placeholder
                .clone()
                .unwrap_or_else(|| "Start date".to_string())
        });
    let end_text = committed
        .end
        .map(format_iso_date)
        .unwrap_or_else(|| {
            props
                .end_placeholder
                .clone()
                .unwrap_or_else(|| "End date".to_string())
        });

    html! {
        <div class="date-range-picker" ref={root_ref.clone()}>
            <button
                type="button"
                class="picker-trigger"
                onclick={toggle_panel}
                disabled={props.disabled}
            >
                <span class="picker-text">{start_text}</span>
                <span class="range-separator">{"→"}</span>
                <span class="picker-text">{end_text}</span>
                <span class="picker-icon">{"📅"}</span>
            </button>

            {if *open && !props.disabled {
                html! {
                    <div class="picker-panel" role="dialog" aria-label="Choose date range">
                        <div class="panel-header">
                            <button type="button" class="nav-button" onclick={on_prev_month}>{"‹"}</button>
                            <span class="panel-title">{format_month_year(anchor_year, anchor_month)}</span>
                            <button type="button" class="nav-button" onclick={on_next_month}>{"›"}</button>
                        </div>

                        <div class="weekday-row">
                            {for WEEKDAY_LABELS.iter().map(|label| {
                                html! { <span class="weekday">{*label}</span> }
                            })}
                        </div>

                        <div class="day-grid" onmouseleave={on_grid_leave}>
                            {for days.iter().map(|day| {
                                let day = *day;
                                let in_month = day.month() == anchor_month;
                                let highlight = classify_day(day, interval);

                                let onclick = {
                                    let on_day_click = on_day_click.clone();
                                    Callback::from(move |_: MouseEvent| on_day_click.emit(day))
                                };
                                let onmouseenter = {
                                    let on_day_hover = on_day_hover.clone();
                                    Callback::from(move |_: MouseEvent| on_day_hover.emit(day))
                                };

                                html! {
                                    <button
                                        type="button"
                                        class={classes!(
                                            "day-cell",
                                            in_month.then(|| "current-month"),
                                            (!in_month).then(|| "other-month"),
                                            highlight.is_start.then(|| "range-start"),
                                            highlight.is_end.then(|| "range-end"),
                                            highlight.is_range_middle.then(|| "range-middle"),
                                        )}
                                        onclick={onclick}
                                        onmouseenter={onmouseenter}
                                    >
                                        {day.day()}
                                    </button>
                                }
                            })}
                        </div>

                        <div class="panel-footer">
                            <button type="button" class="today-button" onclick={on_today_click}>
                                {"Today"}
                            </button>
                            <button type="button" class="clear-button" onclick={on_clear_click}>
                                {"Clear"}
                            </button>
                        </div>
                    </div>
                }
            } else { html! {} }}
        </div>
    }
}
