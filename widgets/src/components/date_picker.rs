use chrono::{Datelike, NaiveDate};
use yew::prelude::*;

use crate::hooks::use_outside_click;
use crate::services::date_utils::{
    first_of_month, format_iso_date, format_month_year, month_matrix, next_month, prev_month,
    today, WEEKDAY_LABELS,
};
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct DatePickerProps {
    /// Committed selection, or None when nothing is selected
    #[prop_or_default]
    pub value: Option<NaiveDate>,
    /// Callback invoked with the new selection on every committed change
    pub on_change: Callback<Option<NaiveDate>>,
    /// Trigger text while nothing is selected
    #[prop_or_default]
    pub placeholder: Option<String>,
    /// Whether the date picker is disabled
    #[prop_or_default]
    pub disabled: bool,
}

/// Single-date picker: a trigger button that opens a floating month panel.
///
/// Day clicks emit `Some(date)` and close the panel, "Today" selects the
/// current date and re-anchors the panel to the current month, "Clear" emits
/// `None`. Clicking outside the component closes the panel.
#[function_component(DatePicker)]
pub fn date_picker(props: &DatePickerProps) -> Html {
    let open = use_state(|| false);
    let root_ref = use_node_ref();

    // Anchor month/year for the visible grid, independent of the selection
    // until the external value changes.
    let anchor = use_state(|| {
        let base = props.value.unwrap_or_else(today);
        (base.year(), base.month())
    });

    // Re-anchor when the external value changes.
    {
        let anchor = anchor.clone();
        use_effect_with(props.value, move |value| {
            if let Some(date) = value {
                anchor.set((date.year(), date.month()));
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
            let was_open = *open;
            open.set(!was_open);
            Logger::debug_with_component(
                "date-picker",
                &format!("panel toggle: {} -> {}", was_open, !was_open),
            );
        })
    };

    {
        let open = open.clone();
        use_outside_click(
            root_ref.clone(),
            *open,
            Callback::from(move |_| open.set(false)),
        );
    }

    let on_day_click = {
        let on_change = props.on_change.clone();
        let open = open.clone();
        Callback::from(move |day: NaiveDate| {
            Logger::info_with_component("date-picker", &format!("selected {}", format_iso_date(day)));
            on_change.emit(Some(day));
            open.set(false);
        })
    };

    let on_today_click = {
        let on_change = props.on_change.clone();
        let open = open.clone();
        let anchor = anchor.clone();
        Callback::from(move |_: MouseEvent| {
            let now = today();
            anchor.set((now.year(), now.month()));
            on_change.emit(Some(now));
            open.set(false);
        })
    };

    let on_clear_click = {
        let on_change = props.on_change.clone();
        let open = open.clone();
        Callback::from(move |_: MouseEvent| {
            on_change.emit(None);
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

    let display_text = match props.value {
        Some(date) => format_iso_date(date),
        None => props
            .placeholder
            .clone()
            .unwrap_or_else(|| "Select date".to_string()),
    };

    html! {
        <div class="date-picker" ref={root_ref.clone()}>
            <button
                type="button"
                class="picker-trigger"
                onclick={toggle_panel}
                disabled={props.disabled}
            >
                <span class="picker-text">{display_text}</span>
                <span class="picker-icon">{"📅"}</span>
            </button>

            {if *open && !props.disabled {
                html! {
                    <div class="picker-panel" role="dialog" aria-label="Choose date">
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

                        <div class="day-grid">
                            {for days.iter().map(|day| {
                                let day = *day;
                                let in_month = day.month() == anchor_month;
                                let is_selected = props.value == Some(day);

                                let onclick = {
                                    let on_day_click = on_day_click.clone();
                                    Callback::from(move |_: MouseEvent| on_day_click.emit(day))
                                };

                                html! {
                                    <button
                                        type="button"
                                        class={classes!(
                                            "day-cell",
                                            in_month.then(|| "current-month"),
                                            (!in_month).then(|| "other-month"),
                                            is_selected.then(|| "selected"),
                                        )}
                                        onclick={onclick}
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
