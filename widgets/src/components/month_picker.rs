use chrono::{Datelike, NaiveDate};
use yew::prelude::*;

use crate::hooks::use_outside_click;
use crate::services::date_utils::{format_month_year, month_name, today, year_months};
use crate::services::logging::Logger;
use crate::services::selection::select_month;

#[derive(Properties, PartialEq)]
pub struct MonthPickerProps {
    /// Committed selection, normalized to the first day of the month
    #[prop_or_default]
    pub value: Option<NaiveDate>,
    /// Callback invoked with the month-first date on every committed change
    pub on_change: Callback<Option<NaiveDate>>,
    /// Trigger text while nothing is selected
    #[prop_or_default]
    pub placeholder: Option<String>,
    /// Whether the month picker is disabled
    #[prop_or_default]
    pub disabled: bool,
}

/// Month picker: a trigger button that opens a 12-month grid for one year.
///
/// Month clicks emit the first day of the clicked month and close the panel.
/// Year navigation only changes which 12 months are displayed; the confirmed
/// selection is untouched until the next month click.
#[function_component(MonthPicker)]
pub fn month_picker(props: &MonthPickerProps) -> Html {
    let open = use_state(|| false);
    let root_ref = use_node_ref();

    let panel_year = use_state(|| props.value.unwrap_or_else(today).year());

    // Re-sync the displayed year when the external value changes.
    {
        let panel_year = panel_year.clone();
        use_effect_with(props.value, move |value| {
            if let Some(date) = value {
                panel_year.set(date.year());
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

    {
        let open = open.clone();
        use_outside_click(
            root_ref.clone(),
            *open,
            Callback::from(move |_| open.set(false)),
        );
    }

    let on_month_click = {
        let on_change = props.on_change.clone();
        let open = open.clone();
        Callback::from(move |month_date: NaiveDate| {
            let normalized = select_month(month_date);
            Logger::info_with_component(
                "month-picker",
                &format!("selected {}", format_month_year(normalized.year(), normalized.month())),
            );
            on_change.emit(Some(normalized));
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

    let on_prev_year = {
        let panel_year = panel_year.clone();
        Callback::from(move |_: MouseEvent| {
            panel_year.set(*panel_year - 1);
        })
    };

    let on_next_year = {
        let panel_year = panel_year.clone();
        Callback::from(move |_: MouseEvent| {
            panel_year.set(*panel_year + 1);
        })
    };

    let year = *panel_year;
    let months = year_months(year);

    let display_text = match props.value {
        Some(date) => format_month_year(date.year(), date.month()),
        None => props
            .placeholder
            .clone()
            .unwrap_or_else(|| "Select month".to_string()),
    };

    html! {
        <div class="month-picker" ref={root_ref.clone()}>
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
                    <div class="picker-panel" role="dialog" aria-label="Choose month">
                        <div class="panel-header">
                            <button type="button" class="nav-button" onclick={on_prev_year}>{"‹"}</button>
                            <span class="panel-title">{year}</span>
                            <button type="button" class="nav-button" onclick={on_next_year}>{"›"}</button>
                        </div>

                        <div class="month-grid">
                            {for months.iter().map(|month_date| {
                                let month_date = *month_date;
                                let is_selected = props.value
                                    .map(|value| value.year() == month_date.year()
                                        && value.month() == month_date.month())
                                    .unwrap_or(false);

                                let onclick = {
                                    let on_month_click = on_month_click.clone();
                                    Callback::from(move |_: MouseEvent| on_month_click.emit(month_date))
                                };

                                html! {
                                    <button
                                        type="button"
                                        class={classes!(
                                            "month-cell",
                                            is_selected.then(|| "selected"),
                                        )}
                                        onclick={onclick}
                                    >
                                        {month_name(month_date.month())}
                                    </button>
                                }
                            })}
                        </div>

                        <div class="panel-footer">
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
