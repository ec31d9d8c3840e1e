use chrono::{Datelike, NaiveDate};
use datepicker_widgets::services::date_utils::{format_iso_date, format_month_year};
use datepicker_widgets::{DatePicker, DateRangePicker, MonthPicker, RangeValue};
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let selected_date = use_state(|| Option::<NaiveDate>::None);
    let selected_range = use_state(RangeValue::empty);
    let selected_month = use_state(|| Option::<NaiveDate>::None);

    let on_date_change = {
        let selected_date = selected_date.clone();
        Callback::from(move |value: Option<NaiveDate>| {
            selected_date.set(value);
        })
    };

    let on_range_change = {
        let selected_range = selected_range.clone();
        Callback::from(move |value: RangeValue| {
            selected_range.set(value);
        })
    };

    let on_month_change = {
        let selected_month = selected_month.clone();
        Callback::from(move |value: Option<NaiveDate>| {
            selected_month.set(value);
        })
    };

    let date_echo = match *selected_date {
        Some(date) => format_iso_date(date),
        None => "none".to_string(),
    };

    let range_echo = match (selected_range.start, selected_range.end) {
        (Some(start), Some(end)) => {
            format!("{} .. {}", format_iso_date(start), format_iso_date(end))
        }
        _ => "none".to_string(),
    };

    let month_echo = match *selected_month {
        Some(date) => format_month_year(date.year(), date.month()),
        None => "none".to_string(),
    };

    html! {
        <>
            <header class="header">
                <div class="container">
                    <h1>{"Date Picker Widgets"}</h1>
                </div>
            </header>

            <main class="main">
                <div class="container">
                    <section class="demo-section">
                        <h2>{"Single date"}</h2>
                        <DatePicker
                            value={*selected_date}
                            on_change={on_date_change}
                            placeholder={"Pick a date".to_string()}
                        />
                        <p class="echo">{format!("Selected: {}", date_echo)}</p>
                    </section>

                    <section class="demo-section">
                        <h2>{"Date range"}</h2>
                        <DateRangePicker
                            value={*selected_range}
                            on_change={on_range_change}
                            start_placeholder={"Start".to_string()}
                            end_placeholder={"End".to_string()}
                        />
                        <p class="echo">{format!("Selected: {}", range_echo)}</p>
                    </section>

                    <section class="demo-section">
                        <h2>{"Month"}</h2>
                        <MonthPicker
                            value={*selected_month}
                            on_change={on_month_change}
                            placeholder={"Pick a month".to_string()}
                        />
                        <p class="echo">{format!("Selected: {}", month_echo)}</p>
                    </section>
                </div>
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
