//! Browser-backed notification sink and clock

use chrono::{NaiveDate, NaiveDateTime};
use shared::{Clock, NotificationSink, ViewEvent};
use wasm_bindgen::JsValue;

/// `window.alert` for confirmations, `console.log` for diagnostics
#[derive(Debug, Default)]
pub struct BrowserSink;

impl NotificationSink for BrowserSink {
    fn alert(&mut self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn notify(&mut self, event: &ViewEvent) {
        web_sys::console::log_1(&JsValue::from_str(&event.to_string()));
    }
}

/// Local time from the JS `Date` object
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now(&self) -> NaiveDateTime {
        let d = js_sys::Date::new_0();
        NaiveDate::from_ymd_opt(d.get_full_year() as i32, d.get_month() + 1, d.get_date())
            .and_then(|date| date.and_hms_opt(d.get_hours(), d.get_minutes(), d.get_seconds()))
            .unwrap_or_default()
    }
}
