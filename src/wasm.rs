use chrono::{DateTime, Utc};
use wasm_bindgen::prelude::*;

use crate::data::{ConfigError, Participant, WorkingHours};
use crate::schedule::{SlotSearch, DEFAULT_MAX_DAYS};
use crate::time::{SystemClock, TimeZoneClock, TzDatabaseClock};

fn config_err(err: ConfigError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn instant(epoch_ms: i64) -> Result<DateTime<Utc>, JsValue> {
    DateTime::from_timestamp_millis(epoch_ms)
        .ok_or_else(|| JsValue::from_str("timestamp out of range"))
}

/// The hour `epoch_ms` lands on in `timezone_id`'s wall clock.
#[wasm_bindgen(js_name = getLocalHour)]
pub fn get_local_hour(epoch_ms: i64, timezone_id: &str) -> Result<u32, JsValue> {
    TzDatabaseClock
        .local_hour(instant(epoch_ms)?, timezone_id)
        .map_err(config_err)
}

/// Medium date and short time rendering of `epoch_ms` in `timezone_id`.
#[wasm_bindgen(js_name = formatLocalDisplay)]
pub fn format_local_display(epoch_ms: i64, timezone_id: &str) -> Result<String, JsValue> {
    TzDatabaseClock
        .format_local(instant(epoch_ms)?, timezone_id)
        .map_err(config_err)
}

/// Earliest common slot for `participants` (an array of
/// `{ name, timezoneId }`), as epoch milliseconds, or `undefined` when the
/// scanned grid holds no common slot.
#[wasm_bindgen(js_name = findEarliestCommonSlot)]
pub fn find_earliest_common_slot(
    participants: JsValue,
    max_days: Option<u64>,
) -> Result<Option<i64>, JsValue> {
    let participants: Vec<Participant> = serde_wasm_bindgen::from_value(participants)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    let search = SlotSearch::new(participants, WorkingHours::default());
    let found = search
        .find_earliest_within(&SystemClock, max_days.unwrap_or(DEFAULT_MAX_DAYS))
        .map_err(config_err)?;

    Ok(found.map(|slot| slot.timestamp_millis()))
}
