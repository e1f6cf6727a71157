// SPDX-License-Identifier: MPL-2.0
//! Time display formatting for the progress readout.

const SECS_PER_HOUR: u64 = 3600;
const SECS_PER_MINUTE: u64 = 60;

/// Formats a seconds count as `HH:MM:SS`.
///
/// Fractional seconds are truncated. Negative, `NaN`, and infinite inputs
/// render as `00:00:00` so unknown metadata never leaks into the display.
///
/// # Examples
///
/// ```
/// use media_controls::video_player::time_format::format_hms;
///
/// assert_eq!(format_hms(0.0), "00:00:00");
/// assert_eq!(format_hms(125.9), "00:02:05");
/// assert_eq!(format_hms(3665.0), "01:01:05");
/// ```
#[must_use]
pub fn format_hms(seconds: f64) -> String {
    let total_secs = if seconds.is_finite() {
        seconds.max(0.0) as u64
    } else {
        0
    };
    let hours = total_secs / SECS_PER_HOUR;
    let minutes = (total_secs % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let secs = total_secs % SECS_PER_MINUTE;

    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}
