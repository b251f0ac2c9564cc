use super::*;
use time::macros::{datetime, offset};

#[test]
fn afternoon_formats_as_medium_date_short_time() {
    let ts = RefreshTimestamp::from_datetime(datetime!(2026-10-18 15:04 UTC));
    assert_eq!(ts.display(), "Oct 18, 2026, 3:04 PM");
    assert_eq!(ts.machine(), "2026-10-18T15:04:00Z");
}

#[test]
fn midnight_uses_twelve_hour_clock() {
    let ts = RefreshTimestamp::from_datetime(datetime!(2026-01-02 0:30 UTC));
    assert_eq!(ts.display(), "Jan 2, 2026, 12:30 AM");
}

#[test]
fn morning_hour_is_not_padded() {
    let ts = RefreshTimestamp::from_datetime(datetime!(2026-03-09 9:05 UTC));
    assert_eq!(ts.display(), "Mar 9, 2026, 9:05 AM");
}

#[test]
fn non_utc_offset_keeps_local_wall_time() {
    let ts = RefreshTimestamp::from_datetime(datetime!(2026-10-18 15:04 +2));
    assert_eq!(ts.display(), "Oct 18, 2026, 3:04 PM");
    assert_eq!(ts.machine(), "2026-10-18T15:04:00+02:00");
}

#[test]
fn machine_form_falls_back_when_rfc3339_rejects_offset() {
    // RFC 3339 cannot express offsets with a seconds component.
    let odd = UtcOffset::from_hms(1, 0, 30).unwrap();
    let at = datetime!(2026-10-18 15:04 UTC).to_offset(odd);
    let ts = RefreshTimestamp::from_datetime(at);
    assert_eq!(ts.machine(), at.to_string());
    assert!(!ts.display().is_empty());
}

#[test]
fn capture_reads_clock_in_requested_offset() {
    let ts = RefreshTimestamp::capture(offset!(UTC));
    assert!(ts.machine().ends_with('Z'));
    assert!(ts.display().ends_with("AM") || ts.display().ends_with("PM"));
}
