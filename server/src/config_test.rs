use super::*;
use time::macros::offset;

/// # Safety
/// Only `from_env_reads_defaults_and_overrides` touches these variables.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("DASHBOARD_UTC_OFFSET");
    }
}

#[test]
fn from_env_reads_defaults_and_overrides() {
    unsafe { clear_server_env() };
    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg, ServerConfig { port: DEFAULT_PORT, utc_offset: UtcOffset::UTC });

    unsafe {
        std::env::set_var("PORT", "8080");
        std::env::set_var("DASHBOARD_UTC_OFFSET", "-05:30");
    }
    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.utc_offset, offset!(-5:30));

    unsafe { std::env::set_var("PORT", "not-a-port") };
    assert_eq!(ServerConfig::from_env().unwrap_err(), ConfigError::InvalidPort("not-a-port".into()));

    unsafe { clear_server_env() };
}

#[test]
fn parse_port_defaults_when_unset() {
    assert_eq!(parse_port(None), Ok(3000));
}

#[test]
fn parse_port_trims_whitespace() {
    assert_eq!(parse_port(Some(" 4000 ")), Ok(4000));
}

#[test]
fn parse_port_rejects_zero_and_overflow() {
    assert_eq!(parse_port(Some("0")), Err(ConfigError::InvalidPort("0".into())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".into())));
}

#[test]
fn parse_utc_offset_accepts_utc_aliases() {
    assert_eq!(parse_utc_offset(None), Ok(UtcOffset::UTC));
    assert_eq!(parse_utc_offset(Some("Z")), Ok(UtcOffset::UTC));
    assert_eq!(parse_utc_offset(Some("utc")), Ok(UtcOffset::UTC));
    assert_eq!(parse_utc_offset(Some("  ")), Ok(UtcOffset::UTC));
}

#[test]
fn parse_utc_offset_parses_signed_hours_and_minutes() {
    assert_eq!(parse_utc_offset(Some("+02:00")), Ok(offset!(+2)));
    assert_eq!(parse_utc_offset(Some("-09:30")), Ok(offset!(-9:30)));
}

#[test]
fn parse_utc_offset_rejects_malformed_values() {
    assert_eq!(parse_utc_offset(Some("02:00")), Err(ConfigError::InvalidUtcOffset("02:00".into())));
    assert_eq!(parse_utc_offset(Some("+2")), Err(ConfigError::InvalidUtcOffset("+2".into())));
    assert_eq!(parse_utc_offset(Some("Europe/Paris")), Err(ConfigError::InvalidUtcOffset("Europe/Paris".into())));
}

#[test]
fn site_addr_binds_all_interfaces_on_configured_port() {
    let cfg = ServerConfig { port: 8080, utc_offset: UtcOffset::UTC };
    assert_eq!(cfg.site_addr().to_string(), "0.0.0.0:8080");
    assert_eq!(cfg.site_addr().port(), 8080);
}
