use core::fmt::Write;

use heapless::String;

use crate::placeholder;
pub use crate::placeholder::{PLACEHOLDER_DEVICE_TOKEN, PLACEHOLDER_SERVER_HOST};

/// Capacity of the buffer returned by [`Config::broker_url`]
pub const BROKER_URL_MAX: usize = 128;

#[derive(Debug)]
pub enum Error {
    BrokerUrlTooLong,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    // Telemetry server (MQTT broker) hostname or IP address
    pub server_host: &'static str,

    // Telemetry server port (1883 for unencrypted MQTT)
    pub server_port: u16,

    // Per-device access token, sent as the MQTT username
    pub device_token: &'static str,

    // NTP server used to synchronize the device clock
    pub ntp_server: &'static str,

    // Offset from UTC in seconds
    pub gmt_offset_seconds: i64,

    // Additional offset while daylight saving is in effect, 0 if not observed
    pub daylight_offset_seconds: u32,

    // First hour (0-23) of the automatic control window
    pub auto_start_hour: u8,

    // Last hour (0-23) of the automatic control window
    pub auto_end_hour: u8,

    // Temperature at which the controlled load turns on
    pub temp_high: f32,

    // Temperature at which the controlled load turns off
    pub temp_low: f32,
}

impl Config {
    /// Values shipped in `cfg.toml.example`.
    pub const TEMPLATE: Config = Config {
        server_host: PLACEHOLDER_SERVER_HOST,
        server_port: 1883,
        device_token: PLACEHOLDER_DEVICE_TOKEN,
        ntp_server: "pool.ntp.org",
        gmt_offset_seconds: 8 * 3600,
        daylight_offset_seconds: 0,
        auto_start_hour: 8,
        auto_end_hour: 18,
        temp_high: 27.5,
        temp_low: 26.0,
    };

    /// Names of the fields that still hold template placeholders.
    pub fn placeholder_fields(&self) -> impl Iterator<Item = &'static str> {
        placeholder::placeholder_fields(self.server_host, self.device_token)
    }

    pub fn is_provisioned(&self) -> bool {
        self.placeholder_fields().next().is_none()
    }

    /// Broker address in the `mqtt://host:port` form.
    pub fn broker_url(&self) -> Result<String<BROKER_URL_MAX>, Error> {
        let mut url = String::new();
        write!(url, "mqtt://{}:{}", self.server_host, self.server_port)
            .map_err(|_| Error::BrokerUrlTooLong)?;
        Ok(url)
    }

    /// Logs the effective configuration. The device token is never printed.
    pub fn log_summary(&self) {
        log::info!(
            "Telemetry server {}:{}, NTP {} (UTC{:+}s, DST +{}s)",
            self.server_host,
            self.server_port,
            self.ntp_server,
            self.gmt_offset_seconds,
            self.daylight_offset_seconds
        );
        log::info!(
            "Auto window {:02}:00-{:02}:00, on above {:.1}, off below {:.1}",
            self.auto_start_hour,
            self.auto_end_hour,
            self.temp_high,
            self.temp_low
        );

        for field in self.placeholder_fields() {
            log::warn!("Config field {} still holds its template placeholder", field);
        }
    }
}

// config values are generated at compile time
include!(concat!(env!("OUT_DIR"), "/config.rs"));

pub const SERVER_HOST: &str = CONFIG.server_host;
pub const SERVER_PORT: u16 = CONFIG.server_port;
pub const DEVICE_TOKEN: &str = CONFIG.device_token;
pub const NTP_SERVER: &str = CONFIG.ntp_server;
pub const GMT_OFFSET_SECONDS: i64 = CONFIG.gmt_offset_seconds;
pub const DAYLIGHT_OFFSET_SECONDS: u32 = CONFIG.daylight_offset_seconds;
pub const AUTO_START_HOUR: u8 = CONFIG.auto_start_hour;
pub const AUTO_END_HOUR: u8 = CONFIG.auto_end_hour;
pub const TEMP_HIGH: f32 = CONFIG.temp_high;
pub const TEMP_LOW: f32 = CONFIG.temp_low;
