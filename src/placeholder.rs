//! Placeholder literals shipped in `cfg.toml.example`.
//!
//! Shared with the build script, which warns when an active configuration
//! still carries them.

/// Telemetry server host in the committed template
pub const PLACEHOLDER_SERVER_HOST: &str = "YOUR_SERVER_IP_HERE";

/// Device token in the committed template
pub const PLACEHOLDER_DEVICE_TOKEN: &str = "YOUR_DEVICE_TOKEN_HERE";

/// Names of the fields whose values still equal the template placeholders.
pub fn placeholder_fields(server_host: &str, device_token: &str) -> impl Iterator<Item = &'static str> {
    [
        ("server_host", server_host == PLACEHOLDER_SERVER_HOST),
        ("device_token", device_token == PLACEHOLDER_DEVICE_TOKEN),
    ]
    .into_iter()
    .filter_map(|(name, is_placeholder)| is_placeholder.then_some(name))
}
