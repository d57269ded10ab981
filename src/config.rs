use log::Level;

pub const EMBLEM_URL: &str =
    "https://cdn.poehali.dev/files/774d25c2-edf6-45a9-906f-8b7c855eaf09.png";

// Matches the scroll-margin on every section so anchors land under the sticky header.
pub const HEADER_OFFSET_PX: f64 = 96.0;

pub const TOAST_DURATION_MS: u32 = 4_000;

// How long a nav click keeps its highlight before scroll-spy takes over again.
pub const NAV_SETTLE_MS: u32 = 1_200;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
