use std::time::Duration;

pub const API_BASE_URL: &str = "https://api.tago.io";
pub const API_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
pub const LOG_LEVEL: &str = "info";

pub const TIMEZONE: &str = "America/New_York";

pub const DEVICE_LIST_AMOUNT: u32 = 500;
pub const QUEUE_CAPACITY: usize = 9999;
pub const WORKER_COUNT: usize = 5;
