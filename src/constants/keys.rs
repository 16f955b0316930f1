// Variable and parameter keys
pub const TEMPERATURE: &str = "temperature";
pub const LAST_RECORD_TIME: &str = "last_record_time";

// Analysis environment entries
pub const ACCOUNT_TOKEN: &str = "account_token";

// Device list tag filter
pub const DEVICE_TYPE_TAG: &str = "type";
pub const SENSOR_TAG_VALUE: &str = "sensor";

// Device list fields
pub const DEVICE_FIELDS: &[&str] = &["id", "name", "tags"];

pub const LAST_VALUE_QUERY: &str = "last_value";
