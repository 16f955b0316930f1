#![allow(dead_code)]

pub const DEVICE_LIST: &str = r#"
{
    "status": true,
    "result": [
        {
            "id": "6391d5b1b1c5f20018e5a0b1",
            "name": "Cold room",
            "tags": [{"key": "type", "value": "sensor"}, {"key": "site", "value": "warehouse"}]
        },
        {
            "id": "6391d5b1b1c5f20018e5a0b2",
            "name": "Freezer",
            "tags": [{"key": "type", "value": "sensor"}]
        }
    ]
}
"#;

pub const ACCOUNT_INFO_NO_TIMEZONE: &str = r#"
{
    "status": true,
    "result": {
        "id": "5f1e2d3c4b5a697800112233",
        "name": "Acme Cold Chain",
        "email": "ops@acme.example"
    }
}
"#;

pub const TEMPERATURE_DATA: &str = r#"
{
    "status": true,
    "result": [
        {
            "id": "65a5084d9c1d2c0009a1b2c3",
            "variable": "temperature",
            "value": 23.5,
            "unit": "C",
            "device": "6391d5b1b1c5f20018e5a0b1",
            "time": "2024-01-15T10:30:00.000Z"
        }
    ]
}
"#;

pub const EMPTY_RESULT: &str = r#"{"status": true, "result": []}"#;

pub const DEVICE_PARAMS: &str = r#"
{
    "status": true,
    "result": [
        {"id": "65a50a1f2d3e4f0009c1d2e3", "key": "temperature", "value": "21.0", "sent": false},
        {"id": "65a50a1f2d3e4f0009c1d2e4", "key": "last_record_time", "value": "2024/01/14 09:00 PM", "sent": false}
    ]
}
"#;
