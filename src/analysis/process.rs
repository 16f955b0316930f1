use chrono_tz::Tz;

use crate::constants::keys;
use crate::helpers::format_record_time;
use crate::interfaces::http_api::{ApiClient, ApiError, DataQuery};

use super::models::{value_to_param_string, DeviceRef};
use super::params::{get_param, with_value};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Temperature and last record time parameters were written
    Updated,
    /// The device has no temperature reading
    NoData,
    /// Readings came back, but none for the temperature variable
    NoMatchingVariable,
}

/// Copy the last temperature reading of a device into its configuration parameters
pub fn process_device(
    resources: &ApiClient,
    device: &DeviceRef,
    timezone: Tz,
) -> Result<Outcome, ApiError> {
    log::info!("Processing Device {} - ID {}", device.name, device.id);

    let data = resources.get_device_data(
        &device.id,
        &DataQuery {
            variables: vec![keys::TEMPERATURE.into()],
            query: keys::LAST_VALUE_QUERY.into(),
        },
    )?;
    if data.is_empty() {
        log::info!("No data found for {} - ID {}", device.name, device.id);
        return Ok(Outcome::NoData);
    }

    let device_params = resources.get_device_params(&device.id)?;

    let Some(temperature) = data.iter().find(|d| d.variable == keys::TEMPERATURE) else {
        return Ok(Outcome::NoMatchingVariable);
    };

    let temperature_param = get_param(&device_params, keys::TEMPERATURE);
    let last_record_param = get_param(&device_params, keys::LAST_RECORD_TIME);
    let time_string = format_record_time(temperature.time, timezone);

    resources.set_device_params(
        &device.id,
        &[
            with_value(temperature_param, value_to_param_string(&temperature.value)),
            with_value(last_record_param, time_string),
        ],
    )?;
    log::debug!("Updated parameters of device {}", device.id);

    Ok(Outcome::Updated)
}
