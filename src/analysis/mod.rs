//! Sensor last-value analysis
//!
//! For every device tagged as a sensor, copies the last `temperature` reading
//! into the device's `temperature` and `last_record_time` configuration
//! parameters. Devices are processed by a fixed pool of worker threads.
use anyhow::Result;
use serde_json::Value;

use crate::constants::{defaults, keys};
use crate::helpers::parse_timezone;
use crate::interfaces::http_api::DeviceListQuery;

pub mod context;
pub mod models;
pub mod params;
pub mod process;
pub mod work_queue;

pub use context::{Context, EnvVar};
pub use process::{process_device, Outcome};
pub use work_queue::{PoolStats, WorkItem};

use models::{DeviceRef, Tag};

pub fn sensor_device_query() -> DeviceListQuery {
    DeviceListQuery {
        amount: defaults::DEVICE_LIST_AMOUNT,
        fields: keys::DEVICE_FIELDS.iter().map(|f| f.to_string()).collect(),
        tags: vec![Tag::new(keys::DEVICE_TYPE_TAG, keys::SENSOR_TAG_VALUE)],
    }
}

/// Run the analysis once: list sensors, then process each on the worker pool.
///
/// Failing to list devices or to read the account fails the run; a failure on
/// one device is logged and only skips that device.
pub fn run(context: &Context, scope: &[Value]) -> Result<PoolStats> {
    log::debug!("Analysis triggered with {} scope entries", scope.len());

    let devices = context.resources.list_devices(&sensor_device_query())?;
    log::info!("Found {} sensor device(s)", devices.len());

    let account = context.account.get_account_info()?;
    let timezone = parse_timezone(account.timezone.as_deref());
    log::debug!("Formatting record times in {}", timezone.name());

    let items: Vec<WorkItem> = devices
        .into_iter()
        .map(|device| WorkItem {
            device: DeviceRef::from(device),
            timezone,
        })
        .collect();

    let stats = work_queue::drain(
        items,
        defaults::WORKER_COUNT,
        defaults::QUEUE_CAPACITY,
        |item: &WorkItem| {
            process_device(&context.resources, &item.device, item.timezone).map(|_| ())
        },
    )?;

    log::info!(
        "Finished processing devices: {} processed, {} failed",
        stats.processed,
        stats.failed
    );
    Ok(stats)
}
