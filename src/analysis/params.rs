use super::models::Parameter;

/// Find the parameter with the given key, or an unset placeholder if the
/// device does not carry it yet
pub fn get_param(params: &[Parameter], key: &str) -> Parameter {
    params
        .iter()
        .find(|p| p.key == key)
        .cloned()
        .unwrap_or_else(|| Parameter::unset(key))
}

/// Upsert entry for `param`: same record (id, key, sent flag), new value
pub fn with_value(param: Parameter, value: impl Into<String>) -> Parameter {
    Parameter {
        value: value.into(),
        ..param
    }
}
