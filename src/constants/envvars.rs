pub const ACCOUNT_TOKEN: &str = "ACCOUNT_TOKEN";
pub const ANALYSIS_DATA: &str = "T_ANALYSIS_DATA";
pub const ANALYSIS_ENV: &str = "T_ANALYSIS_ENV";
pub const ANALYSIS_TOKEN: &str = "T_ANALYSIS_TOKEN";
pub const API_BASE_URL: &str = "TAGOIO_API";

pub const LOG_LEVEL: &str = "LOG_LEVEL";
pub const DOTENV_PATH: &str = "LASTVAL_DOTENV";
