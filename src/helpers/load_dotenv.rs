use std::env;

use crate::constants::envvars;

// Runs before the logger is set up, since the .env may carry LOG_LEVEL
pub fn load_dotenv() {
    if dotenv::dotenv().is_ok() {
        println!("Loaded local .env")
    }
    // Also load the file named by $LASTVAL_DOTENV if set
    if let Ok(path) = env::var(envvars::DOTENV_PATH) {
        match dotenv::from_path(&path) {
            Ok(()) => println!("Loaded {path}"),
            Err(e) => eprintln!("Could not load {path}: {e}"),
        }
    }
}
