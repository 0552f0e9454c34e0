use std::path::PathBuf;

/// Environment variable overriding where `render` writes its image.
pub const OUTPUT_PATH_VAR: &str = "NEWTON_OUTPUT";

pub const DEFAULT_OUTPUT_PATH: &str = "out.png";

/// Loads a `.env` file from the working directory, if there is one.
///
/// Must run before `logger::init` so `RUST_LOG` set there is honoured.
pub fn init() {
    dotenv::dotenv().ok();
}

pub fn output_path() -> PathBuf {
    match std::env::var(OUTPUT_PATH_VAR) {
        Ok(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_OUTPUT_PATH),
    }
}
