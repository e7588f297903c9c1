//! Config mode
//!
//! Writes a sample configuration to stdout or to a file.

use crate::config::StaticConfig;
use crate::errors::Result;

/// Generate a sample `config.toml`
pub fn generate_config(output: Option<&str>) -> Result<()> {
    match output {
        Some(path) => {
            StaticConfig::default().save_to_file(path)?;
            println!("Sample configuration written to {}", path);
        }
        None => print!("{}", StaticConfig::generate_sample_config()?),
    }
    Ok(())
}
