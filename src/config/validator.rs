//! Configuration validation

use super::*;
use crate::Result;

/// Largest accepted delay, in units
const MAX_DELAY_UNITS: u32 = 60;

/// Validate complete configuration
pub fn validate_config(config: &RunConfig) -> Result<()> {
    validate_locations(&config.locations)?;
    validate_generator(&config.generator)?;

    if let Some(label) = &config.output.elapsed_label {
        if label.trim().is_empty() {
            anyhow::bail!("output.elapsed_label must not be blank");
        }
    }

    Ok(())
}

/// Validate the location list
///
/// An empty list is valid: every strategy reports a total of 0.00.
pub fn validate_locations(locations: &[Location]) -> Result<()> {
    for (i, location) in locations.iter().enumerate() {
        if location.as_str().trim().is_empty() {
            anyhow::bail!("locations[{}] must not be blank", i);
        }
    }

    Ok(())
}

/// Validate generator settings
pub fn validate_generator(generator: &GeneratorConfig) -> Result<()> {
    if !generator.max_reading.is_finite() || generator.max_reading <= 0.0 {
        anyhow::bail!(
            "generator.max_reading must be a positive finite number, got {}",
            generator.max_reading
        );
    }

    if generator.max_delay_units > MAX_DELAY_UNITS {
        anyhow::bail!(
            "generator.max_delay_units must be at most {}, got {}",
            MAX_DELAY_UNITS,
            generator.max_delay_units
        );
    }

    Ok(())
}
