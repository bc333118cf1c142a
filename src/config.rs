use std::ffi::OsString;
use std::path::PathBuf;

/// Dataset loaded at startup when no path is given on the command line.
pub const DEFAULT_DATA_FILE: &str = "spacex_launch_dash.csv";

/// Granularity of the payload range slider, in kg.
pub const DEFAULT_PAYLOAD_STEP: f64 = 1000.0;

// ---------------------------------------------------------------------------
// Startup configuration
// ---------------------------------------------------------------------------

/// Settings for the desktop front-end. The data core takes none of these.
#[derive(Debug, Clone, PartialEq)]
pub struct DashConfig {
    /// File read once at startup.
    pub data_path: PathBuf,
    /// Step of the payload sliders (kg).
    pub payload_step: f64,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            payload_step: DEFAULT_PAYLOAD_STEP,
            window_size: [1200.0, 900.0],
            min_window_size: [600.0, 400.0],
        }
    }
}

impl DashConfig {
    /// Build a config from command-line arguments (program name already
    /// stripped). The only recognised argument is an optional dataset path;
    /// anything after it is ignored with a warning.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        if let Some(path) = args.next() {
            config.data_path = PathBuf::from(path);
        }
        let extra: Vec<OsString> = args.collect();
        if !extra.is_empty() {
            log::warn!("Ignoring extra arguments: {extra:?}");
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_dashboard() {
        let config = DashConfig::default();
        assert_eq!(config.data_path, PathBuf::from("spacex_launch_dash.csv"));
        assert_eq!(config.payload_step, 1000.0);
    }

    #[test]
    fn positional_argument_overrides_data_path() {
        let config = DashConfig::from_args(vec![OsString::from("launches.parquet")]);
        assert_eq!(config.data_path, PathBuf::from("launches.parquet"));
        assert_eq!(config.payload_step, DEFAULT_PAYLOAD_STEP);
    }

    #[test]
    fn no_arguments_keeps_defaults() {
        assert_eq!(DashConfig::from_args(Vec::new()), DashConfig::default());
    }

    #[test]
    fn extra_arguments_are_ignored() {
        let config = DashConfig::from_args(vec![
            OsString::from("a.csv"),
            OsString::from("b.csv"),
        ]);
        assert_eq!(config.data_path, PathBuf::from("a.csv"));
    }
}
