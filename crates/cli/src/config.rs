//! Loads [`CoreConfig`] from an optional TOML file, via the `config` crate.

use std::path::Path;

use codeloom_core::CoreConfig;

/// Builds a [`CoreConfig`], layering `path` (if given) over the compiled-in defaults.
/// A missing `--config` flag is not an error; the defaults stand alone.
pub fn load(path: Option<&Path>) -> anyhow::Result<CoreConfig> {
    let defaults = CoreConfig::default();
    let Some(path) = path else {
        return Ok(defaults);
    };

    let raw = config::Config::builder()
        .add_source(config::File::from(path))
        .build()?;
    let merged: CoreConfig = raw.try_deserialize().unwrap_or(defaults);
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn falls_back_to_defaults_without_a_path() {
        let config = load(None).unwrap();
        assert_eq!(config.max_file_size_bytes, CoreConfig::default().max_file_size_bytes);
    }

    #[test]
    fn overrides_from_a_toml_file() {
        let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "max_snippets_per_file = 42").unwrap();
        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.max_snippets_per_file, 42);
    }
}
