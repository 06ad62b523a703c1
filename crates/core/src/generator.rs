use crate::config::GeneratorConfig;
use crate::models::{ImportStrategy, ModuleSelection};
use crate::registry::{CoreRegistry, RegistryError};
use crate::render::render;
use std::fs;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Registry error: {0}")]
    RegistryError(#[from] RegistryError),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A fully computed module map, ready to be written
#[derive(Debug, Clone)]
pub struct GeneratedMap {
    /// Final sorted name list the map covers
    pub names: Vec<String>,
    /// Strategy the source was rendered with
    pub strategy: ImportStrategy,
    /// Rendered TypeScript source
    pub source: String,
    /// Version of the host registry the map was built against
    pub registry_version: String,
}

/// Drives one generator run: registry → set algebra → rendered source.
///
/// Computation and the file write are separate steps so that a failure
/// anywhere in the pipeline leaves the previous output untouched.
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Compute the module map without touching the output file
    pub fn generate(&self) -> Result<GeneratedMap, GenerateError> {
        // 1. Read the core singleton names from the host registry
        let registry = CoreRegistry::load(&self.config.registry_path)?;

        // 2. Combine the three sets and resolve to the sorted name list
        let selection = ModuleSelection::new(
            registry.singletons,
            self.config.extra_modules.iter().cloned(),
            self.config.ignored_modules.iter().cloned(),
        );
        let names = selection.resolve();

        // 3. Render through the configured strategy
        let source = render(&names, self.config.strategy);

        Ok(GeneratedMap {
            names,
            strategy: self.config.strategy,
            source,
            registry_version: registry.version,
        })
    }

    /// Overwrite the configured output path with the rendered source
    pub fn write(&self, map: &GeneratedMap) -> Result<(), GenerateError> {
        fs::write(&self.config.output_path, &map.source)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::{NamedTempFile, TempDir};

    const MANIFEST: &str = r#"{
        "name": "@playground/app",
        "version": "3.4.2",
        "jupyterlab": {
            "singletonPackages": [
                "@jupyterlab/application",
                "@lumino/widgets",
                "react",
                "yjs"
            ]
        }
    }"#;

    fn manifest_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(MANIFEST.as_bytes()).unwrap();
        file
    }

    fn config_for(file: &NamedTempFile) -> GeneratorConfig {
        GeneratorConfig::new(file.path().to_path_buf())
    }

    #[test]
    fn test_generate_resolves_and_reports_version() {
        let file = manifest_file();
        let map = Generator::new(config_for(&file)).generate().unwrap();

        assert_eq!(map.registry_version, "3.4.2");
        // Core plus the built-in extras, minus the built-in ignores.
        assert!(map.names.contains(&"@jupyterlab/application".to_string()));
        assert!(map.names.contains(&"@lumino/datagrid".to_string()));
        assert!(!map.names.iter().any(|n| n == "yjs"));

        let mut sorted = map.names.clone();
        sorted.sort();
        assert_eq!(map.names, sorted);
    }

    #[test]
    fn test_generate_is_idempotent() {
        let file = manifest_file();
        let first = Generator::new(config_for(&file)).generate().unwrap();
        let second = Generator::new(config_for(&file)).generate().unwrap();
        assert_eq!(first.source, second.source);
    }

    #[test]
    fn test_extra_name_also_ignored_stays_out() {
        let file = manifest_file();
        let config = config_for(&file)
            .with_extra_modules(vec!["doomed".to_string()])
            .with_ignored_modules(vec!["doomed".to_string()]);
        let map = Generator::new(config).generate().unwrap();
        assert!(!map.names.iter().any(|n| n == "doomed"));
    }

    #[test]
    fn test_write_overwrites_output() {
        let file = manifest_file();
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("modules.ts");
        fs::write(&output, "stale content").unwrap();

        let generator =
            Generator::new(config_for(&file).with_output_path(output.clone()));
        let map = generator.generate().unwrap();
        generator.write(&map).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(written, map.source);
        assert!(written.starts_with("export const modules = {"));
    }

    #[test]
    fn test_missing_registry_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("modules.ts");

        let config = GeneratorConfig::new(PathBuf::from("/nonexistent/package.json"))
            .with_output_path(output.clone());
        let err = Generator::new(config).generate().unwrap_err();

        assert!(matches!(err, GenerateError::RegistryError(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_eager_strategy_end_to_end() {
        let file = manifest_file();
        let config = config_for(&file).with_strategy(ImportStrategy::Eager);
        let map = Generator::new(config).generate().unwrap();

        assert!(map
            .source
            .contains("import * as lumino_widgets from '@lumino/widgets';"));
        assert!(map.source.contains("'@lumino/widgets': lumino_widgets"));
    }
}
