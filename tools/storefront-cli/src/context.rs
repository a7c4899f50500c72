//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use storefront_catalog::catalog::{CatalogIndex, CatalogStore};
use storefront_catalog::{Currency, Money};
use storefront_data::{ByteSource, FileSource, HttpSource};

use crate::config::{StorefrontConfig, DEFAULT_CATALOG_PATH};
use crate::output::Output;

/// Config file names searched for, in order, from the working directory up.
const CONFIG_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Global flags that pick the config file and the catalog source.
#[derive(Debug, Default)]
pub struct SourceOverrides {
    pub config: Option<String>,
    pub source: Option<String>,
    pub url: Option<String>,
}

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: StorefrontConfig,
    /// Output handler.
    pub output: Output,
    store: CatalogStore,
}

impl Context {
    /// Load config and wire up the catalog store. Nothing is fetched yet.
    pub fn load(overrides: &SourceOverrides, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = overrides.config.as_deref() {
            StorefrontConfig::load(path)?
        } else {
            Self::find_config(&cwd).unwrap_or_default()
        };

        let source = Self::byte_source(&config, overrides, &cwd)?;
        let store = CatalogStore::from_source(source);

        Ok(Self {
            config,
            output,
            store,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<StorefrontConfig> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match StorefrontConfig::load(&config_path) {
                        Ok(config) => return Some(config),
                        Err(e) => tracing::warn!(path = %config_path.display(), error = %e, "skipping unreadable config"),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Pick the catalog source: flags first, then config, then the default path.
    fn byte_source(
        config: &StorefrontConfig,
        overrides: &SourceOverrides,
        cwd: &Path,
    ) -> Result<Arc<dyn ByteSource>> {
        let url = overrides.url.as_ref().or(if overrides.source.is_some() {
            None
        } else {
            config.source.url.as_ref()
        });

        if let Some(url) = url {
            let source = HttpSource::with_policy(url.as_str(), config.fetch.policy())
                .with_context(|| format!("Failed to create HTTP client for {}", url))?;
            return Ok(Arc::new(source));
        }

        let path = overrides
            .source
            .as_deref()
            .or(config.source.path.as_deref())
            .unwrap_or(DEFAULT_CATALOG_PATH);
        Ok(Arc::new(FileSource::new(resolve_path(cwd, path))))
    }

    /// Load the catalog once, showing a spinner while it is read.
    pub async fn catalog(&self) -> Result<Arc<CatalogIndex>> {
        let location = self.store.source_description();
        let spinner = self.output.spinner(&format!("Loading catalog from {}", location));
        let result = self.store.load().await;
        spinner.finish_and_clear();

        let index = result.with_context(|| format!("Failed to load catalog from {}", location))?;
        let stats = index.stats();
        self.output.debug(&format!(
            "{} rows, {} products, {} duplicate ids overwritten",
            stats.rows, stats.unique, stats.duplicates_overwritten
        ));
        Ok(index)
    }

    /// Currency used for all formatted prices.
    pub fn currency(&self) -> Result<Currency> {
        self.config.storefront.currency()
    }

    /// Flat checkout delivery charge.
    pub fn delivery_charge(&self) -> Result<Money> {
        self.config.storefront.delivery_charge()
    }

    /// Base path for product images.
    pub fn asset_base(&self) -> &str {
        &self.config.storefront.asset_base
    }
}

/// Resolve a path relative to the working directory.
fn resolve_path(cwd: &Path, path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SourceConfig;

    fn describe(config: &StorefrontConfig, overrides: &SourceOverrides) -> String {
        Context::byte_source(config, overrides, Path::new("/srv/shop"))
            .unwrap()
            .describe()
    }

    #[test]
    fn test_default_source_path() {
        let described = describe(&StorefrontConfig::default(), &SourceOverrides::default());
        assert_eq!(described, "/srv/shop/data/product_catalog_v2.csv");
    }

    #[test]
    fn test_config_url_and_flag_precedence() {
        let config = StorefrontConfig {
            source: SourceConfig {
                path: Some("exports/catalog.csv".to_string()),
                url: Some("http://localhost:3000/data/product_catalog_v2.csv".to_string()),
            },
            ..StorefrontConfig::default()
        };

        assert_eq!(
            describe(&config, &SourceOverrides::default()),
            "http://localhost:3000/data/product_catalog_v2.csv"
        );

        let local = SourceOverrides {
            source: Some("/tmp/catalog.csv".to_string()),
            ..SourceOverrides::default()
        };
        assert_eq!(describe(&config, &local), "/tmp/catalog.csv");

        let remote = SourceOverrides {
            url: Some("http://127.0.0.1:8080/catalog.csv".to_string()),
            ..SourceOverrides::default()
        };
        assert_eq!(describe(&config, &remote), "http://127.0.0.1:8080/catalog.csv");
    }

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("storefront.toml"),
            "[storefront]\ncurrency = \"GBP\"\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = Context::find_config(&nested).unwrap();
        assert_eq!(config.storefront.currency().unwrap(), Currency::GBP);
    }

    #[cfg(unix)]
    #[test]
    fn test_find_config_through_non_utf8_dir() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("storefront.toml"),
            "[storefront]\ncurrency = \"GBP\"\n",
        )
        .unwrap();
        let nested = dir.path().join(OsStr::from_bytes(b"shop-\xff")).join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = Context::find_config(&nested).unwrap();
        assert_eq!(config.storefront.currency().unwrap(), Currency::GBP);
    }
}
