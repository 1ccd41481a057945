use crate::adapters::fs::{FixtureDir, TempRoot};
use crate::adapters::listing::{FsLister, GcsLister};
use crate::app::config::TestkitConfig;
use crate::domain::dataset::DatasetRef;
use crate::domain::ports::FileLister;
use anyhow::{Context as _, Result, bail};
use std::path::Path;

/// Print the files in a fixture directory, one per line.
pub fn list_fixtures(config: &TestkitConfig, dir: Option<&Path>) -> Result<()> {
    let fixtures = match (dir, &config.test_data_dir) {
        (Some(dir), _) => FixtureDir::new(dir),
        (None, Some(dir)) => FixtureDir::new(dir),
        (None, None) => bail!("No fixture directory given and none configured"),
    };
    if !fixtures.exists() {
        bail!("Fixture directory not found: {}", fixtures.path().display());
    }

    println!("Fixtures in {}:", fixtures.path().display());
    for name in fixtures.entries()? {
        println!("  {}", name);
    }
    Ok(())
}

/// List a dataset's files with the real lister, or a local mirror.
pub fn list_dataset(
    config: &TestkitConfig,
    dataset: &DatasetRef,
    mirror: Option<&Path>,
    json: bool,
) -> Result<()> {
    let lister: Box<dyn FileLister> = match mirror {
        Some(root) => Box::new(FsLister::new(root)),
        None => Box::new(GcsLister::new(config.gcs.clone())),
    };
    let files = lister
        .list(dataset)
        .with_context(|| format!("Failed to list files for dataset {}", dataset))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&files)?);
        return Ok(());
    }

    println!("Files for {} ({}):", dataset, lister.name());
    println!("{}", "=".repeat(80));
    for file in &files {
        match file.size {
            Some(size) => println!("{:>12}  {}", size, file.path),
            None => println!("{:>12}  {}", "-", file.path),
        }
    }
    println!("\n{} file(s)", files.len());
    Ok(())
}

/// Create a scratch directory that outlives the process and print its path.
pub fn make_scratch(config: &TestkitConfig) -> Result<()> {
    let scratch = match &config.temp_root {
        Some(root) => TempRoot::at(root)?.scratch(true)?,
        None => TempRoot::process()?.scratch(true)?,
    };
    println!("{}", scratch.path().display());
    Ok(())
}

pub fn show_config(config: &TestkitConfig) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
