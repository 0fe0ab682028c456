use std::path::PathBuf;

use clap::Parser;

use crate::{dataset::Dataset, prelude::*};

#[derive(Parser)]
pub struct DatasetArgs {
    /// TOML file with the `slots` and `tasks` arrays. The built-in demo day is used when omitted.
    #[clap(long = "dataset", env = "DATASET_PATH")]
    path: Option<PathBuf>,
}

impl DatasetArgs {
    pub fn load(&self) -> Result<Dataset> {
        match &self.path {
            Some(path) => Dataset::read_from(path),
            None => {
                info!("using the demo dataset");
                Ok(Dataset::default())
            }
        }
    }
}
