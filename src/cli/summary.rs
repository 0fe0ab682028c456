use clap::Parser;

use crate::{
    cli::dataset::DatasetArgs,
    core::summary::Summary,
    prelude::*,
    tables::{build_slots_table, build_summary_table},
};

#[derive(Parser)]
pub struct SummaryArgs {
    #[clap(flatten)]
    dataset: DatasetArgs,
}

impl SummaryArgs {
    pub fn run(&self) -> Result {
        let dataset = self.dataset.load()?;
        let summary: Summary = dataset.slots.iter().collect();
        println!("{}", build_slots_table(&dataset.slots));
        println!("{}", build_summary_table(&summary));
        Ok(())
    }
}
