use clap::Parser;

use crate::{
    cli::dataset::DatasetArgs,
    core::recommendation::recommend,
    prelude::*,
    tables::build_recommendations_table,
};

#[derive(Parser)]
pub struct RecommendArgs {
    #[clap(flatten)]
    dataset: DatasetArgs,
}

impl RecommendArgs {
    pub fn run(&self) -> Result {
        let dataset = self.dataset.load()?;
        let recommendations = recommend(&dataset.tasks, &dataset.slots);
        info!(n_recommendations = recommendations.len(), "recommended");
        println!("{}", build_recommendations_table(&recommendations));
        Ok(())
    }
}
