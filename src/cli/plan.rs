use std::path::PathBuf;

use clap::Parser;
use enumset::EnumSet;

use crate::{
    auth::{FileStorage, Session},
    cli::dataset::DatasetArgs,
    core::{
        allocation::allocate,
        ledger::{Ledger, ScheduledTask},
        task::TaskKind,
    },
    prelude::*,
    tables::{build_allocation_table, build_ledger_table, build_slots_table, build_unassigned_table},
};

#[derive(Parser)]
pub struct PlanArgs {
    #[clap(flatten)]
    dataset: DatasetArgs,

    /// Only plan the tasks of these types.
    #[clap(
        long = "kinds",
        env = "TASK_KINDS",
        value_delimiter = ',',
        num_args = 1..,
        default_value = "low,medium,high",
    )]
    kinds: Vec<TaskKind>,

    /// Manually put a task into a slot, as `TIME=TASK`. Repeatable.
    #[clap(long = "schedule")]
    schedule: Vec<ScheduledTask>,

    /// Storage file of the signed-in session, see `auth`.
    #[clap(long = "auth-store", env = "AUTH_STORE_PATH", default_value = "powerplan-auth.json")]
    auth_store: PathBuf,
}

impl PlanArgs {
    fn kinds(&self) -> EnumSet<TaskKind> {
        self.kinds.iter().copied().collect()
    }

    pub fn run(&self) -> Result {
        let session = Session::restore(&FileStorage::open(&self.auth_store)?)?;
        match session.user() {
            Some(user) => info!(username = %user.username, "welcome back"),
            None => info!("not signed in"),
        }

        let mut dataset = self.dataset.load()?;
        dataset.retain_kinds(self.kinds());

        let allocation = allocate(&dataset.tasks, &dataset.slots);
        info!(
            n_tasks = dataset.tasks.len(),
            n_assigned = allocation.n_assigned_tasks(),
            "planned"
        );
        println!("{}", build_slots_table(&dataset.slots));
        println!("{}", build_allocation_table(&allocation));
        if !allocation.unassigned.is_empty() {
            println!("{}", build_unassigned_table(&allocation.unassigned));
        }

        let ledger: Ledger = self.schedule.iter().cloned().collect();
        if !ledger.is_empty() {
            info!(n_entries = ledger.len(), "manually scheduled");
            println!("{}", build_ledger_table(&ledger));
        }
        Ok(())
    }
}
