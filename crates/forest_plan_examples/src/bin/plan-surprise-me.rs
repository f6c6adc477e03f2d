use forest_plan::prelude::*;
use forest_plan_examples::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Entropy seed and a random density tier; the seed is still reported.
    let mut planner = Planner::random();
    let run = planner.plan();
    println!("{}", run.report());

    // Replaying with the recorded seed and tier reproduces the counts.
    let mut replay =
        Planner::try_new(PlannerConfig::new(run.density).with_seed(planner.seed()))?;
    let replayed = replay.plan();
    anyhow::ensure!(replayed.counts == run.counts, "replay diverged");
    println!("Replay with seed {} matches.", planner.seed());

    Ok(())
}
