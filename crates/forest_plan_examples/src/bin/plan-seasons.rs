use forest_plan::prelude::*;
use forest_plan_examples::{init_tracing, print_season_table};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut planner = Planner::try_new(PlannerConfig::new(Density::Medium).with_seed(2025))?;
    let base = planner.get_all_counts();

    // Seasons never remove a category entirely: every adjusted count is at least 1.
    print_season_table(&base);

    // An explicit override: exactly one bird, whatever the tier says.
    let mut quiet = Planner::try_new(
        PlannerConfig::new(Density::Dense)
            .with_seed(2025)
            .with_range_override(Category::Birds, 1, 1)
            .with_season(Season::Winter),
    )?;
    println!();
    println!("{}", quiet.plan().report());

    Ok(())
}
