use forest_plan::prelude::*;
use forest_plan_examples::{init_tracing, print_command_summary};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut planner = Planner::try_new(
        PlannerConfig::new(Density::Medium)
            .with_seed(7)
            .with_season(Season::Autumn),
    )?;
    let run = planner.plan();
    println!("{}", run.report());

    // Shorter timeline and more companions than the defaults.
    let populator = ForestPopulator::try_new(
        PopulateConfig::new()
            .with_frame_range(1, 120)
            .with_clustering(0.5, 2.0),
    )?;

    let mut scene = RecordingScene::new();
    let summary = match populator.run(&mut planner, &run.counts, &mut scene) {
        Ok(summary) => summary,
        Err(never) => match never {},
    };

    println!(
        "objects: {} | companions: {} | keyframes: {}",
        summary.objects, summary.clusters, summary.keyframes
    );
    print_command_summary(&scene);

    Ok(())
}
