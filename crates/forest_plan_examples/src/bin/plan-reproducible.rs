use forest_plan::prelude::*;
use forest_plan_examples::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Same seed, same forest: run this twice and compare the output.
    let config = PlannerConfig::new(Density::Sparse).with_seed(42);
    let mut planner = Planner::try_new(config)?;
    let run = planner.plan();
    println!("{}", run.report());

    // A handful of transforms from the same stream.
    for i in 0..3 {
        let t = planner.random_transform();
        println!(
            "tree {i}: pos=({:.2}, {:.2}) height={:.2} scale={:.2} rot={:.3} rad",
            t.position.x, t.position.y, t.height, t.scale, t.rotation
        );
    }

    Ok(())
}
