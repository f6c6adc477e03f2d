use std::collections::BTreeMap;

use forest_plan::prelude::*;

/// Print how many host calls of each kind a recorded run issued.
pub fn print_command_summary(scene: &RecordingScene) {
    let mut by_kind: BTreeMap<&'static str, usize> = BTreeMap::new();
    for cmd in scene.as_slice() {
        let kind = match cmd {
            SceneCommand::Reset { .. } => "reset",
            SceneCommand::FrameRange { .. } => "frame_range",
            SceneCommand::Create { .. } => "create_primitive",
            SceneCommand::Link { .. } => "link",
            SceneCommand::Transform { .. } => "set_transform",
            SceneCommand::Material { .. } => "assign_material",
            SceneCommand::Keyframe { .. } => "keyframe",
            SceneCommand::Light { .. } => "add_light",
            SceneCommand::Camera { .. } => "add_camera",
        };
        *by_kind.entry(kind).or_default() += 1;
    }

    println!("{} host calls:", scene.len());
    for (kind, n) in by_kind {
        println!("  {kind:<18} {n}");
    }
}

/// Print base counts next to their adjustment under every season.
pub fn print_season_table(base: &GenerationPlan) {
    print!("{:<10} {:>5}", "category", "base");
    for season in Season::ALL {
        print!(" {:>7}", season.name());
    }
    println!();

    let adjusted: Vec<GenerationPlan> = Season::ALL
        .iter()
        .map(|s| apply_season(base, *s))
        .collect();
    for (category, n) in base.iter() {
        print!("{:<10} {:>5}", category.name(), n);
        for plan in &adjusted {
            print!(" {:>7}", plan.count(category));
        }
        println!();
    }
}
