use anyhow::Context;
use recording_demo::{select, Layout, ScenarioPlayer, Selection};
use voxhold_gesture::GestureConfig;
use voxhold_runtime_std::StdRuntime;

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let scenarios = match select(&args)? {
        Selection::List => {
            for scenario in recording_demo::Scenario::all() {
                println!("{:<14} {}", scenario.name, scenario.description);
            }
            return Ok(());
        }
        Selection::Run(scenarios) => scenarios,
    };

    println!("=== Press-and-hold recording demo ===");
    for scenario in &scenarios {
        let mut runtime = StdRuntime::new();
        let mut player = ScenarioPlayer::new(runtime.clock(), GestureConfig::default(), Layout::default())
            .context("default gesture config rejected")?;
        let report = player.play(scenario, &mut runtime);
        match &report.outcome {
            Some(outcome) => println!("{:<14} -> {outcome:?}", scenario.name),
            None => println!("{:<14} -> still pressed", scenario.name),
        }
    }
    Ok(())
}
