// src/main.rs

use std::error::Error;
use std::io::Write;

mod config;
mod math;
mod models;
mod simulation;

use simulation::csv::{create_csv_row, setup_csv_output};
use simulation::framework::Simulator;
use simulation::load_parameters::{load_scenario, load_vehicle_parameters};
use simulation::RunPhase;

fn main() -> Result<(), Box<dyn Error>> {
    // === 1. 設定とシナリオの読み込み ===
    let params = load_vehicle_parameters("config/vehicle_parameters.yaml")?;
    let scenario = load_scenario("config/scenario.yaml")?;

    // === 2. シミュレータの構築（設定検証を含む） ===
    let mut sim = Simulator::configure(params, &scenario)?;

    // === 3. CSV出力の設定 ===
    std::fs::create_dir_all("output")?;
    let mut writer = setup_csv_output("output/simulation_results.csv")?;

    // タイムステップと上限サイクル数
    let dt = 0.1;
    let max_cycles = 100_000;

    // === 4. シミュレーションのメインループ ===
    sim.start();
    for _cycle in 0..max_cycles {
        if sim.phase() == RunPhase::Finished {
            break;
        }
        sim.tick(dt);

        // CSV行の作成と書き込み
        let row = create_csv_row(sim.state());
        writer.write_all(row.as_bytes())?;
    }

    // === 5. 最終レポートの表示 ===
    match sim.report() {
        Some(report) => {
            println!("Destination : {}", report.destination_name);
            println!("Elapsed     : {:.2} s", report.elapsed_seconds);
            println!("Distance    : {:.1} m", report.total_distance);
            println!("Displacement: {:.1} m", report.displacement);
            println!("Avg speed   : {:.2} m/s", report.average_speed);
            println!("Avg velocity: {:.2} m/s", report.average_velocity);
            println!("Legs        : {}", report.leg_breakdown);
        }
        None => {
            println!(
                "Simulation did not reach the destination within {} cycles",
                max_cycles
            );
        }
    }

    Ok(())
}
