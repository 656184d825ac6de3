// src/simulation/csv.rs

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;

use crate::simulation::SimulationState;

/// CSV出力の設定とヘッダーの書き込み
pub fn setup_csv_output(path: &str) -> Result<Box<dyn Write>, Box<dyn Error>> {
    let output_file = File::create(path)?;
    let mut writer = BufWriter::new(output_file);
    write_csv_header(&mut writer)?;
    Ok(Box::new(writer))
}

/// CSVヘッダーの書き込み
pub fn write_csv_header<W: Write>(writer: &mut W) -> Result<(), std::io::Error> {
    writer.write_all(
        b"time(s),x(grid),y(grid),heading(rad),speed(m/s),distance(m),leg_index\n",
    )?;
    Ok(())
}

/// CSV行の作成
pub fn create_csv_row(state: &SimulationState) -> String {
    format!(
        "{},{},{},{},{},{},{}\n",
        state.elapsed,
        state.position[0],
        state.position[1],
        state.heading,
        state.speed,
        state.odometer,
        state.current_leg_index
    )
}
