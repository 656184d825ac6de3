// src/models/motion.rs

use crate::config::parameters::VehicleParameters;
use crate::config::scenario::FrictionSettings;
use crate::math::{distance, heading_of, step_toward};
use crate::models::telemetry::{build_leg_telemetry, LegTelemetry};
use crate::models::vehicle::{
    calculate_acceleration, calculate_engine_force, calculate_friction_force,
    calculate_net_force, update_speed,
};
use crate::models::waypoint::Waypoint;
use crate::simulation::SimulationState;

/// 1ティック分の更新結果
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    pub state: SimulationState,
    pub completed_leg: Option<LegTelemetry>, // このティックでレグを完了した場合のみ
    pub reached_destination: bool,           // 目的地到達済みで走行を終了すべき場合
}

/// 現在のレグに適用する摩擦係数を判定する関数
///
/// # 引数
/// - `friction`: 摩擦区間の設定
/// - `leg_index`: 現在のレグインデックス
///
/// # 戻り値
/// - 摩擦が有効かつ `leg_index` が半開区間 [start, end) 内の場合は設定値、
///   それ以外は 0
pub fn active_friction_coefficient(friction: &FrictionSettings, leg_index: usize) -> f64 {
    if friction.active
        && leg_index >= friction.range_start_index
        && leg_index < friction.range_end_index
    {
        friction.coefficient
    } else {
        0.0
    }
}

/// 車両を1ティック分更新する関数
///
/// # 引数
/// - `params`: 車両パラメータ
/// - `friction`: 摩擦区間の設定
/// - `route`: アクティブ経路
/// - `grid_scale`: 1グリッド単位あたりの距離 (m)
/// - `state`: 前ティックのシミュレーション状態
/// - `dt`: 時間ステップ (s)、クランプ済みであること
///
/// # 戻り値
/// - 更新後の状態と、レグ完了・目的地到達の情報
pub fn advance_vehicle(
    params: &VehicleParameters,
    friction: &FrictionSettings,
    route: &[Waypoint],
    grid_scale: f64,
    state: &SimulationState,
    dt: f64,
) -> TickOutcome {
    let mut next = state.clone();

    // 力の計算と速度の更新
    let coefficient = active_friction_coefficient(friction, next.current_leg_index);
    let engine_force =
        calculate_engine_force(params.target_speed, next.speed, params.engine_gain);
    let friction_force = calculate_friction_force(coefficient, params.mass);
    let net_force =
        calculate_net_force(engine_force, friction_force, params.air_resistance_force);
    let acceleration = calculate_acceleration(net_force, params.mass);
    next.speed = update_speed(next.speed, acceleration, dt);

    // 最終ウェイポイントに到達済みなら走行終了（時間・距離は加算しない）
    if next.current_leg_index + 1 >= route.len() {
        return TickOutcome {
            state: next,
            completed_leg: None,
            reached_destination: true,
        };
    }

    let target = &route[next.current_leg_index + 1];
    let to_target = distance(&next.position, &target.position);
    let step = next.speed * dt / grid_scale;

    // 進行方向の更新（停止中は保持）
    if let Some(angle) = heading_of(&next.position, &target.position) {
        next.heading = angle;
    }

    // 経過時間とオドメータは境界を跨ぐティックでも無条件に加算する
    next.elapsed += dt;
    next.odometer += next.speed * dt;

    let completed_leg = if step >= to_target {
        // 行き過ぎを防ぐためターゲットに正確にスナップし、レグを完了する
        next.position = target.position;
        let from = &route[next.current_leg_index];
        let duration = next.elapsed - next.leg_started_at;
        let leg = build_leg_telemetry(from, target, grid_scale, duration);
        next.current_leg_index += 1;
        next.leg_started_at = next.elapsed;
        Some(leg)
    } else {
        next.position = step_toward(&next.position, &target.position, step);
        None
    };

    TickOutcome {
        state: next,
        completed_leg,
        reached_destination: false,
    }
}
