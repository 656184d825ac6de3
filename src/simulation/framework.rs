// src/simulation/framework.rs

use crate::config::error::ConfigError;
use crate::config::parameters::VehicleParameters;
use crate::config::scenario::{FrictionSettings, Scenario};
use crate::models::motion::advance_vehicle;
use crate::models::telemetry::{build_run_report, LegTelemetry, RunReport};
use crate::models::waypoint::{build_active_route, Waypoint};
use crate::simulation::{RunPhase, SimulationState};

/// 1ティックの最大時間 (s)
///
/// フレームレートの乱れに関わらず1ステップの誤差を抑えるための上限。
pub const MAX_TICK_INTERVAL: f64 = 0.1;

/// ウェイポイント経路シミュレータ
///
/// 状態は本構造体が排他的に所有し、外部のクロックが `tick` を逐次駆動する。
/// モジュールレベルの共有状態を持たないため、複数のシミュレータを独立に
/// 動かすことができる。
pub struct Simulator {
    params: VehicleParameters,
    friction: FrictionSettings,
    grid_scale: f64,
    route: Vec<Waypoint>,
    phase: RunPhase,
    state: SimulationState,
    legs: Vec<LegTelemetry>,
    report: Option<RunReport>,
}

impl Simulator {
    /// 設定を検証してシミュレータを構築する
    ///
    /// # 引数
    /// - `params`: 車両パラメータ
    /// - `scenario`: シナリオ（ウェイポイント列・目的地・摩擦区間など）
    ///
    /// # 戻り値
    /// - 検証済みのシミュレータ（Idle フェーズ）。前提条件違反は `ConfigError`
    pub fn configure(params: VehicleParameters, scenario: &Scenario) -> Result<Simulator, ConfigError> {
        if params.mass <= 0.0 {
            return Err(ConfigError::InvalidMass(params.mass));
        }
        if scenario.grid_scale <= 0.0 {
            return Err(ConfigError::InvalidGridScale(scenario.grid_scale));
        }
        if params.target_speed < 0.0 {
            return Err(ConfigError::InvalidTargetSpeed(params.target_speed));
        }
        if params.engine_gain <= 0.0 {
            return Err(ConfigError::InvalidEngineGain(params.engine_gain));
        }
        if scenario.friction.active
            && scenario.friction.range_end_index <= scenario.friction.range_start_index
        {
            return Err(ConfigError::InvalidFrictionRange {
                start: scenario.friction.range_start_index,
                end: scenario.friction.range_end_index,
            });
        }

        let waypoints: Vec<Waypoint> = scenario
            .waypoints
            .iter()
            .map(Waypoint::from_instance)
            .collect();
        let route = build_active_route(&waypoints, &scenario.destination_id)?;

        let state = SimulationState::at_waypoint(&route[0]);
        Ok(Simulator {
            params,
            friction: scenario.friction.clone(),
            grid_scale: scenario.grid_scale,
            route,
            phase: RunPhase::Idle,
            state,
            legs: Vec::new(),
            report: None,
        })
    }

    /// 走行を開始する（Idle → Running）
    ///
    /// 車両を先頭ウェイポイントに置き、時計を0に戻す。縮退経路
    /// （ウェイポイント1点のみ）の場合はレグなしで即座に完了する。
    pub fn start(&mut self) {
        if self.phase != RunPhase::Idle {
            return;
        }
        self.state = SimulationState::at_waypoint(&self.route[0]);
        self.legs.clear();
        self.report = None;
        self.phase = RunPhase::Running;

        if self.route.len() == 1 {
            self.finish();
        }
    }

    /// シミュレーションを1ティック進める
    ///
    /// # 引数
    /// - `dt`: 前ティックからの経過時間 (s)。[0, MAX_TICK_INTERVAL] に
    ///   クランプされる。Running 以外では何もしない
    pub fn tick(&mut self, dt: f64) {
        if self.phase != RunPhase::Running {
            return;
        }
        let dt = dt.clamp(0.0, MAX_TICK_INTERVAL);

        let outcome = advance_vehicle(
            &self.params,
            &self.friction,
            &self.route,
            self.grid_scale,
            &self.state,
            dt,
        );

        self.state = outcome.state;
        if let Some(leg) = outcome.completed_leg {
            self.legs.push(leg);
        }
        if outcome.reached_destination {
            self.finish();
        }
    }

    /// 任意のフェーズから Idle に戻す
    ///
    /// 状態とレグ記録を消去し、車両を先頭ウェイポイントに戻す。
    pub fn reset(&mut self) {
        self.state = SimulationState::at_waypoint(&self.route[0]);
        self.legs.clear();
        self.report = None;
        self.phase = RunPhase::Idle;
    }

    /// 走行を完了し、最終レポートを一度だけ生成する
    fn finish(&mut self) {
        let report = build_run_report(
            &self.route,
            self.grid_scale,
            self.state.elapsed,
            self.state.odometer,
            self.legs.clone(),
        );
        self.report = Some(report);
        self.phase = RunPhase::Finished;
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// 現在のシミュレーション状態（描画用スナップショット）
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// これまでに完了したレグの記録列
    pub fn legs(&self) -> &[LegTelemetry] {
        &self.legs
    }

    /// 最終レポート。Finished のときのみ `Some`
    pub fn report(&self) -> Option<&RunReport> {
        self.report.as_ref()
    }
}
