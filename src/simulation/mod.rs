// src/simulation/mod.rs

pub mod csv;
pub mod framework;
pub mod load_parameters;

use crate::models::waypoint::Waypoint;

/// 走行フェーズ
///
/// Idle --start--> Running --tick(最終レグ通過)--> Finished。
/// reset はどのフェーズからでも Idle に戻す。Finished から抜ける遷移は
/// reset のみ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Idle,
    Running,
    Finished,
}

/// シミュレーションの全体状態を表す構造体
///
/// 積分器のみが変更する。外部の消費側（描画・レポート表示）はティック間に
/// 確定済みの値を読み取るだけとなる。
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub position: [f64; 2],      // 現在位置（グリッド座標）
    pub heading: f64,            // 進行方向 (rad)
    pub speed: f64,              // 現在速度 (m/s)
    pub odometer: f64,           // 累積走行距離 (m)
    pub current_leg_index: usize,
    pub elapsed: f64,            // 走行開始からの経過時間 (s)
    pub leg_started_at: f64,     // 現在レグの開始時刻 (s)
}

impl SimulationState {
    /// 指定ウェイポイントに静止した初期状態を生成する
    pub fn at_waypoint(waypoint: &Waypoint) -> SimulationState {
        SimulationState {
            position: waypoint.position,
            heading: 0.0,
            speed: 0.0,
            odometer: 0.0,
            current_leg_index: 0,
            elapsed: 0.0,
            leg_started_at: 0.0,
        }
    }
}
