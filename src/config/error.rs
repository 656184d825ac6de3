// src/config/error.rs

use thiserror::Error;

/// 設定検証エラー
///
/// いずれも `configure()` 時に同期的に検出されるもので、
/// 走行中に発生することはありません。
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("車両質量は正の値でなければなりません: {0}")]
    InvalidMass(f64),

    #[error("グリッドスケールは正の値でなければなりません: {0}")]
    InvalidGridScale(f64),

    #[error("目標速度は負であってはなりません: {0}")]
    InvalidTargetSpeed(f64),

    #[error("エンジンゲインは正の値でなければなりません: {0}")]
    InvalidEngineGain(f64),

    #[error("摩擦区間の終端は始端より後でなければなりません: start={start}, end={end}")]
    InvalidFrictionRange { start: usize, end: usize },

    #[error("ウェイポイント列が空です。")]
    EmptyWaypointList,

    #[error("目的地ウェイポイントが見つかりません: {0}")]
    UnknownDestination(String),
}
