// src/models/waypoint.rs

use std::fmt;

use crate::config::error::ConfigError;
use crate::config::scenario::WaypointInstance;

/// 経路上のウェイポイント
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    pub id: String,
    pub position: [f64; 2], // グリッド座標 [x, y]
    pub is_finish_option: bool,
}

impl Waypoint {
    pub fn from_instance(instance: &WaypointInstance) -> Waypoint {
        Waypoint {
            id: instance.id.clone(),
            position: instance.position,
            is_finish_option: instance.is_finish_option,
        }
    }
}

/// 移動方向（コンパス方位）
///
/// 画面座標系のため +y は南に対応する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompassDirection {
    East,
    West,
    North,
    South,
    Stationary,
}

impl fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CompassDirection::East => "East",
            CompassDirection::West => "West",
            CompassDirection::North => "North",
            CompassDirection::South => "South",
            CompassDirection::Stationary => "Stationary",
        };
        write!(f, "{}", label)
    }
}

/// 座標差分から移動方向を判定する関数
///
/// # 引数
/// - `from`: 始点のグリッド座標 [x, y]
/// - `to`: 終点のグリッド座標 [x, y]
///
/// # 戻り値
/// - 移動方向。x成分の差を優先して判定し（経路は軸平行区間を前提とする）、
///   差分がゼロの場合は `Stationary`
pub fn compass_direction(from: &[f64; 2], to: &[f64; 2]) -> CompassDirection {
    let dx = to[0] - from[0];
    let dy = to[1] - from[1];

    if dx > 0.0 {
        CompassDirection::East
    } else if dx < 0.0 {
        CompassDirection::West
    } else if dy > 0.0 {
        CompassDirection::South
    } else if dy < 0.0 {
        CompassDirection::North
    } else {
        CompassDirection::Stationary
    }
}

/// ウェイポイント列から目的地までのアクティブ経路を構築する関数
///
/// # 引数
/// - `waypoints`: ウェイポイント列（定義順）
/// - `destination_id`: 目的地ウェイポイントのID
///
/// # 戻り値
/// - 先頭から目的地までのプレフィックス。目的地が見つからない場合、
///   または列が空の場合は `ConfigError`
pub fn build_active_route(
    waypoints: &[Waypoint],
    destination_id: &str,
) -> Result<Vec<Waypoint>, ConfigError> {
    if waypoints.is_empty() {
        return Err(ConfigError::EmptyWaypointList);
    }

    let destination_index = waypoints
        .iter()
        .position(|w| w.id == destination_id)
        .ok_or_else(|| ConfigError::UnknownDestination(destination_id.to_string()))?;

    Ok(waypoints[..=destination_index].to_vec())
}
