// src/config/scenario.rs

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub grid_scale: f64, // 1グリッド単位あたりの距離 (m)
    pub waypoints: Vec<WaypointInstance>,
    pub destination_id: String,
    pub friction: FrictionSettings,
}

#[derive(Debug, Deserialize)]
pub struct WaypointInstance {
    pub id: String,
    pub position: [f64; 2], // グリッド座標 [x, y]
    #[serde(default)]
    pub is_finish_option: bool,
}

/// 摩擦区間の設定
///
/// インデックスはウェイポイント列全体に対するもの。目的地によって経路が
/// 区間より手前で打ち切られた場合、その区間には単に入らないだけとなる。
#[derive(Debug, Deserialize, Clone)]
pub struct FrictionSettings {
    pub coefficient: f64,         // 動摩擦係数 μ
    pub active: bool,             // 摩擦を有効にするか
    pub range_start_index: usize, // 区間開始ノードインデックス（含む）
    pub range_end_index: usize,   // 区間終了ノードインデックス（含まない）
}
