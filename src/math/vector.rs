// src/math/vector.rs

/// 2点間のユークリッド距離を計算する純粋関数
///
/// # 引数
/// - `a`: 始点の座標 [x, y]（グリッド単位）
/// - `b`: 終点の座標 [x, y]（グリッド単位）
///
/// # 戻り値
/// - 2点間の距離（グリッド単位）
pub fn distance(a: &[f64; 2], b: &[f64; 2]) -> f64 {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    (dx.powi(2) + dy.powi(2)).sqrt()
}

/// 始点から終点へ向かうベクトルの方位角を計算する純粋関数
///
/// # 引数
/// - `from`: 始点の座標 [x, y]（グリッド単位）
/// - `to`: 終点の座標 [x, y]（グリッド単位）
///
/// # 戻り値
/// - 方位角（ラジアン、atan2(dy, dx)）。ゼロベクトルの場合は `None`
pub fn heading_of(from: &[f64; 2], to: &[f64; 2]) -> Option<f64> {
    let dx = to[0] - from[0];
    let dy = to[1] - from[1];
    if dx == 0.0 && dy == 0.0 {
        return None;
    }
    Some(dy.atan2(dx))
}

/// 始点から終点方向へ指定距離だけ進めた座標を計算する純粋関数
///
/// 距離が2点間の距離以上の場合は終点をそのまま返す（行き過ぎ防止）。
///
/// # 引数
/// - `from`: 始点の座標 [x, y]（グリッド単位）
/// - `to`: 終点の座標 [x, y]（グリッド単位）
/// - `step`: 進める距離（グリッド単位）
///
/// # 戻り値
/// - 移動後の座標 [x, y]
pub fn step_toward(from: &[f64; 2], to: &[f64; 2], step: f64) -> [f64; 2] {
    let total = distance(from, to);
    if step >= total || total == 0.0 {
        return *to;
    }
    let t = step / total;
    [from[0] + (to[0] - from[0]) * t, from[1] + (to[1] - from[1]) * t]
}
