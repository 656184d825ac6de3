// src/models/vehicle.rs

/// 重力加速度 (m/s^2)
pub const GRAVITY_ACCEL: f64 = 9.8;

/// エンジン駆動力を計算する純粋関数
///
/// 目標速度との誤差に比例ゲインを掛けた値。負になる場合（目標速度超過時）は
/// 0 にクランプする。エンジンは制動力を発生しない。
///
/// # 引数
/// - `target_speed`: 目標巡航速度 (m/s)
/// - `current_speed`: 現在速度 (m/s)
/// - `gain`: 比例ゲイン K
///
/// # 戻り値
/// - エンジン駆動力 (N)、0以上
pub fn calculate_engine_force(target_speed: f64, current_speed: f64, gain: f64) -> f64 {
    let speed_error = target_speed - current_speed;
    (speed_error * gain).max(0.0)
}

/// 動摩擦力を計算する純粋関数
///
/// # 引数
/// - `coefficient`: 動摩擦係数 μ（摩擦区間外では 0 を渡す）
/// - `mass`: 車両質量 (kg)
///
/// # 戻り値
/// - 摩擦力 μmg (N)
pub fn calculate_friction_force(coefficient: f64, mass: f64) -> f64 {
    coefficient * mass * GRAVITY_ACCEL
}

/// 合計力を計算する純粋関数
///
/// # 引数
/// - `engine_force`: エンジン駆動力 (N)
/// - `friction_force`: 摩擦力 (N)
/// - `air_resistance_force`: 空気抵抗力 (N)
///
/// # 戻り値
/// - 進行方向の合計力 (N)。抵抗力は進行方向と逆向きに働く
pub fn calculate_net_force(engine_force: f64, friction_force: f64, air_resistance_force: f64) -> f64 {
    engine_force - (friction_force + air_resistance_force)
}

/// 加速度を計算する純粋関数
///
/// # 引数
/// - `net_force`: 合計力 (N)
/// - `mass`: 車両質量 (kg)
///
/// # 戻り値
/// - 加速度 (m/s^2)
pub fn calculate_acceleration(net_force: f64, mass: f64) -> f64 {
    net_force / mass
}

/// 速度を更新する純粋関数
///
/// 抵抗力が進行方向を反転させることはないため、速度は 0 未満にならない。
///
/// # 引数
/// - `current_speed`: 現在速度 (m/s)
/// - `acceleration`: 加速度 (m/s^2)
/// - `dt`: 時間ステップ (s)
///
/// # 戻り値
/// - 更新後の速度 (m/s)、0以上
pub fn update_speed(current_speed: f64, acceleration: f64, dt: f64) -> f64 {
    (current_speed + acceleration * dt).max(0.0)
}
