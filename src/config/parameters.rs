// src/config/parameters.rs

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct VehicleParameters {
    pub target_speed: f64,         // 目標巡航速度 (m/s)
    pub mass: f64,                 // 車両質量 (kg)
    pub engine_gain: f64,          // エンジン比例ゲイン K（経験的な調整値）
    pub air_resistance_force: f64, // 空気抵抗力 (N)、一定値
}
