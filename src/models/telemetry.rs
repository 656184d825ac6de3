// src/models/telemetry.rs

use crate::math::distance;
use crate::models::waypoint::{compass_direction, CompassDirection, Waypoint};

/// 平均速度計算に用いる所要時間の下限 (s)
///
/// 同一ティック内到達などの縮退ケースでのゼロ除算を防ぐ。
pub const MIN_LEG_DURATION: f64 = 0.001;

/// 完了した1レグの記録
#[derive(Debug, Clone, PartialEq)]
pub struct LegTelemetry {
    pub from_id: String,
    pub to_id: String,
    pub distance: f64,      // レグ距離 (m)
    pub duration: f64,      // 所要時間 (s)
    pub average_speed: f64, // 平均速度 (m/s)
    pub direction: CompassDirection,
    pub label: String,
}

/// 走行完了時の最終レポート
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub elapsed_seconds: f64,  // 走行開始からの経過時間 (s)
    pub total_distance: f64,   // 累積走行距離 (m)
    pub displacement: f64,     // 始点から目的地までの直線距離 (m)
    pub destination_name: String,
    pub average_speed: f64,    // 平均速さ = 総距離 / 経過時間 (m/s)
    pub average_velocity: f64, // 平均速度 = 変位 / 経過時間 (m/s)
    pub leg_breakdown: String, // レグ内訳の文字列表現
    pub legs: Vec<LegTelemetry>,
}

/// 完了レグの記録を構築する関数
///
/// # 引数
/// - `from`: レグ始点のウェイポイント
/// - `to`: レグ終点のウェイポイント
/// - `grid_scale`: 1グリッド単位あたりの距離 (m)
/// - `duration`: レグ所要時間 (s)
///
/// # 戻り値
/// - レグ記録。平均速度の分母は `MIN_LEG_DURATION` でフロアされる
pub fn build_leg_telemetry(
    from: &Waypoint,
    to: &Waypoint,
    grid_scale: f64,
    duration: f64,
) -> LegTelemetry {
    let leg_distance = distance(&from.position, &to.position) * grid_scale;
    let average_speed = leg_distance / duration.max(MIN_LEG_DURATION);
    let direction = compass_direction(&from.position, &to.position);
    let label = format!(
        "{}→{}: {:.1} m, {:.2} s, {:.1} m/s {}",
        from.id, to.id, leg_distance, duration, average_speed, direction
    );

    LegTelemetry {
        from_id: from.id.clone(),
        to_id: to.id.clone(),
        distance: leg_distance,
        duration,
        average_speed,
        direction,
        label,
    }
}

/// 最終レポートを構築する関数
///
/// # 引数
/// - `route`: アクティブ経路（先頭が始点、末尾が目的地）
/// - `grid_scale`: 1グリッド単位あたりの距離 (m)
/// - `elapsed_seconds`: 走行開始からの経過時間 (s)
/// - `total_distance`: オドメータの最終値 (m)
/// - `legs`: 完了レグの記録列
///
/// # 戻り値
/// - 最終レポート。経過時間が 0 の場合、平均速度・平均速さは 0 と定義する
pub fn build_run_report(
    route: &[Waypoint],
    grid_scale: f64,
    elapsed_seconds: f64,
    total_distance: f64,
    legs: Vec<LegTelemetry>,
) -> RunReport {
    let first = &route[0];
    let destination = &route[route.len() - 1];
    let displacement = distance(&first.position, &destination.position) * grid_scale;

    let (average_speed, average_velocity) = if elapsed_seconds > 0.0 {
        (
            total_distance / elapsed_seconds,
            displacement / elapsed_seconds,
        )
    } else {
        (0.0, 0.0)
    };

    let mut leg_breakdown = legs
        .iter()
        .map(|leg| leg.label.as_str())
        .collect::<Vec<&str>>()
        .join(" + ");
    if !leg_breakdown.is_empty() {
        leg_breakdown.push_str(" = ");
    }
    leg_breakdown.push_str(&format!("{:.1} m total", total_distance));

    RunReport {
        elapsed_seconds,
        total_distance,
        displacement,
        destination_name: destination.id.clone(),
        average_speed,
        average_velocity,
        leg_breakdown,
        legs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waypoint(id: &str, x: f64, y: f64) -> Waypoint {
        Waypoint {
            id: id.to_string(),
            position: [x, y],
            is_finish_option: false,
        }
    }

    /// test_build_leg_telemetry
    /// (0,0)→(10,0)、スケール 1、所要 2 s のとき距離 10 m、平均 5 m/s、
    /// 方向 East になります。
    #[test]
    fn test_build_leg_telemetry() {
        let from = waypoint("a", 0.0, 0.0);
        let to = waypoint("b", 10.0, 0.0);
        let leg = build_leg_telemetry(&from, &to, 1.0, 2.0);

        assert_eq!(leg.from_id, "a");
        assert_eq!(leg.to_id, "b");
        assert!((leg.distance - 10.0).abs() < 1e-9);
        assert!((leg.average_speed - 5.0).abs() < 1e-9);
        assert_eq!(leg.direction, CompassDirection::East);
        assert!(leg.label.contains("a→b"));
        assert!(leg.label.contains("East"));
    }

    /// test_build_leg_telemetry_duration_floor
    /// 所要時間 0 でも平均速度の分母は 0.001 s でフロアされ、
    /// 10 m / 0.001 s = 10000 m/s になります。
    #[test]
    fn test_build_leg_telemetry_duration_floor() {
        let from = waypoint("a", 0.0, 0.0);
        let to = waypoint("b", 10.0, 0.0);
        let leg = build_leg_telemetry(&from, &to, 1.0, 0.0);

        assert_eq!(leg.duration, 0.0);
        assert!((leg.average_speed - 10000.0).abs() < 1e-6);
    }

    /// test_build_leg_telemetry_grid_scale
    /// スケール 2.5 のとき 4 グリッドのレグは 10 m になります。
    #[test]
    fn test_build_leg_telemetry_grid_scale() {
        let from = waypoint("a", 0.0, 0.0);
        let to = waypoint("b", 0.0, 4.0);
        let leg = build_leg_telemetry(&from, &to, 2.5, 1.0);

        assert!((leg.distance - 10.0).abs() < 1e-9);
        assert_eq!(leg.direction, CompassDirection::South);
    }

    /// test_build_run_report
    /// 経路 (0,0)→(10,0)→(10,10)、総距離 20 m、経過 2 s のとき
    /// 変位 √200 ≈ 14.142 m、平均速さ 10 m/s、平均速度 ≈ 7.071 m/s になります。
    #[test]
    fn test_build_run_report() {
        let route = vec![
            waypoint("a", 0.0, 0.0),
            waypoint("b", 10.0, 0.0),
            waypoint("c", 10.0, 10.0),
        ];
        let legs = vec![
            build_leg_telemetry(&route[0], &route[1], 1.0, 1.0),
            build_leg_telemetry(&route[1], &route[2], 1.0, 1.0),
        ];

        let report = build_run_report(&route, 1.0, 2.0, 20.0, legs);

        assert_eq!(report.destination_name, "c");
        assert!((report.displacement - 200.0_f64.sqrt()).abs() < 1e-9);
        assert!((report.average_speed - 10.0).abs() < 1e-9);
        assert!((report.average_velocity - 200.0_f64.sqrt() / 2.0).abs() < 1e-9);
        assert_eq!(report.legs.len(), 2);
        assert!(report.leg_breakdown.contains(" + "));
        assert!(report.leg_breakdown.ends_with("20.0 m total"));
    }

    /// test_build_run_report_zero_elapsed
    /// 縮退経路（レグなし）では経過時間 0 を特別扱いし、平均値は 0 になります。
    #[test]
    fn test_build_run_report_zero_elapsed() {
        let route = vec![waypoint("a", 3.0, 4.0)];
        let report = build_run_report(&route, 1.0, 0.0, 0.0, Vec::new());

        assert_eq!(report.elapsed_seconds, 0.0);
        assert_eq!(report.total_distance, 0.0);
        assert_eq!(report.displacement, 0.0);
        assert_eq!(report.average_speed, 0.0);
        assert_eq!(report.average_velocity, 0.0);
        assert_eq!(report.leg_breakdown, "0.0 m total");
    }
}
