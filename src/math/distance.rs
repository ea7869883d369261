// src/math/distance.rs

/// 3次元ユークリッド距離
///
/// # 引数
/// - `a`: 点Aの座標 [x, y, z]
/// - `b`: 点Bの座標 [x, y, z]
///
/// # 戻り値
/// - 2点間の距離
pub fn euclidean_distance(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    let diff = [a[0] - b[0], a[1] - b[1], a[2] - b[2]];
    (diff[0].powi(2) + diff[1].powi(2) + diff[2].powi(2)).sqrt()
}
