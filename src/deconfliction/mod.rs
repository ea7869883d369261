// src/deconfliction/mod.rs

pub mod csv;
pub mod detector;
pub mod framework;
pub mod load_parameters;
pub mod timeline;

pub use detector::{check_spatial_conflict, check_temporal_conflict, detect, detect_conflicts, DetectionParameters};
pub use timeline::{build_timeline, TimelineFrame, TimelineSettings};

use crate::models::{ConflictReport, Mission};

/// 判定結果を受け取る外部の出力先（可視化・レポート）
pub trait ConflictSink {
    fn report(
        &mut self,
        primary: &Mission,
        others: &[Mission],
        report: &ConflictReport,
    ) -> Result<(), std::io::Error>;
}

/// 競合判定を行い、指定があれば出力先に結果を渡す
///
/// # 引数
/// - `primary`: 主ミッション
/// - `others`: 他ミッション群
/// - `params`: 判定しきい値
/// - `sink`: 出力先。`None`の場合は判定のみ
///
/// # 戻り値
/// - 競合レポート。出力先への書き込みに失敗した場合はそのエラー
pub fn run_query(
    primary: &Mission,
    others: &[Mission],
    params: &DetectionParameters,
    sink: Option<&mut dyn ConflictSink>,
) -> Result<ConflictReport, std::io::Error> {
    let report = detect_conflicts(primary, others, params);
    if let Some(sink) = sink {
        sink.report(primary, others, &report)?;
    }
    Ok(report)
}
