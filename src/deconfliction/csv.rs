// src/deconfliction/csv.rs

use std::error::Error;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::deconfliction::timeline::TimelineFrame;
use crate::deconfliction::ConflictSink;
use crate::models::{ConflictRecord, ConflictReport, Mission};

/// CSV出力先の作成（親ディレクトリも作成する）
pub fn create_csv_writer(path: &str) -> Result<Box<dyn Write>, Box<dyn Error>> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_file = File::create(path)?;
    Ok(Box::new(BufWriter::new(output_file)))
}

/// 競合リストの書き込み
pub fn write_conflicts_csv<W: Write>(
    writer: &mut W,
    conflicts: &[ConflictRecord],
) -> Result<(), std::io::Error> {
    writer.write_all(b"mission_id,x(m),y(m),z(m),time,primary_time\n")?;
    for conflict in conflicts {
        let row = format!(
            "{},{},{},{},{},{}\n",
            conflict.mission_id,
            conflict.location[0],
            conflict.location[1],
            conflict.location[2],
            conflict.time.to_rfc3339(),
            conflict.primary_time.to_rfc3339()
        );
        writer.write_all(row.as_bytes())?;
    }
    writer.flush()
}

/// タイムラインの書き込み
///
/// 1行 = 1フレーム内の1ウェイポイント。該当点のないフレームは出力しない。
pub fn write_timeline_csv<W: Write>(
    writer: &mut W,
    frames: &[TimelineFrame],
) -> Result<(), std::io::Error> {
    writer.write_all(b"frame,frame_time,mission_id,x(m),y(m),z(m),time\n")?;
    for frame in frames {
        for entry in &frame.entries {
            let row = format!(
                "{},{},{},{},{},{},{}\n",
                frame.index,
                frame.time.to_rfc3339(),
                entry.mission_id,
                entry.point.x(),
                entry.point.y(),
                entry.point.z(),
                entry.point.time().to_rfc3339()
            );
            writer.write_all(row.as_bytes())?;
        }
    }
    writer.flush()
}

/// 競合リストをCSVに書き出す出力先
pub struct CsvConflictSink<W: Write> {
    writer: W,
}

impl<W: Write> CsvConflictSink<W> {
    pub fn new(writer: W) -> Self {
        CsvConflictSink { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ConflictSink for CsvConflictSink<W> {
    fn report(
        &mut self,
        _primary: &Mission,
        _others: &[Mission],
        report: &ConflictReport,
    ) -> Result<(), std::io::Error> {
        write_conflicts_csv(&mut self.writer, &report.conflicts)
    }
}
