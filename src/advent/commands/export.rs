use crate::commands::{join_days, CmdMessage, CmdResult};
use crate::error::{AdventError, Result};
use crate::import::{csv, json};
use crate::session::Session;
use crate::store::DataStore;
use chrono::Utc;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Archive,
}

impl FromStr for ExportFormat {
    type Err = AdventError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "archive" | "tar" | "tar.gz" => Ok(ExportFormat::Archive),
            other => Err(AdventError::Api(format!("Unknown export format: {}", other))),
        }
    }
}

pub fn run<S: DataStore>(
    session: &Session<S>,
    format: ExportFormat,
    output: Option<&Path>,
) -> Result<CmdResult> {
    let calendar = session.calendar();
    let mut result = CmdResult::default();

    let text = match format {
        ExportFormat::Json => json::render(calendar.iter())?,
        ExportFormat::Csv => {
            let (text, unsafe_days) = csv::render(calendar.iter());
            if !unsafe_days.is_empty() {
                result.add_message(CmdMessage::warning(format!(
                    "Days {} contain commas or line breaks and will not import back cleanly",
                    join_days(&unsafe_days)
                )));
            }
            text
        }
        ExportFormat::Archive => {
            let path = output.map(Path::to_path_buf).unwrap_or_else(archive_filename);
            let file = File::create(&path).map_err(AdventError::Io)?;
            write_archive(
                file,
                &json::render(calendar.iter())?,
                &csv::render(calendar.iter()).0,
            )?;
            result.add_message(CmdMessage::success(format!(
                "Exported {} days to {}",
                calendar.days(),
                path.display()
            )));
            return Ok(result);
        }
    };

    match output {
        Some(path) => {
            fs::write(path, &text).map_err(AdventError::Io)?;
            result.add_message(CmdMessage::success(format!(
                "Exported {} days to {}",
                calendar.days(),
                path.display()
            )));
            Ok(result)
        }
        None => Ok(result.with_output(text)),
    }
}

fn archive_filename() -> PathBuf {
    let now = Utc::now();
    PathBuf::from(format!("advent-{}.tar.gz", now.format("%Y-%m-%d_%H-%M-%S")))
}

fn write_archive<W: Write>(writer: W, json_text: &str, csv_text: &str) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    for (name, content) in [
        ("advent/calendar.json", json_text),
        ("advent/calendar.csv", csv_text),
    ] {
        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();

        tar.append_data(&mut header, name, content.as_bytes())
            .map_err(AdventError::Io)?;
    }

    tar.into_inner()
        .and_then(|enc| enc.finish())
        .map_err(AdventError::Io)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{import, MessageLevel};
    use crate::import::ImportFormat;
    use crate::model::Field;
    use crate::store::memory::fixtures::seeded_store;
    use crate::store::memory::InMemoryStore;
    use flate2::read::GzDecoder;
    use std::io::Read;
    use tempfile::TempDir;

    #[test]
    fn json_export_imports_back_identically() {
        let mut source = Session::open(seeded_store(6, &[(1, "Elf"), (6, "Klaus")]), 24);
        source
            .mutate(|c| c.set_field(6, Field::Notes, "a, b").map(|_| ()))
            .unwrap();
        let text = run(&source, ExportFormat::Json, None)
            .unwrap()
            .output
            .unwrap();

        let mut target = Session::open(InMemoryStore::new(), 6);
        import::run(&mut target, ImportFormat::Json, &text).unwrap();
        assert_eq!(target.calendar(), source.calendar());
    }

    #[test]
    fn csv_export_warns_about_separators() {
        let mut session = Session::open(seeded_store(3, &[(1, "Elf")]), 24);
        session
            .mutate(|c| c.set_field(2, Field::Notes, "one, two").map(|_| ()))
            .unwrap();
        let result = run(&session, ExportFormat::Csv, None).unwrap();

        assert!(result.has_level(MessageLevel::Warning));
        let text = result.output.unwrap();
        assert!(text.starts_with("day,title,service,rating,notes\n1,Elf,,,\n"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn export_to_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.json");
        let session = Session::open(seeded_store(2, &[(2, "Elf")]), 24);

        let result = run(&session, ExportFormat::Json, Some(&path)).unwrap();
        assert!(result.output.is_none());
        assert!(fs::read_to_string(&path).unwrap().contains("Elf"));
    }

    #[test]
    fn archive_contains_both_formats() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("backup.tar.gz");
        let session = Session::open(seeded_store(2, &[(1, "Elf")]), 24);
        run(&session, ExportFormat::Archive, Some(&path)).unwrap();

        let file = File::open(&path).unwrap();
        let mut archive = tar::Archive::new(GzDecoder::new(file));
        let mut names = Vec::new();
        for entry in archive.entries().unwrap() {
            let mut entry = entry.unwrap();
            let mut content = String::new();
            entry.read_to_string(&mut content).unwrap();
            assert!(content.contains("Elf"));
            names.push(entry.path().unwrap().display().to_string());
        }
        assert_eq!(names, vec!["advent/calendar.json", "advent/calendar.csv"]);
    }

    #[test]
    fn format_names() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!(
            "tar.gz".parse::<ExportFormat>().unwrap(),
            ExportFormat::Archive
        );
        assert!("pdf".parse::<ExportFormat>().is_err());
    }
}
