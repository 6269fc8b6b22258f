//! Copying selected files into the work-order branch.

use chrono::{Local, NaiveDate};
use filetime::FileTime;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, error, info, warn};

use super::structure::{check_create, create_dir};
use super::{Filer, PlacementReport};
use crate::error::FilingError;
use crate::model::{FileBucket, OrderType, ToolId, WorkOrderId};

impl Filer {
    /// Copy inside files into `02 - Work Orders/<work order>` and outside
    /// files into `02 - Work Orders` itself, using today's date for stock
    /// orders.
    pub fn place<P: AsRef<Path>>(
        &self,
        tool: &ToolId,
        work_order: &WorkOrderId,
        order_type: OrderType,
        inside_paths: &[P],
        outside_paths: &[P],
    ) -> Result<PlacementReport, FilingError> {
        let today = Local::now().date_naive();
        self.place_on(
            tool,
            work_order,
            order_type,
            inside_paths,
            outside_paths,
            today,
        )
    }

    /// [`Filer::place`] with an explicit stock order date.
    ///
    /// Stock orders get a `STOCK ORDER_MM.DD.YYYY` folder inside the
    /// work-order folder. Unlike every other folder it must not exist yet, so
    /// a second stock upload for the same work order on the same day fails.
    ///
    /// Every file is attempted. If any copy fails the result is a
    /// [`FilingError::CopyError`] listing which sources were copied and which
    /// were not; copied files stay in place.
    pub fn place_on<P: AsRef<Path>>(
        &self,
        tool: &ToolId,
        work_order: &WorkOrderId,
        order_type: OrderType,
        inside_paths: &[P],
        outside_paths: &[P],
        date: NaiveDate,
    ) -> Result<PlacementReport, FilingError> {
        let tree = self.tree(tool, work_order);
        let outside_dir = tree.work_orders_dir().to_path_buf();
        let mut inside_dir = tree.work_order_dir();

        check_create(tree.tool_dir())?;
        check_create(&outside_dir)?;
        check_create(&inside_dir)?;

        if order_type.is_stock() {
            inside_dir = tree.stock_dir(date);
            create_dir(&inside_dir)?;
        }

        let mut report = PlacementReport::default();
        for path in inside_paths {
            copy_into(path.as_ref(), &inside_dir, FileBucket::Inside, &mut report);
        }
        for path in outside_paths {
            copy_into(path.as_ref(), &outside_dir, FileBucket::Outside, &mut report);
        }

        info!(
            "Copied {} file(s) for tool {} work order {}, {} failed",
            report.copied.len(),
            tool,
            work_order,
            report.failed.len()
        );
        report.into_result()
    }
}

/// Copy `source` into `dir` under its own file name and record the outcome.
fn copy_into(source: &Path, dir: &Path, bucket: FileBucket, report: &mut PlacementReport) {
    let Some(name) = source.file_name() else {
        let destination = dir.to_path_buf();
        error!("Cannot copy {}: path has no file name", source.display());
        report.record_failed(source, destination, bucket, "path has no file name");
        return;
    };

    let destination = dir.join(name);
    match copy_preserving_times(source, &destination) {
        Ok(bytes) => {
            debug!(
                "Copied {} -> {} ({} bytes)",
                source.display(),
                destination.display(),
                bytes
            );
            report.record_copied(source, destination, bucket);
        }
        Err(e) => {
            error!(
                "Failed to copy {} -> {}: {}",
                source.display(),
                destination.display(),
                e
            );
            report.record_failed(source, destination, bucket, e.to_string());
        }
    }
}

/// Copy contents and permissions, then carry over access and modification
/// times. The source is left untouched.
///
/// Only the content copy decides the outcome. Timestamps are kept where the
/// destination filesystem allows it.
fn copy_preserving_times(source: &Path, destination: &Path) -> io::Result<u64> {
    let bytes = fs::copy(source, destination)?;
    if let Err(e) = copy_times(source, destination) {
        warn!(
            "Copied {} but could not keep its timestamps: {}",
            destination.display(),
            e
        );
    }
    Ok(bytes)
}

fn copy_times(source: &Path, destination: &Path) -> io::Result<()> {
    let metadata = fs::metadata(source)?;
    filetime::set_file_times(
        destination,
        FileTime::from_last_access_time(&metadata),
        FileTime::from_last_modification_time(&metadata),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FilerConfig;
    use filetime::set_file_mtime;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;
    use tempfile::TempDir;

    struct Fixture {
        _dir: TempDir,
        base: PathBuf,
        sources: PathBuf,
        filer: Filer,
    }

    fn fixture() -> Fixture {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("history");
        let sources = dir.path().join("sources");
        fs::create_dir(&base).unwrap();
        fs::create_dir(&sources).unwrap();
        Fixture {
            filer: Filer::new(FilerConfig::new(&base)),
            _dir: dir,
            base,
            sources,
        }
    }

    fn source(fx: &Fixture, name: &str, content: &str) -> PathBuf {
        let path = fx.sources.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn ids() -> (ToolId, WorkOrderId) {
        (
            ToolId::parse("12345").unwrap(),
            WorkOrderId::parse("WO123456").unwrap(),
        )
    }

    #[test]
    fn test_place_splits_inside_and_outside() {
        let fx = fixture();
        let (tool, work_order) = ids();
        let a = source(&fx, "a.pdf", "inside");
        let b = source(&fx, "b.pdf", "outside");

        let report = fx
            .filer
            .place(&tool, &work_order, OrderType::NonItar, &[&a], &[&b])
            .unwrap();

        let work_orders = fx.base.join("12345/02 - Work Orders");
        assert_eq!(
            fs::read_to_string(work_orders.join("WO123456/a.pdf")).unwrap(),
            "inside"
        );
        assert_eq!(
            fs::read_to_string(work_orders.join("b.pdf")).unwrap(),
            "outside"
        );
        assert!(!work_orders.join("a.pdf").exists());
        assert!(!work_orders.join("WO123456/b.pdf").exists());
        assert!(a.exists() && b.exists());
        assert_eq!(report.copied.len(), 2);
        assert_eq!(report.copied[0].bucket, FileBucket::Inside);
        assert_eq!(report.copied[1].bucket, FileBucket::Outside);
    }

    #[test]
    fn test_place_stock_uses_dated_folder() {
        let fx = fixture();
        let (tool, work_order) = ids();
        let a = source(&fx, "a.pdf", "inside");
        let b = source(&fx, "b.pdf", "outside");
        let date = NaiveDate::from_ymd_opt(2024, 8, 5).unwrap();

        fx.filer
            .place_on(&tool, &work_order, OrderType::Stock, &[&a], &[&b], date)
            .unwrap();

        let work_orders = fx.base.join("12345/02 - Work Orders");
        assert!(work_orders
            .join("WO123456/STOCK ORDER_08.05.2024/a.pdf")
            .is_file());
        assert!(!work_orders.join("WO123456/a.pdf").exists());
        // Outside files ignore the stock folder.
        assert!(work_orders.join("b.pdf").is_file());
    }

    #[test]
    fn test_place_stock_twice_same_day_fails() {
        let fx = fixture();
        let (tool, work_order) = ids();
        let a = source(&fx, "a.pdf", "inside");
        let b = source(&fx, "b.pdf", "outside");
        let date = NaiveDate::from_ymd_opt(2024, 8, 5).unwrap();

        fx.filer
            .place_on(&tool, &work_order, OrderType::Stock, &[&a], &[&b], date)
            .unwrap();
        let err = fx
            .filer
            .place_on(&tool, &work_order, OrderType::Stock, &[&a], &[&b], date)
            .unwrap_err();
        assert!(matches!(err, FilingError::DirectoryCreateFailed { .. }));

        let next_day = date.succ_opt().unwrap();
        fx.filer
            .place_on(&tool, &work_order, OrderType::Stock, &[&a], &[&b], next_day)
            .unwrap();
    }

    #[test]
    fn test_place_non_stock_is_repeatable() {
        let fx = fixture();
        let (tool, work_order) = ids();
        let a = source(&fx, "a.pdf", "inside");
        let b = source(&fx, "b.pdf", "outside");

        for order_type in [OrderType::Itar, OrderType::Unspecified] {
            fx.filer
                .place(&tool, &work_order, order_type, &[&a], &[&b])
                .unwrap();
        }
    }

    #[test]
    fn test_place_reports_missing_source() {
        let fx = fixture();
        let (tool, work_order) = ids();
        let present = source(&fx, "present.pdf", "ok");
        let missing = fx.sources.join("missing.pdf");
        let b = source(&fx, "b.pdf", "outside");

        let err = fx
            .filer
            .place(
                &tool,
                &work_order,
                OrderType::Itar,
                &[missing.clone(), present.clone()],
                &[b.clone()],
            )
            .unwrap_err();

        match err {
            FilingError::CopyError { copied, failed } => {
                assert_eq!(copied, vec![present, b]);
                assert_eq!(failed.len(), 1);
                assert_eq!(failed[0].source, missing);
                assert_eq!(failed[0].bucket, FileBucket::Inside);
            }
            other => panic!("Expected CopyError, got {:?}", other),
        }
        assert!(fx
            .base
            .join("12345/02 - Work Orders/WO123456/present.pdf")
            .is_file());
    }

    #[test]
    fn test_place_rejects_path_without_file_name() {
        let fx = fixture();
        let (tool, work_order) = ids();
        let b = source(&fx, "b.pdf", "outside");

        let err = fx
            .filer
            .place(
                &tool,
                &work_order,
                OrderType::Itar,
                &[PathBuf::from("/")],
                &[b],
            )
            .unwrap_err();
        match err {
            FilingError::CopyError { failed, .. } => {
                assert_eq!(failed[0].reason, "path has no file name");
            }
            other => panic!("Expected CopyError, got {:?}", other),
        }
    }

    #[test]
    fn test_place_without_structure_pass() {
        let fx = fixture();
        let (tool, work_order) = ids();
        let a = source(&fx, "a.pdf", "inside");
        let b = source(&fx, "b.pdf", "outside");
        assert!(!fx.base.join("12345").exists());

        fx.filer
            .place(&tool, &work_order, OrderType::Itar, &[&a], &[&b])
            .unwrap();
        assert!(fx
            .base
            .join("12345/02 - Work Orders/WO123456/a.pdf")
            .is_file());
    }

    #[test]
    fn test_copy_times_failure_does_not_fail_copy() {
        let fx = fixture();
        let a = source(&fx, "a.pdf", "inside");
        let missing = fx.base.join("never-written.pdf");

        // The timestamp step on its own reports its error...
        assert!(copy_times(&a, &missing).is_err());

        // ...while a full copy still counts the file as copied.
        let mut report = PlacementReport::default();
        copy_into(&a, &fx.base, FileBucket::Inside, &mut report);
        assert!(report.is_complete());
        assert_eq!(report.copied[0].destination, fx.base.join("a.pdf"));
    }

    #[test]
    fn test_copy_preserves_modification_time() {
        let fx = fixture();
        let a = source(&fx, "a.pdf", "inside");
        let old = FileTime::from_unix_time(1_600_000_000, 0);
        set_file_mtime(&a, old).unwrap();

        let destination = fx.base.join("a.pdf");
        copy_preserving_times(&a, &destination).unwrap();

        let copied = fs::metadata(&destination).unwrap();
        assert_eq!(FileTime::from_last_modification_time(&copied), old);
    }
}
