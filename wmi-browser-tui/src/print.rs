//! --print 模式：加载一次，按条件输出纯文本表格后退出

use std::io::Write;

use anyhow::{Context, Result};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use wmi_browser_core::{derive, DerivedView, FilterQuery, RecordRow, WmiSource, COLUMNS};

/// 单列最大显示宽度，超出部分截断
const MAX_COLUMN_WIDTH: usize = 40;

/// 列间距
const COLUMN_GAP: &str = "  ";

/// 加载、筛选并输出表格，返回输出的记录数
pub async fn run(
    source: &dyn WmiSource,
    query: &FilterQuery,
    title: &str,
    out: &mut impl Write,
) -> Result<usize> {
    let records = source
        .load_all()
        .await
        .with_context(|| format!("failed to load records from {}", source.describe()))?;

    let view = derive(&records, query).context("cannot apply search")?;
    write_table(out, title, &view)?;
    out.flush()?;

    Ok(view.total())
}

/// 写出标题行与表格
fn write_table(out: &mut impl Write, title: &str, view: &DerivedView) -> Result<()> {
    writeln!(out, "{title} | Total: {}", view.total())?;
    writeln!(out)?;

    let rows: Vec<RecordRow> = view.records.iter().map(RecordRow::from).collect();
    let widths = column_widths(&rows);

    let header: Vec<&str> = COLUMNS.to_vec();
    write_line(out, &header, &widths)?;

    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let separator: Vec<&str> = separator.iter().map(String::as_str).collect();
    write_line(out, &separator, &widths)?;

    for row in &rows {
        let cells: Vec<&str> = row.cells.iter().map(String::as_str).collect();
        write_line(out, &cells, &widths)?;
    }

    Ok(())
}

/// 每列宽度 = max(表头, 所有单元格)，不超过 MAX_COLUMN_WIDTH
fn column_widths(rows: &[RecordRow]) -> [usize; 8] {
    let mut widths = COLUMNS.map(|name| name.width());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(&row.cells) {
            *width = (*width).max(cell.width());
        }
    }
    widths.map(|w| w.min(MAX_COLUMN_WIDTH))
}

fn write_line(out: &mut impl Write, cells: &[&str], widths: &[usize]) -> Result<()> {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str(COLUMN_GAP);
        }
        let text = truncate(cell, *width);
        let padding = width.saturating_sub(text.width());
        line.push_str(&text);
        line.push_str(&" ".repeat(padding));
    }
    writeln!(out, "{}", line.trim_end())?;
    Ok(())
}

/// 按显示宽度截断，末尾加 "…"
fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut result = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        result.push(c);
        used += w;
    }
    result.push('…');
    result
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use async_trait::async_trait;
    use wmi_browser_core::{CoreError, CoreResult, WmiRecord, ALL_COUNTRIES};

    use super::*;

    struct StaticSource(CoreResult<Vec<WmiRecord>>);

    #[async_trait]
    impl WmiSource for StaticSource {
        async fn load_all(&self) -> CoreResult<Vec<WmiRecord>> {
            self.0.clone()
        }

        fn describe(&self) -> String {
            "memory".to_string()
        }
    }

    fn sample() -> Vec<WmiRecord> {
        vec![
            WmiRecord {
                id: "1".into(),
                name: "HONDA OF AMERICA MFG., INC.".into(),
                country: "UNITED STATES (USA)".into(),
                vehicle_type: "Passenger Car".into(),
                wmi: "1HG".into(),
                date_available_to_public: "2015-01-01".into(),
                created_on: "2015-03-04".into(),
                updated_on: None,
            },
            WmiRecord {
                id: "2".into(),
                name: "HONDA MOTOR CO., LTD".into(),
                country: "JAPAN".into(),
                vehicle_type: "Motorcycle".into(),
                wmi: "JH2".into(),
                date_available_to_public: "2016-01-01".into(),
                created_on: "2016-06-01".into(),
                updated_on: Some("2020-02-02".into()),
            },
        ]
    }

    fn run_to_string(source: &StaticSource, query: &FilterQuery) -> (Result<usize>, String) {
        let mut out = Vec::new();
        let result = tokio_test::block_on(run(source, query, "WMI Data - Honda", &mut out));
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_prints_title_header_and_rows() {
        let source = StaticSource(Ok(sample()));
        let (result, text) = run_to_string(&source, &FilterQuery::default());

        assert_eq!(result.unwrap(), 2);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "WMI Data - Honda | Total: 2");
        assert!(lines[2].starts_with("Id"));
        assert!(lines[2].contains("Vehicle Type"));
        assert!(lines[3].starts_with("--"));
        // created_on 降序：JH2 在前
        assert!(lines[4].contains("JH2"));
        assert!(lines[4].ends_with("2020-02-02"));
        assert!(lines[5].contains("1HG"));
        assert!(lines[5].ends_with('-'));
    }

    #[test]
    fn test_applies_country_and_search() {
        let source = StaticSource(Ok(sample()));
        let query = FilterQuery::new("JAPAN", "motor");
        let (result, text) = run_to_string(&source, &query);

        assert_eq!(result.unwrap(), 1);
        assert!(text.starts_with("WMI Data - Honda | Total: 1"));
        assert!(!text.contains("1HG"));

        let query = FilterQuery::new(ALL_COUNTRIES, "nothing-matches-this");
        let (result, _) = run_to_string(&source, &query);
        assert_eq!(result.unwrap(), 0);
    }

    #[test]
    fn test_invalid_search_is_error() {
        let source = StaticSource(Ok(sample()));
        let (result, text) = run_to_string(&source, &FilterQuery::new(ALL_COUNTRIES, "[A-"));
        assert!(result.is_err());
        assert!(text.is_empty());
    }

    #[test]
    fn test_load_failure_is_error() {
        let source = StaticSource(Err(CoreError::Network("connection refused".into())));
        let (result, _) = run_to_string(&source, &FilterQuery::default());
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("memory"));
        assert!(message.contains("connection refused"));
    }

    #[test]
    fn test_truncate_by_display_width() {
        assert_eq!(truncate("HONDA", 10), "HONDA");
        assert_eq!(truncate("HONDA MOTOR", 6), "HONDA…");
        assert_eq!(truncate("本田技研工業", 5), "本田…");
    }
}
