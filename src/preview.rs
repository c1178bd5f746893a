use anyhow::{Context, Result, anyhow};
use log::info;

use crate::{cli::PreviewArgs, formats, io_utils, table};

pub fn execute(args: &PreviewArgs) -> Result<()> {
    let format = formats::resolve_format(&args.input, args.format).ok_or_else(|| {
        anyhow!(
            "Cannot determine format of {:?}; use a .format1/.format2 extension or --format",
            args.input
        )
    })?;
    let mut rows = format
        .parse_rows(&args.input)
        .with_context(|| format!("Parsing {:?}", args.input))?;
    let total = rows.len();
    if let Some(limit) = args.limit {
        rows.truncate(limit);
    }

    if args.table {
        let headers = vec!["column".to_string(), "value".to_string()];
        let cells = rows
            .iter()
            .map(|row| vec![row.column_name.clone(), row.value.clone()])
            .collect::<Vec<_>>();
        table::print_table(&headers, &cells);
    } else {
        let mut writer = io_utils::open_csv_writer(args.output.as_deref())?;
        writer
            .write_record(["column_name", "value"])
            .context("Writing preview header")?;
        for row in &rows {
            writer
                .write_record([row.column_name.as_str(), row.value.as_str()])
                .context("Writing preview row")?;
        }
        writer.flush().context("Flushing preview output")?;
    }

    info!(
        "Previewed {} of {} normalized row(s) from {:?}",
        rows.len(),
        total,
        args.input
    );
    Ok(())
}
