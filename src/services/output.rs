use crate::domain::models::{ItemRow, JsonOut};
use serde::Serialize;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Envelope for a report that may carry a failure; `ok` is false then.
pub fn print_report<T: Serialize>(ok: bool, data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok, data })?
    );
    Ok(())
}

/// One JSON object per line, for streaming interactive steps.
pub fn print_line<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(&JsonOut { ok: true, data })?);
    Ok(())
}

pub fn item_line(item: &ItemRow) -> String {
    format!("{}\t{}\t{}", item.id, item.tags, item.url)
}

/// Text-mode notices go to stderr; JSON mode carries them in the report.
pub fn notify(json: bool, message: &str) {
    if !json {
        eprintln!("{}", message);
    }
}
