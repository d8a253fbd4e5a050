use crate::domain::models::JsonOut;
use serde::Serialize;

/// One line per item in text mode; the whole collection in the JSON envelope.
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

/// Multi-line rendered view in text mode; the projection in the JSON envelope.
pub fn print_view<T: Serialize>(
    json: bool,
    data: T,
    view: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        print!("{}", view(&data));
    }
    Ok(())
}
