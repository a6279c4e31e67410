use common::model_file::{ModelFile, ModelList};
use std::io::{self, Write};
use time::{OffsetDateTime, UtcOffset, format_description};

pub fn print_options(models: &ModelList) {
    let mut stdout = io::stdout();
    for (index, model) in models.iter().enumerate() {
        writeln!(stdout, "{}", menu_line(index, model)).unwrap();
    }
}

/// Prompts for a menu number. Returns None if stdin closes before we get a
/// full line, which we treat the same as the user backing out.
///
pub fn get_choice(count: usize) -> io::Result<Option<String>> {
    print!("Select a model (1-{}): ", count);
    io::stdout().flush().unwrap();

    let mut buffer = String::new();

    if io::stdin().read_line(&mut buffer)? == 0 {
        return Ok(None);
    }

    Ok(Some(buffer.trim().to_string()))
}

/// Turns the user's 1-based menu answer into an index into the model list.
/// Anything non-numeric or out of range comes back as None.
///
pub fn parse_choice(input: &str, count: usize) -> Option<usize> {
    let number = input.parse::<usize>().ok()?;

    if (1..=count).contains(&number) {
        Some(number - 1)
    } else {
        None
    }
}

fn menu_line(index: usize, model: &ModelFile) -> String {
    format!(
        "{:>3} {:<40} {:<18} {:>10}",
        index + 1,
        model.name,
        format_timestamp(model.mtime),
        format_size(model.size)
    )
}

fn format_size(bytes: u64) -> String {
    format!("{:.1} MB", bytes as f64 / 1_048_576.0)
}

fn format_timestamp(timestamp: i64) -> String {
    let datetime =
        OffsetDateTime::from_unix_timestamp(timestamp).unwrap_or(OffsetDateTime::UNIX_EPOCH);
    let local_offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    let format = format_description::parse("[year]-[month]-[day] [hour]:[minute]");

    match format {
        Ok(format) => datetime
            .to_offset(local_offset)
            .format(&format)
            .unwrap_or_else(|_| String::from("Invalid date")),
        Err(_) => String::from("Invalid date"),
    }
}
