use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::warn;

/// Prompts for a name and reads one line, bounded to `max_len` characters.
///
/// Returns `Ok(None)` when the input is exhausted before a line arrives or
/// the line is blank. Input longer than `max_len` is truncated on a
/// character boundary rather than rejected.
pub fn prompt_name(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
    max_len: usize,
) -> anyhow::Result<Option<String>> {
    output
        .write_all(prompt.as_bytes())
        .context("failed to write the name prompt")?;
    output.flush().context("failed to flush the name prompt")?;

    let mut line = String::new();
    let bytes_read = input
        .read_line(&mut line)
        .context("failed to read a name from input")?;
    if bytes_read == 0 {
        // End of input before any line arrived.
        return Ok(None);
    }

    let name = line.trim();
    if name.is_empty() {
        return Ok(None);
    }
    if name.chars().count() > max_len {
        warn!(max_len, "Name input is too long, truncating");
        return Ok(Some(name.chars().take(max_len).collect()));
    }
    Ok(Some(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(input: &[u8], max_len: usize) -> (Option<String>, String) {
        let mut reader = Cursor::new(input.to_vec());
        let mut written = Vec::new();
        let name = prompt_name(&mut reader, &mut written, "Enter your name: ", max_len)
            .expect("prompting an in-memory reader should not fail");
        (name, String::from_utf8(written).expect("prompt is utf-8"))
    }

    #[test]
    fn test_reads_a_trimmed_name() {
        let (name, prompted) = prompt(b"Ada \n", 64);
        assert_eq!(name.as_deref(), Some("Ada"));
        assert_eq!(prompted, "Enter your name: ");
    }

    #[test]
    fn test_reads_a_name_without_trailing_newline() {
        let (name, _) = prompt(b"Grace", 64);
        assert_eq!(name.as_deref(), Some("Grace"));
    }

    #[test]
    fn test_exhausted_input_yields_none() {
        let (name, prompted) = prompt(b"", 64);
        assert_eq!(name, None);
        // The prompt is still shown even when no input follows.
        assert_eq!(prompted, "Enter your name: ");
    }

    #[test]
    fn test_blank_line_yields_none() {
        let (name, _) = prompt(b"   \n", 64);
        assert_eq!(name, None);
    }

    #[test]
    fn test_long_input_is_truncated() {
        let (name, _) = prompt(b"Bartholomew\n", 4);
        assert_eq!(name.as_deref(), Some("Bart"));
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        // Four two-byte characters truncate to two characters, not two bytes.
        let (name, _) = prompt("éééé\n".as_bytes(), 2);
        assert_eq!(name.as_deref(), Some("éé"));
    }

    #[test]
    fn test_exact_length_is_kept() {
        let (name, _) = prompt(b"Mara\n", 4);
        assert_eq!(name.as_deref(), Some("Mara"));
    }
}
