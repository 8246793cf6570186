// brandguard/src/ui/output_format.rs
//! Formats status messages for stderr, colored only when the stream is a terminal.

use owo_colors::OwoColorize;
use std::io::{self, Write};

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{}", msg.cyan())
    } else {
        writeln!(writer, "{}", msg)
    }
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "Warning:".yellow().bold(), msg.yellow())
    } else {
        writeln!(writer, "Warning: {}", msg)
    }
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "Error:".red().bold(), msg.red())
    } else {
        writeln!(writer, "Error: {}", msg)
    }
}

pub fn print_success_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{}", msg.green())
    } else {
        writeln!(writer, "{}", msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_has_prefixes_and_no_escapes() {
        let mut buf = Vec::new();
        print_warn_message(&mut buf, "Content does not mention Casurance", false).unwrap();
        print_error_message(&mut buf, "bad phone", false).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "Warning: Content does not mention Casurance\nError: bad phone\n");
    }

    #[test]
    fn colored_output_contains_escapes() {
        let mut buf = Vec::new();
        print_info_message(&mut buf, "done", true).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("\u{1b}["));
    }
}
