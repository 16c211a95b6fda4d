// Rust guideline compliant 2026-10-18

//! Terminal reports for rejected commit messages.
//!
//! Reports are written to any [`WriteColor`] so they can be rendered to a
//! terminal or captured into a buffer.

use std::env;
use std::io;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

const CONVENTIONAL_URL: &str = "https://www.conventionalcommits.org";
const ENCODING_URL: &str = "https://git-scm.com/docs/git-commit/#_discussion";

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
pub fn should_use_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Opens stdout with color enabled only when [`should_use_color`] allows it.
pub fn stdout() -> StandardStream {
    let choice = if should_use_color() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

fn paint<W: WriteColor>(out: &mut W, color: Color, bold: bool, text: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold))?;
    write!(out, "{}", text)?;
    out.reset()
}

/// Writes the report for a message that is not conventional.
///
/// # Arguments
///
/// * `out` - Output stream
/// * `message` - The rejected commit message
/// * `accepted_types` - Types the message may start with
pub fn write_rejection<W: WriteColor>(
    out: &mut W,
    message: &str,
    accepted_types: &[String],
) -> io::Result<()> {
    writeln!(out)?;
    paint(out, Color::Red, true, "[Bad commit message] >>")?;
    writeln!(out, " {}", message)?;
    paint(
        out,
        Color::Yellow,
        false,
        "Your commit message does not follow conventional commits formatting\n",
    )?;
    paint(out, Color::Blue, false, CONVENTIONAL_URL)?;
    writeln!(out)?;
    writeln!(out)?;
    paint(
        out,
        Color::Yellow,
        false,
        "Conventional commits start with one of the below types, followed by a colon,\nfollowed by the commit message:",
    )?;
    writeln!(out)?;
    writeln!(out)?;
    writeln!(out, "    {}", accepted_types.join(", "))?;
    writeln!(out)?;

    let examples = [
        (
            "Example commit message adding a feature:",
            "feat: enable `/metrics` endpoint for prometheus",
        ),
        (
            "Example commit message fixing an issue:",
            "fix: remove infinite loop",
        ),
        (
            "Example commit with scope in parentheses after the type for more context:",
            "fix(atlantis): forbid running `atlantis apply` w/o pr approval",
        ),
    ];
    for (i, (title, example)) in examples.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        paint(out, Color::Yellow, false, title)?;
        writeln!(out)?;
        writeln!(out)?;
        writeln!(out, "    {}", example)?;
    }
    out.flush()
}

/// Writes the report for a message file that is not valid UTF-8.
pub fn write_bad_encoding<W: WriteColor>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    paint(out, Color::Red, true, "[Bad commit message encoding]")?;
    writeln!(out)?;
    writeln!(out)?;
    paint(
        out,
        Color::Yellow,
        false,
        "conventional-pre-commit couldn't decode your commit message.",
    )?;
    writeln!(out)?;
    paint(out, Color::Yellow, false, "UTF-8")?;
    writeln!(
        out,
        " encoding is assumed, please configure git to write commit messages in UTF-8."
    )?;
    write!(out, "See ")?;
    paint(out, Color::Blue, false, ENCODING_URL)?;
    writeln!(out, " for more.")?;
    out.flush()
}
