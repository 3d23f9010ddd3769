use owo_colors::OwoColorize;
use phe_flip::parse_value;
use std::io::{BufRead, Error, ErrorKind, Result, Write};

/// Ask for a measurement until a number is given.
///
/// Returns [`ErrorKind::UnexpectedEof`] if the input is closed.
pub(super) fn read_value<R, W>(
    input: &mut R,
    output: &mut W,
    label: &str,
    color: bool,
) -> Result<f64>
where
    R: BufRead,
    W: Write,
{
    let mut line = Vec::new();
    loop {
        write!(output, " {label} (mm): ")?;
        output.flush()?;
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            writeln!(output)?;
            let msg = format!("input closed before {label} was given");
            return Err(Error::new(ErrorKind::UnexpectedEof, msg));
        }
        // Broken encodings fail to parse and are asked again
        match parse_value(&String::from_utf8_lossy(&line)) {
            Ok(v) => return Ok(v),
            Err(e) => {
                let msg = format!("Invalid input, please try again! ({e})");
                if color {
                    writeln!(output, "{}", msg.red())?;
                } else {
                    writeln!(output, "{msg}")?;
                }
            }
        }
    }
}

/// Wait for the Enter key.
pub(super) fn pause<R, W>(input: &mut R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    write!(output, "Press Enter to exit...")?;
    output.flush()?;
    // A closed input exits as well
    input.read_until(b'\n', &mut Vec::new())?;
    Ok(())
}
