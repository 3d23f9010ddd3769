use self::logger::Logger;
use owo_colors::OwoColorize;
use phe_flip::{parse_value, Baseline, FlipParam};
use std::io::{BufRead, Write};

mod logger;
mod prompt;
mod report;
#[cfg(test)]
mod tests;

const APP_NAME: &str = env!("CARGO_BIN_NAME");

type AnyResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

#[derive(clap::Parser)]
#[clap(name = APP_NAME, version, author, about)]
pub(crate) struct Entry {
    #[clap(flatten)]
    values: Values,
    /// Reference channel of the offset
    #[clap(long, value_enum, default_value_t = Baseline::Wider)]
    baseline: Baseline,
    /// Print plain text without colors
    #[clap(long)]
    no_color: bool,
    /// Exit without waiting for a key press
    #[clap(long)]
    no_pause: bool,
    /// Print a `key=value` record with full precision instead of the report
    #[clap(long)]
    raw: bool,
}

/// Measurements given on the command line, the missing ones are prompted.
#[derive(clap::Args, Default)]
pub(crate) struct Values {
    /// Channel spacing of the A side (mm)
    #[clap(long, allow_negative_numbers = true, value_parser = parse_value)]
    spacing_a: Option<f64>,
    /// Channel spacing of the B side (mm)
    #[clap(long, allow_negative_numbers = true, value_parser = parse_value)]
    spacing_b: Option<f64>,
    /// Plate thickness (mm)
    #[clap(long, allow_negative_numbers = true, value_parser = parse_value)]
    thickness: Option<f64>,
    /// Plate length (mm)
    #[clap(long, allow_negative_numbers = true, value_parser = parse_value)]
    length: Option<f64>,
    /// Plate width (mm)
    #[clap(long, allow_negative_numbers = true, value_parser = parse_value)]
    width: Option<f64>,
    /// Fillet radius (mm)
    #[clap(long, allow_negative_numbers = true, value_parser = parse_value)]
    fillet_radius: Option<f64>,
}

impl Values {
    /// Prompt for the missing values.
    pub(crate) fn collect<R, W>(
        self,
        input: &mut R,
        output: &mut W,
        color: bool,
    ) -> AnyResult<FlipParam>
    where
        R: BufRead,
        W: Write,
    {
        let mut ask = |v: Option<f64>, label: &str| match v {
            Some(v) => Ok(v),
            None => prompt::read_value(&mut *input, &mut *output, label, color),
        };
        let spacing_a = ask(self.spacing_a, "A-side channel spacing")?;
        let spacing_b = ask(self.spacing_b, "B-side channel spacing")?;
        let thickness = ask(self.thickness, "Plate thickness")?;
        let length = ask(self.length, "Plate length")?;
        let width = ask(self.width, "Plate width")?;
        let fillet_radius = ask(self.fillet_radius, "Fillet radius")?;
        Ok(FlipParam {
            spacing_a,
            spacing_b,
            length,
            width,
            thickness,
            fillet_radius,
        })
    }
}

impl Entry {
    pub(super) fn main() {
        let entry = <Self as clap::Parser>::parse_from(wild::args());
        let mut input = std::io::stdin().lock();
        let mut output = std::io::stdout().lock();
        let mut error = std::io::stderr().lock();
        if !matches!(entry.run(&mut input, &mut output, &mut error), Ok(true)) {
            std::process::exit(1);
        }
    }

    /// Run the whole session, returns `false` if the calculation failed.
    ///
    /// The pause follows the error message as well, so the console window
    /// stays open for the user to read it.
    fn run<R, W, E>(self, input: &mut R, output: &mut W, error: &mut E) -> std::io::Result<bool>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let color = !self.no_color;
        let pause = !self.no_pause && !self.raw;
        let res = if self.raw {
            self.record(input, output, error)
        } else {
            self.report(input, output)
        };
        if let Err(e) = &res {
            let msg = format!("error: {e}");
            if color {
                writeln!(error, "{}", msg.red().bold())?;
            } else {
                writeln!(error, "{msg}")?;
            }
            error.flush()?;
        }
        if pause {
            prompt::pause(input, output)?;
        }
        Ok(res.is_ok())
    }

    fn report<R, W>(self, input: &mut R, output: &mut W) -> AnyResult
    where
        R: BufRead,
        W: Write,
    {
        let color = !self.no_color;
        report::banner(output, color)?;
        let param = self.values.collect(input, output, color)?;
        let flip = param.flip_with(self.baseline)?;
        report::report(output, &flip, self.baseline, color)?;
        Ok(())
    }

    // Prompts go to the error stream, the output keeps the record only
    fn record<R, W, E>(self, input: &mut R, output: &mut W, error: &mut E) -> AnyResult
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let param = self.values.collect(input, error, !self.no_color)?;
        let flip = param.flip_with(self.baseline)?;
        let mut logger = Logger::new(output);
        logger.top_title("param")?;
        logger.field("baseline", self.baseline)?;
        logger.log(param)?;
        logger.title("flip")?;
        logger.log(flip)?;
        logger.flush()?;
        Ok(())
    }
}
