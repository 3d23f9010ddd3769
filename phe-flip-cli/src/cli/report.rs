use owo_colors::{OwoColorize, Style};
use phe_flip::{Baseline, Flip};
use std::io::{Result, Write};

const RULE_WIDTH: usize = 40;

// Styles are dropped when colors are disabled
fn style(color: bool, style: Style) -> Style {
    if color {
        style
    } else {
        Style::new()
    }
}

pub(super) fn banner<W: Write>(w: &mut W, color: bool) -> Result<()> {
    writeln!(w)?;
    writeln!(w, "{}", "=".repeat(RULE_WIDTH))?;
    let title = "PHE Flip Calculator";
    let title = title.style(style(color, Style::new().green().bold()));
    writeln!(w, "{:10}{title}", "")?;
    writeln!(w, "{}", "=".repeat(RULE_WIDTH))?;
    let hint = "Please enter the parameters:";
    writeln!(w, "{}", hint.style(style(color, Style::new().cyan())))
}

/// Write the report of a correction.
///
/// Lengths are printed with 4 decimals and angles with 2 decimals.
pub(super) fn report<W>(w: &mut W, flip: &Flip, baseline: Baseline, color: bool) -> Result<()>
where
    W: Write,
{
    let Flip {
        offset,
        angle,
        flip_angle,
        draft_angle,
        length,
        width,
        fillet_radius,
    } = flip;
    writeln!(w, "{}", "-".repeat(RULE_WIDTH))?;
    let head = "Result:".style(style(color, Style::new().green().bold()));
    writeln!(w, "{head}")?;
    writeln!(w, "  Equidistant offset:    {offset:.4} mm")?;
    writeln!(w, "  Fold angle:            {angle:.2} deg")?;
    writeln!(w, "  Flip angle:            {flip_angle:.2} deg")?;
    writeln!(w, "  Draft angle:           {draft_angle:.2} deg")?;
    writeln!(w, "  Adjusted length:       {length:.4} mm")?;
    writeln!(w, "  Adjusted width:        {width:.4} mm")?;
    writeln!(w, "  Adjusted fillet:       {fillet_radius:.4} mm")?;
    writeln!(w, "{}", "=".repeat(RULE_WIDTH))?;
    let note = format!("Note: adjusted dimensions apply to the plate on the {baseline} side");
    writeln!(w, "{}", note.style(style(color, Style::new().bold())))?;
    let credit = "by YanMing".style(style(color, Style::new().cyan()));
    writeln!(w, "{:30}{credit}", "")
}
