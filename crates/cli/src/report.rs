use std::io::{self, Write};

use liftcalc_domain::{Formula, OneRepMaxResult};

pub fn write_result(out: &mut impl Write, result: &OneRepMaxResult) -> io::Result<()> {
    let unit = result.weight_unit;

    writeln!(
        out,
        "One-rep max: {:.1} {unit} ({})",
        result.one_rep_max,
        result.selected_formula.name()
    )?;

    writeln!(out)?;
    writeln!(out, "{:<10} {:>10}", "Formula", "1RM")?;
    for formula in &result.all_formulas {
        writeln!(
            out,
            "{:<10} {:>10}",
            formula.name,
            format!("{:.1} {unit}", formula.one_rep_max)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{:<12} {:>7} {:>18} {:>6}", "Zone", "%", "Weight", "Reps")?;
    for zone in &result.training_zones {
        writeln!(
            out,
            "{:<12} {:>7} {:>18} {:>6}",
            zone.name,
            format!("{}-{}", zone.min_percentage, zone.max_percentage),
            format!("{:.1}-{:.1} {unit}", zone.min_weight, zone.max_weight),
            zone.rep_range
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{:>4} {:>12} {:>6}", "%", "Weight", "Reps")?;
    for entry in &result.percentage_chart {
        writeln!(
            out,
            "{:>4} {:>12} {:>6}",
            entry.percentage,
            format!("{:.1} {unit}", entry.weight),
            entry.estimated_reps
        )?;
    }

    Ok(())
}

pub fn write_formulas(out: &mut impl Write) -> io::Result<()> {
    for formula in Formula::ALL {
        writeln!(
            out,
            "{:<10} {:<10} {}",
            formula.to_string(),
            formula.name(),
            formula.description()
        )?;
    }

    Ok(())
}
