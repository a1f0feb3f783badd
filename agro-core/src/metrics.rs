//! Column-level derivations computed at chart build time.
//!
//! Nothing here is cached or written back to the table. A missing input or a
//! zero denominator gives `None`, which the charts draw as a gap.

/// Rural plus urban population.
pub fn total_population(rural: Option<f64>, urban: Option<f64>) -> Option<f64> {
    Some(rural? + urban?)
}

/// Urban share of the total population, in percent.
pub fn urban_percentage(rural: Option<f64>, urban: Option<f64>) -> Option<f64> {
    let total = nonzero(total_population(rural, urban)?)?;
    Some(urban? / total * 100.0)
}

/// Total emission divided by total population.
pub fn per_capita_emissions(
    total_emission: Option<f64>,
    rural: Option<f64>,
    urban: Option<f64>,
) -> Option<f64> {
    let total = nonzero(total_population(rural, urban)?)?;
    Some(total_emission? / total)
}

/// Normalize a year's fire values to percent of their sum.
///
/// Missing entries stay missing and do not count towards the sum. When no
/// value is present, or they sum to zero, every share is `None`.
pub fn fire_shares<const N: usize>(values: [Option<f64>; N]) -> [Option<f64>; N] {
    let total: f64 = values.iter().flatten().sum();
    if values.iter().all(Option::is_none) || total == 0.0 {
        return [None; N];
    }
    values.map(|v| v.map(|v| v / total * 100.0))
}

fn nonzero(value: f64) -> Option<f64> {
    (value != 0.0).then_some(value)
}
