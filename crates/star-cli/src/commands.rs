use std::io::Write;

use anyhow::{Context, Result};
use tracing::info_span;

use star_catalog::{Catalog, QueryResult};
use star_model::{Hemisphere, StarCandidate};
use star_store::StarRepository;

use crate::cli::{AddArgs, Command};
use crate::render::{query_message, rename_line, star_card, star_table};

/// Execute one subcommand against `catalog`, writing user output to `out`.
pub fn run_command<R, W>(catalog: &mut Catalog<R>, command: &Command, out: &mut W) -> Result<()>
where
    R: StarRepository,
    W: Write,
{
    let span = info_span!("command", name = command_name(command));
    let _guard = span.enter();

    match command {
        Command::List => {
            let result = catalog.query().all().context("list stars")?;
            print_result(out, &result)
        }
        Command::Constellation { name } => {
            let result = catalog
                .query()
                .by_constellation(name)
                .with_context(|| format!("list constellation {name}"))?;
            print_result(out, &result)
        }
        Command::Add(args) => {
            let star = catalog
                .insert(&candidate_from_args(args))
                .with_context(|| format!("add star {}", args.name))?;
            writeln!(out, "Added {} as {}.", star.name(), star.designation())?;
            writeln!(out, "{}", star_card(&star))?;
            Ok(())
        }
        Command::Remove { designation } => {
            let removal = catalog
                .remove(designation)
                .with_context(|| format!("remove {designation}"))?;
            writeln!(
                out,
                "Removed {} ({}).",
                removal.removed.designation(),
                removal.removed.name()
            )?;
            for rename in &removal.renames {
                writeln!(out, "  {}", rename_line(rename))?;
            }
            Ok(())
        }
        Command::Distance { parsecs } => {
            let result = catalog.query().by_distance(*parsecs).context("distance query")?;
            print_result(out, &result)
        }
        Command::Temperature { min, max } => {
            let result = catalog
                .query()
                .by_temperature(*min, *max)
                .context("temperature query")?;
            print_result(out, &result)
        }
        Command::Magnitude { min, max } => {
            let result = catalog
                .query()
                .by_absolute_magnitude(*min, *max)
                .context("magnitude query")?;
            print_result(out, &result)
        }
        Command::Hemisphere { hemisphere } => {
            let hemisphere: Hemisphere = hemisphere
                .parse()
                .with_context(|| format!("parse hemisphere {hemisphere:?}"))?;
            let result = catalog
                .query()
                .by_hemisphere(hemisphere)
                .context("hemisphere query")?;
            print_result(out, &result)
        }
        Command::Supernovas => {
            let result = catalog
                .query()
                .supernova_candidates()
                .context("supernova query")?;
            print_result(out, &result)
        }
        Command::Show { name } => {
            match catalog.query().by_name(name).context("look up star")? {
                Some(star) => writeln!(out, "{}", star_card(&star))?,
                None => writeln!(out, "No star named {name}.")?,
            }
            Ok(())
        }
    }
}

pub fn candidate_from_args(args: &AddArgs) -> StarCandidate {
    StarCandidate {
        name: args.name.clone(),
        hemisphere: args.hemisphere.clone(),
        declination_degrees: args.dec_degrees,
        declination_minutes: args.dec_minutes,
        declination_seconds: args.dec_seconds,
        right_ascension_hours: args.ra_hours,
        right_ascension_minutes: args.ra_minutes,
        right_ascension_seconds: args.ra_seconds,
        apparent_magnitude: args.apparent_magnitude,
        distance_ly: args.distance,
        constellation: args.constellation.clone(),
        temperature: args.temperature,
        mass: args.mass,
    }
}

fn print_result<W: Write>(out: &mut W, result: &QueryResult) -> Result<()> {
    match query_message(result) {
        Some(message) => writeln!(out, "{message}")?,
        None => writeln!(out, "{}", star_table(&result.matches))?,
    }
    Ok(())
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::List => "list",
        Command::Constellation { .. } => "constellation",
        Command::Add(_) => "add",
        Command::Remove { .. } => "remove",
        Command::Distance { .. } => "distance",
        Command::Temperature { .. } => "temperature",
        Command::Magnitude { .. } => "magnitude",
        Command::Hemisphere { .. } => "hemisphere",
        Command::Supernovas => "supernovas",
        Command::Show { .. } => "show",
    }
}
