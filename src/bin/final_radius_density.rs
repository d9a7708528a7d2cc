//! Predicts the final fiber radius across a range of polymer densities.
//!
//! Loads a parameter deck (`deck.yaml`, or the path given as the first
//! argument), sweeps density over 900–1500 kg/m³ at the deck's
//! discretisation, and renders the sweep as a full scatter view plus a
//! zoomed view of the nanofiber-scale results.

use std::{env, error::Error, path::Path, process::ExitCode};

use uom::si::{f64::MassDensity, length::meter, mass_density::kilogram_per_cubic_meter};

use rjs_models::models::spinning::rjs::{
    config::Config,
    sweep::{Sweep, SweepRange},
};
use rjs_models::support::plot::{ScatterPlot, ZOOM_RADIUS_LIMIT_METERS, zoomed};

const DENSITY_RANGE_KG_PER_M3: (f64, f64) = (900.0, 1500.0);

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let deck_path = env::args().nth(1).unwrap_or_else(|| "deck.yaml".into());
    let config = Config::from_path(&deck_path)?;

    let machine = config.machine_parameters()?;
    let polymer = config.polymer_parameters()?;
    let resolution = config.resolution()?;

    let (lo, hi) = DENSITY_RANGE_KG_PER_M3;
    let range = SweepRange::new(
        MassDensity::new::<kilogram_per_cubic_meter>(lo),
        MassDensity::new::<kilogram_per_cubic_meter>(hi),
    )?;

    let result = Sweep::new(&machine, &polymer, resolution).over_density(range)?;
    println!(
        "{} / {}: {} samples, {} outside the physical regime",
        machine.name(),
        polymer.name(),
        result.points.len(),
        result.skipped.len(),
    );

    let points: Vec<(f64, f64)> = result
        .points
        .iter()
        .map(|p| {
            (
                p.x.get::<kilogram_per_cubic_meter>(),
                p.final_radius.get::<meter>(),
            )
        })
        .collect();

    let title = format!("{} / {}", machine.name(), polymer.name());
    let plot = ScatterPlot {
        title: title.clone(),
        x_label: "Density (kg/m^3)".into(),
        y_label: "Final radius (m)".into(),
    };
    plot.render(&points, Path::new("final_radius_density.svg"))?;
    println!("wrote final_radius_density.svg");

    let small = zoomed(&points, ZOOM_RADIUS_LIMIT_METERS);
    if small.is_empty() {
        println!("no samples at or below {ZOOM_RADIUS_LIMIT_METERS} m; skipping the zoom view");
    } else {
        let zoom = ScatterPlot {
            title: format!("ZOOM {title}"),
            x_label: "Density (kg/m^3)".into(),
            y_label: "Final radius (m)".into(),
        };
        zoom.render(&small, Path::new("final_radius_density_zoom.svg"))?;
        println!("wrote final_radius_density_zoom.svg");
    }

    Ok(())
}
