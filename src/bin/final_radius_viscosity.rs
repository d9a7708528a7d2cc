//! Predicts the final fiber radius across a range of polymer viscosities.
//!
//! Loads a parameter deck (`deck.yaml`, or the path given as the first
//! argument), sweeps viscosity over 0.1–1.0 Pa·s at the deck's
//! discretisation, and renders the sweep as a full scatter view plus a
//! zoomed view of the nanofiber-scale results. The ejection threshold and
//! initial jet speed depend on density only, so they are shared across the
//! whole sweep.

use std::{env, error::Error, path::Path, process::ExitCode};

use uom::si::{dynamic_viscosity::pascal_second, f64::DynamicViscosity, length::meter};

use rjs_models::models::spinning::rjs::{
    config::Config,
    sweep::{Sweep, SweepRange},
};
use rjs_models::support::plot::{ScatterPlot, ZOOM_RADIUS_LIMIT_METERS, zoomed};

const VISCOSITY_RANGE_PA_S: (f64, f64) = (0.1, 1.0);

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

    let (lo, hi) = VISCOSITY_RANGE_PA_S;
    let range = SweepRange::new(
        DynamicViscosity::new::<pascal_second>(lo),
        DynamicViscosity::new::<pascal_second>(hi),
    )?;

    let result = Sweep::new(&machine, &polymer, resolution).over_viscosity(range)?;
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
        .map(|p| (p.x.get::<pascal_second>(), p.final_radius.get::<meter>()))
        .collect();

    let title = format!("{} / {}", machine.name(), polymer.name());
    let plot = ScatterPlot {
        title: title.clone(),
        x_label: "Polymer viscosity (Pa.s)".into(),
        y_label: "Final radius (m)".into(),
    };
    plot.render(&points, Path::new("final_radius_viscosity.svg"))?;
    println!("wrote final_radius_viscosity.svg");

    let small = zoomed(&points, ZOOM_RADIUS_LIMIT_METERS);
    if small.is_empty() {
        println!("no samples at or below {ZOOM_RADIUS_LIMIT_METERS} m; skipping the zoom view");
    } else {
        let zoom = ScatterPlot {
            title: format!("ZOOM {title}"),
            x_label: "Polymer viscosity (Pa.s)".into(),
            y_label: "Final radius (m)".into(),
        };
        zoom.render(&small, Path::new("final_radius_viscosity_zoom.svg"))?;
        println!("wrote final_radius_viscosity_zoom.svg");
    }

    Ok(())
}
