#![allow(clippy::print_stdout, clippy::print_stderr)]

use colorlab::palette::Harmony;
use colorlab::state::{AppState, MemoryStore};
use colorlab::vision::Deficiency;
use colorlab::wcag::ContrastReport;
use colorlab::Rgb;

fn main() {
    let input = std::env::args()
        .skip(1)
        .collect::<Vec<_>>()
        .join(" ");
    let input = if input.is_empty() { "#1e88e5" } else { input.as_str() };

    let mut state = AppState::default();
    match state.color_mut().apply_input(input) {
        Ok(detection) => println!("\n{}\n", detection),
        Err(err) => {
            eprintln!("{}: {:?}", err, input);
            std::process::exit(1);
        }
    }

    let color = state.color().color();
    let report = state.color().report();

    println!("Closest name: {}\n", report.name);
    for (label, notation) in report.formats.labelled() {
        println!("{:>5}  {}", label, notation);
    }

    println!("\nPalette:");
    for (index, shade) in report.palette.iter().enumerate() {
        let marker = if *shade == color { "<" } else { "" };
        println!("  {:>2}  {} {}", index, shade, marker);
    }

    println!("\nHarmonies:");
    for harmony in Harmony::ALL {
        let colors = harmony
            .colors(color)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        println!("  {:<20} {}", harmony.name(), colors.join(" "));
    }

    println!("\nContrast:");
    for background in [Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)] {
        let report = ContrastReport::new(color, background);
        println!("  on {}  {}", background, report);
    }

    println!("\nColor vision:");
    for deficiency in Deficiency::ALL {
        println!("  {:<14} {}", deficiency.name(), deficiency.simulate(color));
    }

    let mut store = MemoryStore::new();
    match state.save(&mut store) {
        Ok(()) => println!("\nSaved state under {} keys.\n", store.len()),
        Err(err) => eprintln!("\n{}\n", err),
    }
}
