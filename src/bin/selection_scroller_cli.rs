//! CLI tool for selection-scroller - dumps what the widget would generate
//!
//! Usage:
//!   selection_scroller_cli grid [rows cols]                        # Table markup
//!   selection_scroller_cli css <selector> <sc> <sr> <ec> <er>      # Selection rule
//!   selection_scroller_cli speed                                   # Speed curve, one line per px
//!
//! Every command accepts `--config <file.json>` to override the defaults.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use selection_scroller::grid::Grid;
use selection_scroller::speed::axis_speed;
use selection_scroller::style::{selection_css, BoundsMode};
use selection_scroller::{CellPosition, ScrollerConfig, Selection};

const USAGE: &str = "Usage: selection_scroller_cli <grid [rows cols] | css <selector> <sc> <sr> <ec> <er> | speed> [--config file.json]";

fn main() {
    let mut args: Vec<String> = env::args().skip(1).collect();

    let config = match take_config(&mut args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    if args.is_empty() {
        eprintln!("{}", USAGE);
        std::process::exit(1);
    }

    let output = match args[0].as_str() {
        "grid" => {
            let (rows, cols) = if args.len() >= 3 {
                (parse_index(&args[1]), parse_index(&args[2]))
            } else {
                (config.rows, config.cols)
            };
            Grid::new(rows, cols).to_html()
        }
        "css" => {
            if args.len() < 6 {
                eprintln!("{}", USAGE);
                std::process::exit(1);
            }
            let selection = Selection {
                start: Some(CellPosition::new(parse_index(&args[2]), parse_index(&args[3]))),
                end: Some(CellPosition::new(parse_index(&args[4]), parse_index(&args[5]))),
            };
            selection_css(
                &args[1],
                &selection,
                BoundsMode::from_normalize_flag(config.normalize_bounds),
                &config.highlight_color,
            )
        }
        "speed" => {
            let mut lines = String::new();
            let mut px = 0.0_f64;
            while px <= config.max_scrolloff {
                lines.push_str(&format!("{}\t{:.4}\n", px, axis_speed(px, &config)));
                px += 1.0;
            }
            lines
        }
        other => {
            eprintln!("Unknown command: {}\n{}", other, USAGE);
            std::process::exit(1);
        }
    };

    io::stdout().write_all(output.as_bytes()).unwrap();
    if !output.ends_with('\n') {
        println!();
    }
}

fn take_config(args: &mut Vec<String>) -> Result<ScrollerConfig, String> {
    let Some(pos) = args.iter().position(|a| a == "--config") else {
        return Ok(ScrollerConfig::default());
    };
    if pos + 1 >= args.len() {
        return Err("--config needs a path".to_string());
    }
    let path = args.remove(pos + 1);
    args.remove(pos);
    let json = fs::read_to_string(&path).map_err(|e| format!("{}: {}", path, e))?;
    ScrollerConfig::from_json(&json).map_err(|e| e.to_string())
}

fn parse_index(arg: &str) -> u32 {
    match arg.parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("Not a non-negative integer: {}", arg);
            std::process::exit(1);
        }
    }
}
