/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! Read text (which may already contain truecolor escape sequences) from stdin, paint
//! every character that has no color w/ a rainbow gradient, and print the result.
//!
//! ```sh
//! echo "Hello World" | cargo run --example rainbow
//! echo "Hello World" | cargo run --example rainbow -- --step 3 --enable-logging
//! ```

use std::io::{Read, stdin};

use clap::Parser;
use miette::{IntoDiagnostic, WrapErr};
use r3bl_ansi_rune::{RainbowConfig, colorize_uncolored, encode_runes, parse_ansi_string};
use tracing_core::LevelFilter;

#[derive(Debug, Parser)]
#[command(
    name = "rainbow",
    about = "🌈 Paint uncolored text from stdin w/ a truecolor rainbow",
    version
)]
pub struct CLIArg {
    #[arg(long, short = 's', default_value_t = 0, help = "Rotate the gradient by this many characters")]
    pub step: usize,

    #[arg(long, default_value_t = 200, help = "Saturation of the gradient (0..=255)")]
    pub saturation: i32,

    #[arg(long, default_value_t = 255, help = "Value (brightness) of the gradient (0..=255)")]
    pub value: i32,

    #[arg(long, short = 'l', help = "Log debug output to stderr.")]
    pub enable_logging: bool,
}

impl From<&CLIArg> for RainbowConfig {
    fn from(cli_arg: &CLIArg) -> Self {
        Self {
            step: cli_arg.step,
            saturation: cli_arg.saturation,
            value: cli_arg.value,
        }
    }
}

fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();

    if cli_arg.enable_logging {
        init_tracing(LevelFilter::DEBUG);
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let mut input = String::new();
    stdin()
        .read_to_string(&mut input)
        .into_diagnostic()
        .wrap_err("Failed to read stdin")?;

    let runes = parse_ansi_string(input.trim());
    let painted = colorize_uncolored(&runes, &RainbowConfig::from(&cli_arg));

    println!("Rainbow! {}", encode_runes(&painted));

    tracing::debug!(message = "Stop logging...", rune_count = painted.len());

    Ok(())
}

/// Compact `fmt` layer on stderr, so that log output never ends up mixed into the
/// escape coded output on stdout.
fn init_tracing(level_filter: LevelFilter) {
    tracing_subscriber::fmt()
        .compact()
        .without_time()
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(true)
        .with_max_level(level_filter)
        .with_writer(std::io::stderr)
        .init();
}
