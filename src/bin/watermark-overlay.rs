use std::io::{self, BufRead};
use std::path::Path;
use std::process;

use clap::Parser;

use watermark_overlay::{
    apply_watermark, check_dimensions, load_image, parse_position, parse_transparency_color,
    parse_weight, save_image, BlendConfig, Error, ImageRole, OutputFormat, Placement,
    PlacementMethod, PlacementPlan, Result, TransparencyRule, YesNo,
};

#[derive(Parser)]
#[command(
    name = "watermark-overlay",
    about = "Apply a watermark image onto a photo via weighted per-pixel blending",
    version,
    after_help = "Parameters are collected interactively on stdin, one line each:\n\
                  base image, watermark image, transparency handling, blend weight,\n\
                  placement (single position or tiled grid), output filename.\n\
                  The first invalid input aborts the run; no output file is written."
)]
struct Cli {
    /// Suppress prompt text (answers are still read from stdin)
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli.quiet) {
        println!("{e}");
        process::exit(1);
    }
}

fn run(quiet: bool) -> Result<()> {
    let mut prompter = Prompter {
        quiet,
        lines: io::stdin().lock().lines(),
    };

    let line = prompter.ask("Input the image filename:")?;
    let base = load_image(Path::new(line.trim()), ImageRole::Base)?;
    let line = prompter.ask("Input the watermark image filename:")?;
    let watermark = load_image(Path::new(line.trim()), ImageRole::Watermark)?;
    check_dimensions(&base, &watermark)?;

    let rule = if watermark.is_translucent() {
        let answer = YesNo::parse(&prompter.ask("Do you want to use the watermark's Alpha channel?")?)?;
        if answer.is_yes() {
            TransparencyRule::AlphaBinary
        } else {
            TransparencyRule::Opaque
        }
    } else {
        let answer = YesNo::parse(&prompter.ask("Do you want to set a transparency color?")?)?;
        if answer.is_yes() {
            let line = prompter.ask("Input a transparency color ([Red] [Green] [Blue]):")?;
            TransparencyRule::ChromaKey(parse_transparency_color(&line)?)
        } else {
            TransparencyRule::Opaque
        }
    };

    let line = prompter.ask("Input the watermark transparency percentage (Integer 0-100):")?;
    let config = BlendConfig::new(rule, parse_weight(&line)?);

    let line = prompter.ask("Choose the position method (single, grid):")?;
    let placement = match PlacementMethod::parse(&line)? {
        PlacementMethod::Single => {
            let max_x = base.width() - watermark.width();
            let max_y = base.height() - watermark.height();
            let line = prompter.ask(&format!(
                "Input the watermark position ([x 0-{max_x}] [y 0-{max_y}]):"
            ))?;
            let (x, y) = parse_position(&line, max_x, max_y)?;
            Placement::Single { x, y }
        }
        PlacementMethod::Grid => Placement::Grid,
    };
    let plan = PlacementPlan::new(placement, watermark.width(), watermark.height());

    let line = prompter.ask("Input the output image filename (jpg or png extension):")?;
    let filename = line.trim().to_string();
    let format = OutputFormat::from_filename(&filename)?;

    let output = apply_watermark(&base, &watermark, &plan, &config);
    save_image(&output, Path::new(&filename), format)?;
    println!("The watermarked image {filename} has been created.");
    Ok(())
}

/// Sequential line-based input, optionally echoing a prompt first.
struct Prompter {
    quiet: bool,
    lines: io::Lines<io::StdinLock<'static>>,
}

impl Prompter {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        if !self.quiet {
            println!("{prompt}");
        }
        match self.lines.next() {
            Some(line) => Ok(line?),
            None => Err(Error::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed before all parameters were provided",
            ))),
        }
    }
}
