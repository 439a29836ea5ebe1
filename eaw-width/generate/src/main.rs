use anyhow::Context;
use clap::{Parser, ValueEnum, ValueHint};
use eaw_width::emit::{write_breakpoints, Style};
use eaw_width::{blocks, Breakpoints, OverrideMode, WidthTable};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputStyle {
    /// `} else if` branches to paste into a C lookup function
    Fragment,
    /// A complete C function
    C,
    /// A complete Rust function
    Rust,
}

/// Generates a display width lookup from the Unicode
/// East Asian Width data.
///
/// With no arguments, reads EastAsianWidth.txt from the current
/// directory and prints the range checks on stdout.
#[derive(Debug, Parser)]
#[command(name = "make-wcwidth")]
struct Opt {
    /// The East Asian Width data file
    #[arg(long, default_value = "EastAsianWidth.txt", value_hint=ValueHint::FilePath)]
    input: PathBuf,

    /// Write to this file instead of stdout
    #[arg(long, short = 'o', value_hint=ValueHint::FilePath)]
    output: Option<PathBuf>,

    /// Apply `XXXX..YYYY;c` range entries to every code point in
    /// the range. By default range entries are skipped.
    #[arg(long)]
    expand_ranges: bool,

    #[arg(long, value_enum, default_value_t = OutputStyle::Fragment)]
    style: OutputStyle,

    /// The function name used by the c and rust styles
    #[arg(long, default_value = "eaw_wcwidth")]
    function_name: String,

    /// Print the per-block width summary instead of range checks
    #[arg(long)]
    blocks: bool,
}

impl Opt {
    fn mode(&self) -> OverrideMode {
        if self.expand_ranges {
            OverrideMode::ExpandRanges
        } else {
            OverrideMode::SingleOnly
        }
    }

    fn style(&self) -> Style {
        let name = self.function_name.clone();
        match self.style {
            OutputStyle::Fragment => Style::Fragment,
            OutputStyle::C => Style::CFunction { name },
            OutputStyle::Rust => Style::RustFn { name },
        }
    }
}

fn generate(opts: &Opt, out: &mut dyn Write) -> anyhow::Result<()> {
    let (table, stats) = WidthTable::from_path(&opts.input, opts.mode())
        .with_context(|| format!("loading {}", opts.input.display()))?;
    log::info!(
        "{}: {} records applied, {} out of range, {} lines ignored",
        opts.input.display(),
        stats.applied,
        stats.out_of_range,
        stats.ignored
    );

    if opts.blocks {
        blocks::write_blocks(out, &blocks::summarize(&table))?;
    } else {
        let points = Breakpoints::compress(&table);
        let source = opts.input.file_name().map(|name| name.to_string_lossy());
        write_breakpoints(out, &points, &opts.style(), source.as_deref())?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let opts = Opt::parse();

    match &opts.output {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            let mut out = std::io::BufWriter::new(file);
            generate(&opts, &mut out).with_context(|| format!("writing {}", path.display()))
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            generate(&opts, &mut out)
        }
    }
}
