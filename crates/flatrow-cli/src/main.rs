use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Tsv,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "flatrow-cli",
    about = "Flatten JSON into dot-path/value rows",
    version
)]
struct Args {
    /// Expand flattened rows back into a nested object (default flattens)
    #[arg(short, long)]
    expand: bool,

    /// Output format for flattened rows
    #[arg(long, value_enum, default_value_t = FormatArg::Tsv)]
    format: FormatArg,

    /// Use bracket-style array paths (a[0] instead of a.0)
    #[arg(long, default_value_t = false)]
    bracket_arrays: bool,

    /// Maximum container nesting depth
    #[arg(long, default_value_t = 128)]
    max_depth: usize,

    /// Treat path conflicts as errors when expanding
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Pretty-print JSON output
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f = File::open(path)
                .with_context(|| format!("cannot open {}", path.display()))?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }

    if args.expand {
        let rows = parse_rows(&buf)?;
        let tree = flatrow::expand(rows, args.strict)?;
        print_json(&serde_json::Value::from(tree), args.pretty)?;
        return Ok(());
    }

    let options = flatrow::Options {
        array_paths: if args.bracket_arrays {
            flatrow::ArrayPaths::Bracket
        } else {
            flatrow::ArrayPaths::Dot
        },
        max_depth: args.max_depth,
    };
    let rows = flatrow::flatten_str(&buf, &options)?;

    match args.format {
        FormatArg::Tsv => {
            for row in &rows {
                println!("{}\t{}", row.key, row.value.render());
            }
        }
        FormatArg::Json => {
            if args.pretty {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                println!("{}", serde_json::to_string(&rows)?);
            }
        }
    }

    Ok(())
}

fn parse_rows(buf: &str) -> Result<Vec<flatrow::Row>> {
    let parsed: serde_json::Value =
        serde_json::from_str(buf).context("input is not valid JSON")?;
    let serde_json::Value::Array(items) = parsed else {
        bail!("expected a JSON array of {{key, value}} objects");
    };
    let mut rows = Vec::with_capacity(items.len());
    for item in items {
        let serde_json::Value::Object(mut entry) = item else {
            bail!("expected a JSON array of {{key, value}} objects");
        };
        let key = match entry.get("key") {
            Some(serde_json::Value::String(s)) => s.clone(),
            _ => bail!("row is missing a string \"key\" field"),
        };
        let value = entry
            .remove("value")
            .context("row is missing a \"value\" field")?;
        rows.push(flatrow::Row {
            key,
            value: flatrow::Value::from(value),
        });
    }
    Ok(rows)
}

fn print_json(value: &serde_json::Value, pretty: bool) -> Result<()> {
    if pretty {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", serde_json::to_string(value)?);
    }
    Ok(())
}
