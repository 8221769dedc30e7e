use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use swatchkit::{
    BrandingRequest, ExtractConfig, PaletteEntry, PickedColor, SamplerConfig, extract_from_image,
    pick_color, raster,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Extract the dominant colors of images.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// One or more input image paths
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Maximum number of palette colors
    #[arg(short = 'n', long, default_value_t = swatchkit::DEFAULT_TOP_N)]
    top_n: usize,

    /// Approximate number of pixels to sample per image
    #[arg(long, default_value_t = swatchkit::sampler::DEFAULT_TARGET_SAMPLES)]
    target_samples: u32,

    /// Pixels with alpha below this are ignored
    #[arg(long, default_value_t = swatchkit::sampler::DEFAULT_ALPHA_THRESHOLD)]
    alpha_threshold: u8,

    /// Also report the exact color at X,Y
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    pick: Option<(i64, i64)>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Industry of the company; with --brand-vibe, prints a branding request body
    #[arg(long)]
    company_type: Option<String>,

    /// Desired brand feel, e.g. "Calm & Minimal"
    #[arg(long)]
    brand_vibe: Option<String>,

    /// Company name included in the branding request
    #[arg(long)]
    company_name: Option<String>,

    /// Free-text notes forwarded with the branding request
    #[arg(long)]
    notes: Option<String>,
}

fn parse_point(s: &str) -> std::result::Result<(i64, i64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y: {e}"))?;
    Ok((x, y))
}

#[derive(Serialize)]
struct Report<'a> {
    path: &'a str,
    width: u32,
    height: u32,
    palette: &'a [PaletteEntry],
    #[serde(skip_serializing_if = "Option::is_none")]
    picked: Option<&'a PickedColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    request: Option<&'a BrandingRequest>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = ExtractConfig {
        top_n: args.top_n,
        sampler: SamplerConfig {
            target_samples: args.target_samples,
            alpha_threshold: args.alpha_threshold,
        },
    };
    config.validate()?;

    let branding = match (&args.company_type, &args.brand_vibe) {
        (Some(t), Some(v)) => Some((t.clone(), v.clone())),
        (None, None) => None,
        _ => bail!("--company-type and --brand-vibe must be given together"),
    };

    for input in &args.inputs {
        let bytes = fs::read(input).with_context(|| format!("reading {}", input.display()))?;
        let img = raster::decode(&bytes).with_context(|| format!("decoding {}", input.display()))?;
        let palette = extract_from_image(&img, &config)?;
        log::info!("{}: {} colors", input.display(), palette.len());

        let picked = args
            .pick
            .map(|(x, y)| pick_color(&img, x, y))
            .transpose()?;

        let request = match &branding {
            Some((company_type, vibe)) => {
                let mut req = BrandingRequest::new(&palette, company_type.as_str(), vibe.as_str());
                req.company_name = args.company_name.clone();
                req.additional_notes = args.notes.clone();
                req.validate()
                    .with_context(|| format!("branding request for {}", input.display()))?;
                Some(req)
            }
            None => None,
        };

        let path = input.to_string_lossy();
        match args.format {
            Format::Json => {
                let report = Report {
                    path: &path,
                    width: img.width(),
                    height: img.height(),
                    palette: &palette,
                    picked: picked.as_ref(),
                    request: request.as_ref(),
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            Format::Text => {
                println!("{path} ({}x{})", img.width(), img.height());
                if palette.is_empty() {
                    println!("  no opaque pixels");
                }
                for entry in &palette {
                    println!("  {}  {:<20} {}", entry.hex, entry.rgb.to_string(), entry.count);
                }
                if let Some(p) = &picked {
                    println!("  picked {} {}", p.hex, p.rgb);
                }
                if let Some(req) = &request {
                    println!("{}", serde_json::to_string_pretty(req)?);
                }
            }
        }
    }

    Ok(())
}
