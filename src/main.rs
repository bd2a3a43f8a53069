use clap::Parser;
use cubemap_faces::extract::{self, ExtractError, ExtractRequest};
use cubemap_faces::imaging::Quality;
use cubemap_faces::{config, output};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "cubemap-faces")]
#[command(about = "Extract cube map faces from a single image")]
#[command(long_about = "\
Extract cube map faces from a single image

The input must use the 4x3 cross layout:

          +------+
          | top  |
  +-------+------+-------+------+
  | left  |front | right | back |
  +-------+------+-------+------+
          |bottom|
          +------+

Six files are written to the working directory, named
<prefix><face>.<format>: top, left, front, right, back, bottom.
Existing files are left alone unless --force is given; --no-force
restores that when the config file sets force = true.

Defaults for --prefix, --format, --force and --quality can be set in
cubemap-faces.toml in the working directory.")]
#[command(version = version_string())]
struct Cli {
    /// Path to the input cubemap image
    input: PathBuf,

    /// Prefix for output filenames
    #[arg(long)]
    prefix: Option<String>,

    /// Face size in pixels (overrides automatic calculation)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    face_size: Option<u32>,

    /// Output image format, e.g. png, jpg, webp (default: same as input)
    #[arg(long)]
    format: Option<String>,

    /// Overwrite existing output files
    #[arg(long, overrides_with = "no_force")]
    force: bool,

    /// Keep existing output files, even if the config file sets force
    #[arg(long, overrides_with = "force")]
    no_force: bool,

    /// JPEG/AVIF encoding quality
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=100))]
    quality: Option<u32>,

    /// Config file (default: ./cubemap-faces.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", output::format_error(&*e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // A missing input is reported before the config file is even read
    if !cli.input.exists() {
        return Err(ExtractError::InputNotFound(cli.input).into());
    }

    let cwd = Path::new(".");
    let config = config::load_config(cli.config.as_deref(), cwd)?;
    let request = build_request(cli, config, cwd);

    let report = extract::extract(&request, |event| {
        for line in output::format_extract_event(event) {
            println!("{}", line);
        }
    })?;
    println!("{}", output::format_summary(&report));

    Ok(())
}

/// Merge command-line flags over config file values.
fn build_request(cli: Cli, config: config::ExtractConfig, output_dir: &Path) -> ExtractRequest {
    ExtractRequest {
        input: cli.input,
        output_dir: output_dir.to_path_buf(),
        prefix: cli.prefix.unwrap_or(config.prefix),
        face_size: cli.face_size,
        format: cli.format.or(config.format),
        force: !cli.no_force && (cli.force || config.force),
        quality: Quality::new(cli.quality.unwrap_or(config.quality)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubemap_faces::config::ExtractConfig;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("cubemap-faces").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_come_from_config() {
        let config = ExtractConfig {
            prefix: "sky_".to_string(),
            format: Some("webp".to_string()),
            force: true,
            quality: 60,
        };
        let request = build_request(parse(&["cross.png"]), config, Path::new("."));

        assert_eq!(request.prefix, "sky_");
        assert_eq!(request.format.as_deref(), Some("webp"));
        assert!(request.force);
        assert_eq!(request.quality.value(), 60);
        assert_eq!(request.face_size, None);
    }

    #[test]
    fn flags_override_config() {
        let config = ExtractConfig {
            prefix: "sky_".to_string(),
            format: Some("webp".to_string()),
            force: false,
            quality: 60,
        };
        let cli = parse(&[
            "cross.png",
            "--prefix",
            "scene_",
            "--format",
            "jpg",
            "--force",
            "--quality",
            "90",
            "--face-size",
            "512",
        ]);
        let request = build_request(cli, config, Path::new("."));

        assert_eq!(request.input, PathBuf::from("cross.png"));
        assert_eq!(request.prefix, "scene_");
        assert_eq!(request.format.as_deref(), Some("jpg"));
        assert!(request.force);
        assert_eq!(request.quality.value(), 90);
        assert_eq!(request.face_size, Some(512));
    }

    #[test]
    fn empty_prefix_flag_overrides_config() {
        let config = ExtractConfig {
            prefix: "sky_".to_string(),
            ..ExtractConfig::default()
        };
        let request = build_request(parse(&["cross.png", "--prefix", ""]), config, Path::new("."));
        assert_eq!(request.prefix, "");
    }

    #[test]
    fn no_force_overrides_config() {
        let config = ExtractConfig {
            force: true,
            ..ExtractConfig::default()
        };
        let request = build_request(parse(&["cross.png", "--no-force"]), config, Path::new("."));
        assert!(!request.force);
    }

    #[test]
    fn last_force_flag_wins() {
        let request = build_request(
            parse(&["cross.png", "--no-force", "--force"]),
            ExtractConfig::default(),
            Path::new("."),
        );
        assert!(request.force);

        let request = build_request(
            parse(&["cross.png", "--force", "--no-force"]),
            ExtractConfig::default(),
            Path::new("."),
        );
        assert!(!request.force);
    }

    #[test]
    fn zero_face_size_rejected() {
        let result = Cli::try_parse_from(["cubemap-faces", "cross.png", "--face-size", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn input_is_required() {
        assert!(Cli::try_parse_from(["cubemap-faces"]).is_err());
    }
}
