//! Annotation Connector (CLI).
//!
//! Liest eine Pfeil-Anfrage als JSON (Datei oder stdin) und gibt Pfad,
//! Pfeilspitzen-Winkel und optional den Lösch-Marker aus.

use annotation_connector::{
    build_connector, default_peak, ArrowShape, ConnectorOptions, CurveRequest, CurveResult, Point,
};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::PathBuf;

const USAGE: &str = "\
Verwendung: annotation-connector [ANFRAGE.json] [--options DATEI.toml] [--svg]

  ANFRAGE.json   JSON mit source, target, optional peak, shape, includeDeleteMarker
                 (ohne Angabe wird stdin gelesen)
  --options      Optionen-Datei (Standard: annotation_connector.toml neben der Binary)
  --svg          Nur die SVG-Pfaddaten ausgeben";

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

/// Eingabeformat der Binary: Scheitelpunkt optional.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConnectorInput {
    source: Point,
    target: Point,
    #[serde(default)]
    peak: Option<Point>,
    #[serde(default)]
    shape: ArrowShape,
    #[serde(default, alias = "include_delete_marker")]
    include_delete_marker: bool,
}

/// Ausgabeformat: Ergebnis plus verwendeter Scheitelpunkt und SVG-Pfad.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ConnectorOutput {
    peak: Point,
    svg_path: String,
    #[serde(flatten)]
    result: CurveResult,
}

/// Kommandozeilen-Argumente
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    input: Option<PathBuf>,
    options: Option<PathBuf>,
    svg_only: bool,
    help: bool,
}

impl CliArgs {
    fn parse(mut args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let mut parsed = Self::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--svg" => parsed.svg_only = true,
                "-h" | "--help" => parsed.help = true,
                "--options" => {
                    let path = args
                        .next()
                        .context("--options erwartet einen Dateipfad")?;
                    parsed.options = Some(PathBuf::from(path));
                }
                flag if flag.starts_with("--") => anyhow::bail!("Unbekannte Option: {}", flag),
                path => {
                    if parsed.input.is_some() {
                        anyhow::bail!("Mehr als eine Eingabedatei angegeben: {}", path);
                    }
                    parsed.input = Some(PathBuf::from(path));
                }
            }
        }
        Ok(parsed)
    }
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        let args = CliArgs::parse(std::env::args().skip(1))?;
        if args.help {
            println!("{}", USAGE);
            return Ok(());
        }

        log::info!(
            "Annotation Connector v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options_path = args
            .options
            .clone()
            .unwrap_or_else(ConnectorOptions::config_path);
        let options = ConnectorOptions::load_from_file(&options_path);

        let raw = Self::read_input(args.input.as_ref())?;
        let input: ConnectorInput =
            serde_json::from_str(&raw).context("Anfrage ist kein gültiges JSON")?;
        let output = Self::compute(input, &options)?;

        if args.svg_only {
            println!("{}", output.svg_path);
        } else {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Ok(())
    }

    fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
        match path {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Anfrage nicht lesbar: {}", path.display())),
            None => {
                let mut content = String::new();
                std::io::stdin()
                    .read_to_string(&mut content)
                    .context("stdin nicht lesbar")?;
                Ok(content)
            }
        }
    }

    fn compute(input: ConnectorInput, options: &ConnectorOptions) -> anyhow::Result<ConnectorOutput> {
        let peak = match input.peak {
            Some(peak) => peak,
            None => {
                let computed = default_peak(input.shape, input.source, input.target, options);
                log::debug!(
                    "Standard-Scheitelpunkt {:?} (Versatz {:?})",
                    computed.peak,
                    computed.offset
                );
                computed.peak
            }
        };

        let request = CurveRequest {
            source: input.source,
            peak,
            target: input.target,
            shape: input.shape,
            include_delete_marker: input.include_delete_marker,
        };
        if !request.is_finite() {
            anyhow::bail!("Anfrage enthält nicht-endliche Koordinaten: {:?}", request);
        }

        let result = build_connector(&request, options);
        log::debug!(
            "{}-Pfeil mit {} Pfadbefehlen, Pfeilspitze {:.2}°",
            request.shape,
            result.path.commands().len(),
            result.arrowhead_angle_degrees
        );

        Ok(ConnectorOutput {
            peak,
            svg_path: result.path.to_svg_data(),
            result,
        })
    }
}
