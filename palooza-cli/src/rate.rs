//! Rate command implementation for the Palooza CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use palooza_core::{RandomSource, RatingComposer, RatingRecord, RawSignal};
use palooza_signals::{
    AnnotationSet, demo_signal, from_annotations, from_completion_envelope,
    from_structured_response, from_structured_text,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::input::{read_bytes, read_text, require_existing};
use crate::{
    ARG_RATE_LANDMARK, ARG_RATE_PAYLOAD, ARG_RATE_SEED, ARG_RATE_SOURCE, CliError,
    ENV_RATE_LANDMARK, ENV_RATE_PAYLOAD, USAGE_PATH, USAGE_RATE_LANDMARK, write_json,
};

/// Which producer turns the payload into a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SignalSource {
    /// A structured analysis answer, bare or inside a chat-completion envelope.
    #[default]
    Structured,
    /// An image-recognition annotation response.
    Annotations,
    /// Random flattering ratings; no payload is read.
    Demo,
}

/// CLI arguments for the `rate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Compose a rating record from an analysis payload. The \
                 payload is read with the chosen signal source, blended with \
                 the landmark bonus and printed as JSON. Options can come \
                 from CLI flags, configuration files, or environment \
                 variables.",
    about = "Rate a pigeon photo"
)]
#[ortho_config(prefix = "PALOOZA")]
pub(crate) struct RateArgs {
    /// Path to the JSON payload produced by the analysis service.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) payload: Option<Utf8PathBuf>,
    /// Landmark where the pigeon was photographed.
    #[arg(long = ARG_RATE_LANDMARK, value_name = "name")]
    #[serde(default)]
    pub(crate) landmark: Option<String>,
    /// How to interpret the payload (defaults to `structured`).
    #[arg(long = ARG_RATE_SOURCE, value_enum, value_name = "source")]
    #[serde(default)]
    pub(crate) source: Option<SignalSource>,
    /// Seed for reproducible jitter and template choice.
    #[arg(long = ARG_RATE_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

impl RateArgs {
    pub(crate) fn into_config(self) -> Result<RateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RateConfig::try_from(merged)
    }
}

/// Resolved `rate` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RateConfig {
    /// Payload file; absent only for the demo source.
    pub(crate) payload: Option<Utf8PathBuf>,
    /// Landmark key passed to the composer.
    pub(crate) landmark: String,
    /// Producer used for the payload.
    pub(crate) source: SignalSource,
    /// Seed for the random source; entropy when absent.
    pub(crate) seed: Option<u64>,
}

impl RateConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        self.payload
            .as_deref()
            .map_or(Ok(()), |path| require_existing(path, ARG_RATE_PAYLOAD))
    }

    fn payload_path(&self) -> Result<&Utf8Path, CliError> {
        self.payload.as_deref().ok_or(CliError::MissingArgument {
            field: ARG_RATE_PAYLOAD,
            usage: USAGE_PATH,
            env: ENV_RATE_PAYLOAD,
        })
    }

    fn composer(&self) -> RatingComposer {
        self.seed
            .map_or_else(RatingComposer::from_entropy, RatingComposer::seeded)
    }
}

impl TryFrom<RateArgs> for RateConfig {
    type Error = CliError;

    fn try_from(args: RateArgs) -> Result<Self, Self::Error> {
        let landmark = args.landmark.ok_or(CliError::MissingArgument {
            field: ARG_RATE_LANDMARK,
            usage: USAGE_RATE_LANDMARK,
            env: ENV_RATE_LANDMARK,
        })?;
        let source = args.source.unwrap_or_default();
        let payload = match (args.payload, source) {
            (Some(path), SignalSource::Demo) => {
                log::debug!("demo {ARG_RATE_SOURCE} ignores payload {path}");
                None
            }
            (Some(path), _) => Some(path),
            (None, SignalSource::Demo) => None,
            (None, _) => {
                return Err(CliError::MissingArgument {
                    field: ARG_RATE_PAYLOAD,
                    usage: USAGE_PATH,
                    env: ENV_RATE_PAYLOAD,
                });
            }
        };
        Ok(Self {
            payload,
            landmark,
            source,
            seed: args.seed,
        })
    }
}

pub(crate) fn run_rate_with(args: RateArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let record = execute_rate(&config)?;
    write_json(writer, &record)
}

/// Produce a signal for `config` and compose it into a record.
pub(crate) fn execute_rate(config: &RateConfig) -> Result<RatingRecord, CliError> {
    let mut composer = config.composer();
    let signal = produce_signal(config, composer.rng())?;
    log::debug!(
        "rating via {:?} at {:?} with seed {:?}",
        config.source,
        config.landmark,
        config.seed
    );
    Ok(composer.compose(&signal, &config.landmark))
}

fn produce_signal(config: &RateConfig, rng: &mut dyn RandomSource) -> Result<RawSignal, CliError> {
    match config.source {
        SignalSource::Demo => Ok(demo_signal(rng)),
        SignalSource::Structured => {
            let path = config.payload_path()?;
            Ok(structured_bytes_signal(path, read_bytes(path)?))
        }
        SignalSource::Annotations => {
            let annotations = load_annotations(config.payload_path()?)?;
            Ok(from_annotations(&annotations, rng))
        }
    }
}

/// Interpret raw structured payload bytes read from `path`.
///
/// Bytes that are not UTF-8 yield an absent signal.
fn structured_bytes_signal(path: &Utf8Path, bytes: Vec<u8>) -> RawSignal {
    String::from_utf8(bytes).map_or_else(
        |err| {
            log::warn!("structured payload {path} is not UTF-8 ({err}); using neutral ratings");
            RawSignal::absent()
        },
        |text| structured_signal(&text),
    )
}

/// Interpret structured payload text, unwrapping a chat-completion envelope
/// when one is present.
pub(crate) fn structured_signal(text: &str) -> RawSignal {
    match serde_json::from_str::<Value>(text) {
        Ok(payload) if payload.get("choices").is_some() => from_completion_envelope(&payload),
        Ok(payload) => from_structured_response(&payload),
        Err(_) => from_structured_text(text),
    }
}

/// Load annotations from a vision response.
///
/// Accepts either a single annotation object or a batch response whose
/// first entry sits under `responses`.
pub(crate) fn load_annotations(path: &Utf8Path) -> Result<AnnotationSet, CliError> {
    let parse_error = |source| CliError::ParseAnnotations {
        path: path.to_path_buf(),
        source,
    };
    let text = read_text(path)?;
    let mut payload: Value = serde_json::from_str(&text).map_err(parse_error)?;
    if let Some(first) = payload.pointer_mut("/responses/0") {
        payload = first.take();
    }
    let annotations: AnnotationSet = serde_json::from_value(payload).map_err(parse_error)?;
    if log::log_enabled!(log::Level::Debug) {
        match serde_json::to_string(&annotations.summary()) {
            Ok(summary) => log::debug!("annotation summary: {summary}"),
            Err(err) => log::debug!("annotation summary unavailable: {err}"),
        }
    }
    Ok(annotations)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RateConfig, CliError> {
    let merged = RateArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RateConfig::try_from(merged)
}
