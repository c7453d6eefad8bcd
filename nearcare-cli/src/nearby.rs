//! Nearby command implementation for the nearcare CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::debug;
use nearcare_core::{
    AddressLabel, Coordinate, DEFAULT_ORIGIN_LABEL, DirectoryLookup, FixedLocationProvider,
    Hospital, RankedCandidate, ResolvedOrigin, ReverseGeocoder, SimulatedHospitalDirectory,
    UnsupportedLocationProvider, directions_url, format_distance, label_origin, nearest,
    resolve_origin,
};
use nearcare_data::directory::JsonHospitalDirectory;
use nearcare_data::geocode::{DEFAULT_NOMINATIM_URL, NominatimGeocoder};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{
    ARG_GEOCODE, ARG_HOSPITALS, ARG_LATITUDE, ARG_LIMIT, ARG_LONGITUDE, ARG_NOMINATIM_BASE_URL,
    CliError, ENV_LATITUDE, ENV_LONGITUDE,
};

/// Number of hospitals listed when `--limit` is not given.
pub(crate) const DEFAULT_LIMIT: usize = 5;

/// CLI arguments for the `nearby` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank hospitals by great-circle distance from an origin. \
                 Without --latitude and --longitude the origin falls back \
                 to New York City. Hospitals come from a JSON file when \
                 --hospitals is given and from a simulated directory \
                 around the origin otherwise.",
    about = "List the hospitals nearest to an origin"
)]
#[ortho_config(prefix = "NEARCARE")]
pub(crate) struct NearbyArgs {
    /// Origin latitude in decimal degrees.
    #[arg(long = ARG_LATITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) latitude: Option<f64>,
    /// Origin longitude in decimal degrees.
    #[arg(long = ARG_LONGITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) longitude: Option<f64>,
    /// Maximum number of hospitals to list (default 5).
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Path to a JSON array of hospital records.
    #[arg(long = ARG_HOSPITALS, value_name = "path")]
    #[serde(default)]
    pub(crate) hospitals: Option<Utf8PathBuf>,
    /// Label the origin with a reverse-geocoded address.
    #[arg(
        long = ARG_GEOCODE,
        value_name = "bool",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) geocode: Option<bool>,
    /// Base URL for the Nominatim server.
    #[arg(long = ARG_NOMINATIM_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) nominatim_base_url: Option<String>,
}

impl NearbyArgs {
    pub(crate) fn into_config(self) -> Result<NearbyConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        NearbyConfig::try_from(merged)
    }
}

/// Resolved `nearby` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NearbyConfig {
    /// Explicit origin, or `None` to use the default origin.
    pub(crate) origin: Option<Coordinate>,
    pub(crate) limit: usize,
    /// Hospital file; the simulated directory is used when absent.
    pub(crate) hospitals: Option<Utf8PathBuf>,
    pub(crate) geocode: bool,
    pub(crate) nominatim_base_url: String,
}

impl NearbyConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        match &self.hospitals {
            Some(path) => Self::require_existing(path, ARG_HOSPITALS),
            None => Ok(()),
        }
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match nearcare_fs::is_regular_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<NearbyArgs> for NearbyConfig {
    type Error = CliError;

    fn try_from(args: NearbyArgs) -> Result<Self, Self::Error> {
        let origin = match (args.latitude, args.longitude) {
            (Some(latitude), Some(longitude)) => Some(
                Coordinate::new(latitude, longitude).map_err(CliError::InvalidOrigin)?,
            ),
            (None, None) => None,
            (Some(_), None) => {
                return Err(CliError::IncompleteOrigin {
                    missing: ARG_LONGITUDE,
                    env: ENV_LONGITUDE,
                });
            }
            (None, Some(_)) => {
                return Err(CliError::IncompleteOrigin {
                    missing: ARG_LATITUDE,
                    env: ENV_LATITUDE,
                });
            }
        };

        Ok(Self {
            origin,
            limit: args.limit.unwrap_or(DEFAULT_LIMIT),
            hospitals: args.hospitals,
            geocode: args.geocode.unwrap_or(false),
            nominatim_base_url: args
                .nominatim_base_url
                .unwrap_or_else(|| DEFAULT_NOMINATIM_URL.to_owned()),
        })
    }
}

/// Builds the collaborators for one `nearby` invocation.
pub(super) trait NearbyServices {
    fn directory(
        &self,
        config: &NearbyConfig,
    ) -> Result<Box<dyn DirectoryLookup<Payload = Hospital>>, CliError>;

    fn geocoder(&self, config: &NearbyConfig) -> Result<Box<dyn ReverseGeocoder>, CliError>;
}

pub(super) struct DefaultNearbyServices;

impl NearbyServices for DefaultNearbyServices {
    fn directory(
        &self,
        config: &NearbyConfig,
    ) -> Result<Box<dyn DirectoryLookup<Payload = Hospital>>, CliError> {
        match &config.hospitals {
            Some(path) => Ok(Box::new(JsonHospitalDirectory::open(path)?)),
            None => Ok(Box::new(SimulatedHospitalDirectory)),
        }
    }

    fn geocoder(&self, config: &NearbyConfig) -> Result<Box<dyn ReverseGeocoder>, CliError> {
        let geocoder =
            NominatimGeocoder::new(config.nominatim_base_url.clone()).map_err(|source| {
                CliError::BuildGeocoder {
                    base_url: config.nominatim_base_url.clone(),
                    source,
                }
            })?;
        Ok(Box::new(geocoder))
    }
}

/// JSON document printed by `nearby`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct NearbyReport {
    pub(crate) origin: OriginReport,
    pub(crate) hospitals: Vec<HospitalReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct OriginReport {
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
    pub(crate) label: String,
    /// Whether the default origin stood in for a missing location.
    pub(crate) fallback: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct HospitalReport {
    pub(crate) id: u64,
    pub(crate) name: String,
    pub(crate) address: String,
    pub(crate) phone: String,
    pub(crate) rating: f32,
    pub(crate) reviews: u32,
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
    pub(crate) distance_km: f64,
    pub(crate) distance: String,
    pub(crate) directions_url: String,
    /// Absent when the hospital has no dialable phone number.
    pub(crate) call_url: Option<String>,
}

impl From<RankedCandidate<Hospital>> for HospitalReport {
    fn from(ranked: RankedCandidate<Hospital>) -> Self {
        let distance_km = ranked.distance_km;
        let candidate = ranked.into_candidate();
        let call_url = candidate.payload.call_url().ok();
        let Hospital {
            name,
            address,
            phone,
            rating,
            reviews,
        } = candidate.payload;
        Self {
            id: candidate.id,
            name,
            address,
            phone,
            rating,
            reviews,
            latitude: candidate.location.latitude(),
            longitude: candidate.location.longitude(),
            distance_km,
            distance: format_distance(distance_km),
            directions_url: directions_url(candidate.location),
            call_url,
        }
    }
}

pub(super) fn run_nearby(args: NearbyArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_nearby_with(args, &DefaultNearbyServices, &mut stdout)
}

pub(super) fn run_nearby_with(
    args: NearbyArgs,
    services: &dyn NearbyServices,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let report = execute_nearby(args, services)?;
    write_report(writer, &report)
}

fn execute_nearby(
    args: NearbyArgs,
    services: &dyn NearbyServices,
) -> Result<NearbyReport, CliError> {
    let config = resolve_nearby_config(args)?;
    let origin = match config.origin {
        Some(coordinate) => resolve_origin(&FixedLocationProvider(coordinate)),
        None => resolve_origin(&UnsupportedLocationProvider),
    };
    let label = origin_label(&config, &origin, services)?;

    let directory = services.directory(&config)?;
    let candidates = directory.candidates_near(origin.coordinate)?;
    debug!("ranking {} hospitals", candidates.len());
    let hospitals = nearest(origin.coordinate, candidates, config.limit)
        .into_iter()
        .map(HospitalReport::from)
        .collect();

    Ok(NearbyReport {
        origin: OriginReport {
            latitude: origin.coordinate.latitude(),
            longitude: origin.coordinate.longitude(),
            label: label.to_string(),
            fallback: origin.is_fallback(),
        },
        hospitals,
    })
}

fn origin_label(
    config: &NearbyConfig,
    origin: &ResolvedOrigin,
    services: &dyn NearbyServices,
) -> Result<AddressLabel, CliError> {
    if origin.is_fallback() {
        return Ok(AddressLabel::new(DEFAULT_ORIGIN_LABEL));
    }
    if config.geocode {
        let geocoder = services.geocoder(config)?;
        return Ok(label_origin(geocoder.as_ref(), origin.coordinate));
    }
    Ok(AddressLabel::from_coordinate(origin.coordinate))
}

fn resolve_nearby_config(args: NearbyArgs) -> Result<NearbyConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn write_report(writer: &mut dyn Write, report: &NearbyReport) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerializeReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteReport)?;
    writer.write_all(b"\n").map_err(CliError::WriteReport)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<NearbyConfig, CliError> {
    let merged = NearbyArgs::merge_from_layers(layers).map_err(CliError::from)?;
    NearbyConfig::try_from(merged)
}
