use std::collections::BTreeMap;
use std::sync::OnceLock;

use caffeine_errors::Layer;
use http::StatusCode;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Status returned for any layer/kind pair missing from the table
pub const FALLBACK_STATUS: StatusCode = StatusCode::INTERNAL_SERVER_ERROR;

const STATUS_CODES: &[(Layer, &str, StatusCode)] = &[
    (Layer::Domain, "InvalidDomainDataException", StatusCode::BAD_REQUEST),
    (Layer::Domain, "InvalidPropertyException", StatusCode::BAD_REQUEST),
    (Layer::Domain, "OperationFailedException", StatusCode::NOT_ACCEPTABLE),
    (Layer::Application, "UnauthorizedException", StatusCode::UNAUTHORIZED),
    (Layer::Application, "BadRequestException", StatusCode::BAD_REQUEST),
    (Layer::Application, "InvalidJWTException", StatusCode::BAD_REQUEST),
    (Layer::Application, "InvalidOperationException", StatusCode::NOT_ACCEPTABLE),
    (Layer::Application, "ResourceAlreadyExistsException", StatusCode::CONFLICT),
    (Layer::Application, "ResourceNotFoundException", StatusCode::NOT_FOUND),
    (Layer::Application, "UnableToSignPayloadException", StatusCode::INTERNAL_SERVER_ERROR),
    (Layer::Infra, "ConflictException", StatusCode::CONFLICT),
    (Layer::Infra, "DatabaseUnavailableException", StatusCode::SERVICE_UNAVAILABLE),
    (Layer::Infra, "ForeignDependencyConstraintException", StatusCode::INTERNAL_SERVER_ERROR),
    (Layer::Infra, "OperationNotAllowedException", StatusCode::BAD_GATEWAY),
    (Layer::Infra, "ResourceNotFoundException", StatusCode::NOT_FOUND),
    (Layer::Infra, "UnexpectedCacheValueException", StatusCode::INTERNAL_SERVER_ERROR),
    (Layer::Infra, "MissingPluginDependencyException", StatusCode::SERVICE_UNAVAILABLE),
    (Layer::Infra, "InvalidEnvironmentException", StatusCode::INTERNAL_SERVER_ERROR),
    (Layer::Internal, "InvalidEntityData", StatusCode::INTERNAL_SERVER_ERROR),
    (Layer::Internal, "InvalidObjectValueException", StatusCode::INTERNAL_SERVER_ERROR),
    (Layer::Internal, "UnknownException", StatusCode::INTERNAL_SERVER_ERROR),
];

static STANDARD: OnceLock<StatusCodeMap> = OnceLock::new();

/// Read-only table of layer -> exception kind -> HTTP status
#[derive(Debug)]
pub struct StatusCodeMap {
    layers: BTreeMap<Layer, BTreeMap<&'static str, StatusCode>>,
}

impl StatusCodeMap {
    /// The process wide table every caffeine service shares
    pub fn standard() -> &'static Self {
        STANDARD.get_or_init(|| {
            let mut layers: BTreeMap<Layer, BTreeMap<&'static str, StatusCode>> = BTreeMap::new();

            for &(layer, kind, status) in STATUS_CODES {
                layers.entry(layer).or_default().insert(kind, status);
            }

            Self { layers }
        })
    }

    /// Look up a pair without applying the fallback
    pub fn get(&self, layer: Layer, kind: &str) -> Option<StatusCode> {
        self.layers.get(&layer)?.get(kind).copied()
    }

    /// Status for a pair, [`FALLBACK_STATUS`] when it is not mapped
    pub fn status_for(&self, layer: Layer, kind: &str) -> StatusCode {
        self.get(layer, kind).unwrap_or(FALLBACK_STATUS)
    }

    /// All mapped pairs, ordered by layer then kind
    pub fn iter(&self) -> impl Iterator<Item = (Layer, &'static str, StatusCode)> + '_ {
        self.layers
            .iter()
            .flat_map(|(layer, kinds)| kinds.iter().map(|(kind, status)| (*layer, *kind, *status)))
    }

    pub fn len(&self) -> usize {
        self.layers.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Serialized as `{ "<layer>": { "<kind>": <status> } }`
impl Serialize for StatusCodeMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.layers.len()))?;

        for (layer, kinds) in &self.layers {
            let kinds: BTreeMap<&str, u16> = kinds.iter().map(|(kind, status)| (*kind, status.as_u16())).collect();
            map.serialize_entry(layer, &kinds)?;
        }

        map.end()
    }
}
