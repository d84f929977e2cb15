use super::resolver::{MoleculeResolver, ResolvedMolecule};
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::marker::PhantomData;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

/// One row of a thermochemistry table.
///
/// Accepts both the snake-case CSV headers and the keys written by the
/// table-extraction scripts (`enthalpy_of_formation_298K`, `uncertainty_value`,
/// ...). Empty cells, empty strings and `null` all read as `None`.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct SpeciesRecord {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub common_name: Option<String>,
    /// Formula or line notation (e.g. `CH3Br`).
    #[serde(default, deserialize_with = "blank_as_none")]
    pub structure: Option<String>,
    /// Standard enthalpy of formation at 0 K, kJ/mol.
    #[serde(
        default,
        alias = "enthalpy_of_formation_0K",
        deserialize_with = "blank_as_none"
    )]
    pub enthalpy_of_formation_0k: Option<f64>,
    /// Standard enthalpy of formation at 298.15 K, kJ/mol.
    #[serde(
        default,
        alias = "enthalpy_of_formation_298K",
        deserialize_with = "blank_as_none"
    )]
    pub enthalpy_of_formation_298k: Option<f64>,
    /// Standard molar entropy at 298.15 K, J/(mol K).
    #[serde(default, alias = "entropy_298K", deserialize_with = "blank_as_none")]
    pub entropy_298k: Option<f64>,
    /// Standard Gibbs energy of formation at 298.15 K, kJ/mol.
    #[serde(
        default,
        alias = "gibbs_free_energy_298K",
        deserialize_with = "blank_as_none"
    )]
    pub gibbs_free_energy_298k: Option<f64>,
    /// `gas`, `liquid`, `solid` or `aqueous`.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub phase: Option<String>,
    #[serde(default, alias = "uncertainty_value", deserialize_with = "blank_as_none")]
    pub uncertainty: Option<f64>,
    /// Molar mass, g/mol.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub molecular_mass: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub molecular_mass_uncertainty: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub cas_rn: Option<String>,
    /// Rank of the species in the source table.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub relative_rank: Option<u32>,
}

impl SpeciesRecord {
    /// Stable identifier: the structure when known, otherwise the common name.
    pub fn id(&self) -> Option<&str> {
        non_empty(&self.structure).or(non_empty(&self.common_name))
    }

    pub fn display_name(&self) -> Option<&str> {
        non_empty(&self.common_name).or(non_empty(&self.structure))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

// CSV cells arrive as strings or inferred numbers, JSON values as numbers,
// strings or null. Anything blank is a missing value.
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    deserializer.deserialize_any(BlankAsNone(PhantomData))
}

struct BlankAsNone<T>(PhantomData<T>);

impl<T> BlankAsNone<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fn parse<E: de::Error>(text: &str) -> Result<Option<T>, E> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        text.parse()
            .map(Some)
            .map_err(|e| E::custom(format!("invalid value '{}': {}", text, e)))
    }
}

impl<'de, T> Visitor<'de> for BlankAsNone<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Value = Option<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number, a string, or a blank value")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Self::parse(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Self::parse(&v.to_string())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Self::parse(&v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Self::parse(&v.to_string())
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Self::parse(&v.to_string())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }
}

#[derive(Debug, Error)]
pub enum ThermoError {
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("JSON parsing error for '{path}': {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("Failed to open '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Species '{0}' is not in the thermochemistry table")]
    UnknownSpecies(String),
    #[error("No 298 K enthalpy of formation recorded for species '{0}'")]
    MissingEnthalpy(String),
}

/// One side of a balanced equation: `(coefficient, species identifier)`.
pub type Stoichiometry<'a> = [(f64, &'a str)];

#[derive(Debug, Clone, Default)]
pub struct ThermoTable {
    records: Vec<SpeciesRecord>,
    index: HashMap<String, usize>,
}

fn lookup_key(identifier: &str) -> String {
    identifier.trim().to_lowercase()
}

impl ThermoTable {
    /// Loads a table from disk. Files ending in `.json` are read as a JSON
    /// array of records; anything else as CSV with a header row.
    pub fn load(path: &Path) -> Result<Self, ThermoError> {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let table = if is_json {
            Self::load_json(path)?
        } else {
            Self::load_csv(path)?
        };
        debug!("Loaded {} species from {:?}", table.len(), path);
        Ok(table)
    }

    fn load_csv(path: &Path) -> Result<Self, ThermoError> {
        let to_error = |source| ThermoError::Csv {
            path: path.to_string_lossy().to_string(),
            source,
        };
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(to_error)?;
        Self::from_csv(reader).map_err(to_error)
    }

    fn load_json(path: &Path) -> Result<Self, ThermoError> {
        let file = File::open(path).map_err(|source| ThermoError::Io {
            path: path.to_string_lossy().to_string(),
            source,
        })?;
        Self::from_json_reader(BufReader::new(file)).map_err(|e| match e {
            ThermoError::Json { source, .. } => ThermoError::Json {
                path: path.to_string_lossy().to_string(),
                source,
            },
            other => other,
        })
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ThermoError> {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        Self::from_csv(reader).map_err(|source| ThermoError::Csv {
            path: "<reader>".to_string(),
            source,
        })
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, ThermoError> {
        let records: Vec<SpeciesRecord> =
            serde_json::from_reader(reader).map_err(|source| ThermoError::Json {
                path: "<reader>".to_string(),
                source,
            })?;
        let mut table = Self::default();
        for record in records {
            table.insert(record);
        }
        Ok(table)
    }

    fn from_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<Self, csv::Error> {
        let mut table = Self::default();
        for result in reader.deserialize::<SpeciesRecord>() {
            table.insert(result?);
        }
        Ok(table)
    }

    /// Adds a record, indexing it by common name and by structure. On a clash
    /// the earlier record keeps the key.
    pub fn insert(&mut self, record: SpeciesRecord) {
        let position = self.records.len();
        for key in [record.common_name.as_deref(), record.structure.as_deref()]
            .into_iter()
            .flatten()
            .filter(|k| !k.is_empty())
            .map(lookup_key)
        {
            if self.index.contains_key(&key) {
                warn!("Duplicate species key '{}' ignored", key);
                continue;
            }
            self.index.insert(key, position);
        }
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[SpeciesRecord] {
        &self.records
    }

    /// Case-insensitive lookup by common name or structure.
    pub fn get(&self, identifier: &str) -> Option<&SpeciesRecord> {
        self.index
            .get(&lookup_key(identifier))
            .map(|&position| &self.records[position])
    }

    pub fn molecular_mass(&self, identifier: &str) -> Option<f64> {
        self.get(identifier).and_then(|r| r.molecular_mass)
    }

    fn enthalpy_298k(&self, identifier: &str) -> Result<f64, ThermoError> {
        let record = self
            .get(identifier)
            .ok_or_else(|| ThermoError::UnknownSpecies(identifier.to_string()))?;
        record
            .enthalpy_of_formation_298k
            .ok_or_else(|| ThermoError::MissingEnthalpy(identifier.to_string()))
    }

    fn side_enthalpy(&self, side: &Stoichiometry) -> Result<f64, ThermoError> {
        side.iter().try_fold(0.0, |acc, &(coefficient, identifier)| {
            Ok(acc + coefficient * self.enthalpy_298k(identifier)?)
        })
    }

    /// Standard reaction enthalpy at 298 K via Hess's law:
    /// `sum(products) - sum(reactants)` of the formation enthalpies.
    pub fn reaction_enthalpy(
        &self,
        reactants: &Stoichiometry,
        products: &Stoichiometry,
    ) -> Result<f64, ThermoError> {
        Ok(self.side_enthalpy(products)? - self.side_enthalpy(reactants)?)
    }
}

impl MoleculeResolver for ThermoTable {
    fn resolve(&self, identifier: &str) -> Option<ResolvedMolecule> {
        let record = self.get(identifier)?;
        Some(ResolvedMolecule {
            id: record.id()?.to_string(),
            display_name: record.display_name()?.to_string(),
        })
    }
}
