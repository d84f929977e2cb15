use phf::{Map, phf_map};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMolecule {
    pub id: String,
    pub display_name: String,
}

/// Capability to turn a user- or demo-facing identifier into a canonical
/// molecule id and a display name.
pub trait MoleculeResolver {
    fn resolve(&self, identifier: &str) -> Option<ResolvedMolecule>;
}

// Lower-case alias -> (id, display name) for the molecules used by the built-in demos.
static DEMO_MOLECULES: Map<&'static str, (&'static str, &'static str)> = phf_map! {
    "ch3br" => ("CH3Br", "Bromomethane"),
    "bromomethane" => ("CH3Br", "Bromomethane"),
    "methyl bromide" => ("CH3Br", "Bromomethane"),
    "ch3cl" => ("CH3Cl", "Chloromethane"),
    "chloromethane" => ("CH3Cl", "Chloromethane"),
    "ch3i" => ("CH3I", "Iodomethane"),
    "iodomethane" => ("CH3I", "Iodomethane"),
    "(ch3)3cbr" => ("(CH3)3CBr", "2-Bromo-2-methylpropane"),
    "tert-butyl bromide" => ("(CH3)3CBr", "2-Bromo-2-methylpropane"),
    "ch3ch2br" => ("CH3CH2Br", "Bromoethane"),
    "bromoethane" => ("CH3CH2Br", "Bromoethane"),
    "oh-" => ("OH-", "Hydroxide"),
    "hydroxide" => ("OH-", "Hydroxide"),
    "cn-" => ("CN-", "Cyanide"),
    "cyanide" => ("CN-", "Cyanide"),
    "br-" => ("Br-", "Bromide"),
    "bromide" => ("Br-", "Bromide"),
    "cl-" => ("Cl-", "Chloride"),
    "chloride" => ("Cl-", "Chloride"),
    "i-" => ("I-", "Iodide"),
    "iodide" => ("I-", "Iodide"),
    "ch3oh" => ("CH3OH", "Methanol"),
    "methanol" => ("CH3OH", "Methanol"),
    "h2o" => ("H2O", "Water"),
    "water" => ("H2O", "Water"),
};

/// Resolver backed only by the static demo table.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackResolver;

impl MoleculeResolver for FallbackResolver {
    fn resolve(&self, identifier: &str) -> Option<ResolvedMolecule> {
        DEMO_MOLECULES
            .get(identifier.trim().to_lowercase().as_str())
            .map(|&(id, display_name)| ResolvedMolecule {
                id: id.to_string(),
                display_name: display_name.to_string(),
            })
    }
}

/// Tries `primary`, then the demo table. Unknown identifiers resolve to
/// themselves so callers always have something to display.
pub fn resolve_or_fallback(primary: &dyn MoleculeResolver, identifier: &str) -> ResolvedMolecule {
    primary
        .resolve(identifier)
        .or_else(|| FallbackResolver.resolve(identifier))
        .unwrap_or_else(|| ResolvedMolecule {
            id: identifier.trim().to_string(),
            display_name: identifier.trim().to_string(),
        })
}
