use crate::cli::{SpeciesArgs, SpeciesCommands};
use crate::error::{CliError, Result};
use crate::utils::parser;
use reactyl::core::species::resolver::{FallbackResolver, MoleculeResolver, resolve_or_fallback};
use reactyl::core::species::thermo::ThermoTable;
use tracing::info;

pub fn run(args: SpeciesArgs) -> Result<()> {
    let table = args.table.as_deref().map(ThermoTable::load).transpose()?;
    if let (Some(table), Some(path)) = (&table, &args.table) {
        info!("Loaded {} species from {:?}", table.len(), path);
    }

    match args.command {
        SpeciesCommands::Resolve { name } => {
            println!("{}", describe(table.as_ref(), &name));
        }
        SpeciesCommands::Enthalpy {
            reactants,
            products,
        } => {
            let table = table.ok_or_else(|| {
                CliError::Argument(
                    "'species enthalpy' requires a thermochemistry table (--table).".to_string(),
                )
            })?;
            let delta_h = enthalpy(&table, &reactants, &products)?;
            println!(
                "{} -> {}\nΔH(298 K) = {:+.2} kJ/mol",
                reactants.join(" + "),
                products.join(" + "),
                delta_h
            );
        }
    }
    Ok(())
}

fn describe(table: Option<&ThermoTable>, name: &str) -> String {
    let resolver: &dyn MoleculeResolver = match table {
        Some(table) => table,
        None => &FallbackResolver,
    };
    let resolved = resolve_or_fallback(resolver, name);
    let mass = table
        .and_then(|t| t.molecular_mass(&resolved.id))
        .map(|m| format!("{:.3} g/mol", m))
        .unwrap_or_else(|| "unknown".to_string());
    format!(
        "id           : {}\ndisplay name : {}\nmolar mass   : {}",
        resolved.id, resolved.display_name, mass
    )
}

fn enthalpy(table: &ThermoTable, reactants: &[String], products: &[String]) -> Result<f64> {
    let parse_side = |terms: &[String]| -> Result<Vec<(f64, String)>> {
        terms
            .iter()
            .map(|t| parser::parse_stoichiometric_term(t).map_err(|e| CliError::Argument(e.to_string())))
            .collect()
    };
    let reactants = parse_side(reactants)?;
    let products = parse_side(products)?;

    fn borrow(side: &[(f64, String)]) -> Vec<(f64, &str)> {
        side.iter().map(|(c, s)| (*c, s.as_str())).collect()
    }
    Ok(table.reaction_enthalpy(&borrow(&reactants), &borrow(&products))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reactyl::core::species::thermo::ThermoError;

    const TABLE_CSV: &str = "\
common_name,structure,enthalpy_of_formation_0k,enthalpy_of_formation_298k,uncertainty,molecular_mass,cas_rn
Bromomethane,CH3Br,-23.8,-35.4,0.3,94.939,74-83-9
Hydroxide,OH-,-139.4,-143.2,0.1,17.007,14280-30-9
Methanol,CH3OH,-189.8,-200.9,0.2,32.042,67-56-1
Bromide,Br-,,-219.0,,79.904,24959-67-9
";

    fn table() -> ThermoTable {
        ThermoTable::from_reader(TABLE_CSV.as_bytes()).unwrap()
    }

    fn terms(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn describe_uses_table_mass_when_available() {
        let text = describe(Some(&table()), "bromomethane");
        assert!(text.contains("id           : CH3Br"));
        assert!(text.contains("94.939 g/mol"));
    }

    #[test]
    fn describe_without_table_falls_back_to_demo_names() {
        let text = describe(None, "OH-");
        assert!(text.contains("display name : Hydroxide"));
        assert!(text.contains("molar mass   : unknown"));
    }

    #[test]
    fn enthalpy_of_sn2_hydrolysis() {
        let delta_h = enthalpy(
            &table(),
            &terms(&["CH3Br", "OH-"]),
            &terms(&["CH3OH", "Br-"]),
        )
        .unwrap();
        // (-200.9 - 219.0) - (-35.4 - 143.2)
        assert!((delta_h - (-241.3)).abs() < 1e-9);
    }

    #[test]
    fn enthalpy_reports_unknown_species() {
        let result = enthalpy(&table(), &terms(&["CH3F"]), &terms(&["CH3OH"]));
        assert!(matches!(
            result,
            Err(CliError::Thermo(ThermoError::UnknownSpecies(name))) if name == "CH3F"
        ));
    }

    #[test]
    fn enthalpy_rejects_malformed_terms() {
        let result = enthalpy(&table(), &terms(&["x CH3Br"]), &terms(&["CH3OH"]));
        assert!(matches!(result, Err(CliError::Argument(_))));
    }
}
