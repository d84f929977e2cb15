use nalgebra::{Point3, Vector3};
use reactyl::core::models::reaction::ReactionType;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid vector '{0}'. Expected three comma-separated numbers (e.g., '0,0,-5').")]
    InvalidVector(String),

    #[error("Invalid number '{value}' in component {component} of '{input}'.")]
    InvalidComponent {
        component: usize,
        value: String,
        input: String,
    },

    #[error("Unknown reaction type '{0}'. Expected one of SN2, SN1, E2.")]
    UnknownReactionType(String),

    #[error("Invalid stoichiometric term '{0}'. Expected 'SPECIES' or 'COEFFICIENT SPECIES' (e.g., '2 H2O').")]
    InvalidTerm(String),
}

pub fn parse_vector3(s: &str) -> Result<Vector3<f64>, ParseError> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(ParseError::InvalidVector(s.to_string()));
    }

    let mut components = [0.0; 3];
    for (i, part) in parts.iter().enumerate() {
        components[i] = part
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ParseError::InvalidComponent {
                component: i,
                value: part.to_string(),
                input: s.to_string(),
            })?;
    }
    Ok(Vector3::from(components))
}

pub fn parse_point3(s: &str) -> Result<Point3<f64>, ParseError> {
    parse_vector3(s).map(Point3::from)
}

pub fn parse_reaction_type(s: &str) -> Result<ReactionType, ParseError> {
    ReactionType::from_str(s).map_err(|_| ParseError::UnknownReactionType(s.to_string()))
}

/// Parses `"H2O"` as `(1.0, "H2O")` and `"2 H2O"` as `(2.0, "H2O")`.
pub fn parse_stoichiometric_term(s: &str) -> Result<(f64, String), ParseError> {
    let invalid = || ParseError::InvalidTerm(s.to_string());
    let mut tokens = s.split_whitespace();
    let first = tokens.next().ok_or_else(invalid)?;

    let (coefficient, species) = match tokens.next() {
        Some(species) => {
            let coefficient = first
                .parse::<f64>()
                .ok()
                .filter(|c| c.is_finite() && *c > 0.0)
                .ok_or_else(invalid)?;
            (coefficient, species)
        }
        None => (1.0, first),
    };

    if tokens.next().is_some() {
        return Err(invalid());
    }
    Ok((coefficient, species.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_vector3_accepts_whitespace_and_negatives() {
        assert_eq!(
            parse_vector3(" 1.5, -2 ,0 ").unwrap(),
            Vector3::new(1.5, -2.0, 0.0)
        );
    }

    #[test]
    fn parse_vector3_rejects_wrong_arity() {
        assert_eq!(
            parse_vector3("1,2"),
            Err(ParseError::InvalidVector("1,2".to_string()))
        );
        assert!(parse_vector3("1,2,3,4").is_err());
    }

    #[test]
    fn parse_vector3_reports_bad_component() {
        let err = parse_vector3("1,x,3").unwrap_err();
        assert!(matches!(err, ParseError::InvalidComponent { component: 1, .. }));
    }

    #[test]
    fn parse_vector3_rejects_non_finite_components() {
        assert!(parse_vector3("NaN,0,0").is_err());
        assert!(parse_vector3("0,inf,0").is_err());
    }

    #[test]
    fn parse_point3_wraps_vector() {
        assert_eq!(parse_point3("0,0,-5").unwrap(), Point3::new(0.0, 0.0, -5.0));
    }

    #[test]
    fn parse_reaction_type_is_case_insensitive() {
        assert_eq!(parse_reaction_type("e2").unwrap(), ReactionType::E2);
        assert_eq!(
            parse_reaction_type("SN2-ish"),
            Err(ParseError::UnknownReactionType("SN2-ish".to_string()))
        );
    }

    #[test]
    fn stoichiometric_term_defaults_to_unit_coefficient() {
        assert_eq!(
            parse_stoichiometric_term("CH3Br").unwrap(),
            (1.0, "CH3Br".to_string())
        );
    }

    #[test]
    fn stoichiometric_term_reads_leading_coefficient() {
        assert_eq!(
            parse_stoichiometric_term("2 H2O").unwrap(),
            (2.0, "H2O".to_string())
        );
        assert_eq!(
            parse_stoichiometric_term("0.5 O2").unwrap(),
            (0.5, "O2".to_string())
        );
    }

    #[test]
    fn stoichiometric_term_rejects_malformed_input() {
        assert!(parse_stoichiometric_term("").is_err());
        assert!(parse_stoichiometric_term("two H2O").is_err());
        assert!(parse_stoichiometric_term("-1 H2O").is_err());
        assert!(parse_stoichiometric_term("2 H2O extra").is_err());
    }
}
