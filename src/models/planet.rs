//! Planet dataset row

use serde::{Deserialize, Deserializer, Serialize};

use crate::logic::features::{parse_finite, PlanetInputs, StarType};

/// One CSV row. Only `Name` and `Habitable` are required; numeric cells
/// that are blank or malformed read as `None` and are defaulted later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Radius", default, deserialize_with = "lenient_f64")]
    pub radius: Option<f64>,
    #[serde(rename = "Mass", default, deserialize_with = "lenient_f64")]
    pub mass: Option<f64>,
    #[serde(rename = "EqTemp", default, deserialize_with = "lenient_f64")]
    pub eq_temp: Option<f64>,
    #[serde(rename = "Insolation", default, deserialize_with = "lenient_f64")]
    pub insolation: Option<f64>,
    #[serde(rename = "Period", default, deserialize_with = "lenient_f64")]
    pub period: Option<f64>,
    #[serde(rename = "Habitable", deserialize_with = "habitable_flag")]
    pub habitable: u8,

    #[serde(rename = "SemiMajorAxis", default, deserialize_with = "lenient_f64")]
    pub semi_major_axis: Option<f64>,
    #[serde(rename = "Density", default, deserialize_with = "lenient_f64")]
    pub density: Option<f64>,
    #[serde(rename = "StarTemp", default, deserialize_with = "lenient_f64")]
    pub star_temp: Option<f64>,
    #[serde(rename = "StarLum", default, deserialize_with = "lenient_f64")]
    pub star_lum: Option<f64>,
    #[serde(rename = "StarMet", default, deserialize_with = "lenient_f64")]
    pub star_met: Option<f64>,
    #[serde(rename = "StarType", default)]
    pub star_type: Option<String>,
}

/// Cell text through `parse_finite`; garbage becomes `None` instead of an error
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_finite))
}

/// `1`, `1.0` and ` 1 ` are habitable, any other number is not
fn habitable_flag<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match parse_finite(&raw) {
        Some(v) => Ok((v == 1.0) as u8),
        None => Err(serde::de::Error::custom(format!("invalid Habitable flag {raw:?}"))),
    }
}

impl PlanetRecord {
    pub fn is_habitable(&self) -> bool {
        self.habitable == 1
    }

    /// Sanitized inputs for feature engineering, missing columns defaulted
    pub fn to_inputs(&self) -> PlanetInputs {
        let defaults = PlanetInputs::default();
        PlanetInputs {
            radius: self.radius.unwrap_or(defaults.radius),
            mass: self.mass.unwrap_or(defaults.mass),
            period: self.period.unwrap_or(defaults.period),
            semi_major_axis: self.semi_major_axis.unwrap_or(defaults.semi_major_axis),
            eq_temp: self.eq_temp.unwrap_or(defaults.eq_temp),
            density: self.density.unwrap_or(defaults.density),
            star_temp: self.star_temp.unwrap_or(defaults.star_temp),
            star_lum: self.star_lum.unwrap_or(defaults.star_lum),
            star_met: self.star_met.unwrap_or(defaults.star_met),
            insolation: self.insolation.unwrap_or(defaults.insolation),
            star_type: self
                .star_type
                .as_deref()
                .and_then(|s| s.chars().next())
                .map(StarType::from_letter)
                .unwrap_or(StarType::G),
        }
    }
}
