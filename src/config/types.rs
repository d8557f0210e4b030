use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{LayoutError, Result};
use crate::geometry::Size;

/// Randomization intent attached to a parameter.
///
/// Carried for input compatibility only; the layout engine never applies it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomSetting {
    pub enabled: bool,
    /// How strongly the randomness would be applied, 0.0 to 1.0.
    pub strength: f64,
    /// Optional `(min, max)` bounds for the randomized value.
    pub range: Option<(f64, f64)>,
}

impl RandomSetting {
    fn validate(&self, name: &'static str) -> Result<()> {
        if self.enabled && !(0.0..=1.0).contains(&self.strength) {
            return Err(LayoutError::invalid_parameter(
                name,
                format!("randomization strength {} outside [0, 1]", self.strength),
            ));
        }
        if let Some((min, max)) = self.range {
            if !(min <= max) {
                return Err(LayoutError::invalid_parameter(
                    name,
                    format!("randomization range ({min}, {max}) has min above max"),
                ));
            }
        }
        Ok(())
    }
}

/// Nominal parameter value plus its randomization descriptor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Param<T> {
    pub value: T,
    pub random: RandomSetting,
}

impl<T> Param<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            random: RandomSetting::default(),
        }
    }

    pub fn with_random(mut self, random: RandomSetting) -> Self {
        self.random = random;
        self
    }
}

impl<T> From<T> for Param<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ParamRepr<T> {
    Record {
        value: T,
        #[serde(default)]
        random: RandomSetting,
    },
    Bare(T),
}

impl<'de, T> Deserialize<'de> for Param<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match ParamRepr::deserialize(deserializer)? {
            ParamRepr::Record { value, random } => Param { value, random },
            ParamRepr::Bare(value) => Param::new(value),
        })
    }
}

/// Complete parameter set for one building.
///
/// Absent keys default to zero, which disables the matching feature.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildingConfig {
    pub length: Param<u32>,
    pub width: Param<u32>,
    pub height: Param<u32>,
    pub window_size: Param<Size>,
    pub window_spacing: Param<u32>,
    pub door_size: Param<Size>,
    pub number_of_doors: Param<u32>,
    /// Opaque brick part identifier; not interpreted by the layout engine.
    #[serde(alias = "primary_brick_type")]
    pub primary_material: String,
}

impl BuildingConfig {
    fn random_settings(&self) -> [(&'static str, &RandomSetting); 7] {
        [
            ("length", &self.length.random),
            ("width", &self.width.random),
            ("height", &self.height.random),
            ("window_size", &self.window_size.random),
            ("window_spacing", &self.window_spacing.random),
            ("door_size", &self.door_size.random),
            ("number_of_doors", &self.number_of_doors.random),
        ]
    }

    /// Check the randomization descriptors. Numeric ranges are already
    /// enforced by the unsigned field types.
    pub fn validate(&self) -> Result<()> {
        for (name, random) in self.random_settings() {
            random.validate(name)?;
        }
        Ok(())
    }

    /// Whether any parameter asks for randomization.
    pub fn randomization_requested(&self) -> bool {
        self.random_settings()
            .iter()
            .any(|(_, random)| random.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_and_record_values_mix() {
        let config: BuildingConfig = serde_json::from_str(
            r#"{
                "length": 20,
                "height": {"value": 3, "random": {"enabled": true, "strength": 0.5, "range": [2, 6]}},
                "door_size": {"value": [4, 2]},
                "primary_brick_type": "3004"
            }"#,
        )
        .unwrap();

        assert_eq!(config.length, Param::new(20));
        assert_eq!(config.height.value, 3);
        assert!(config.height.random.enabled);
        assert_eq!(config.height.random.range, Some((2.0, 6.0)));
        assert_eq!(config.door_size.value, Size::new(4, 2));
        assert_eq!(config.door_size.random, RandomSetting::default());
        assert_eq!(config.width.value, 0);
        assert_eq!(config.window_size.value, Size::new(0, 0));
        assert_eq!(config.primary_material, "3004");
        assert!(config.randomization_requested());
    }

    #[test]
    fn material_accepts_brick_type_key() {
        let config: BuildingConfig =
            serde_json::from_str(r#"{"primary_material": "3001"}"#).unwrap();
        assert_eq!(config.primary_material, "3001");

        let config: BuildingConfig =
            serde_json::from_str(r#"{"primary_brick_type": "3010"}"#).unwrap();
        assert_eq!(config.primary_material, "3010");
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"primary_material\":\"3010\""));
    }

    #[test]
    fn negative_and_fractional_values_are_rejected() {
        assert!(serde_json::from_str::<BuildingConfig>(r#"{"length": -4}"#).is_err());
        assert!(serde_json::from_str::<BuildingConfig>(r#"{"height": 2.5}"#).is_err());
        assert!(
            serde_json::from_str::<BuildingConfig>(r#"{"window_size": {"value": [2, -1]}}"#)
                .is_err()
        );
    }

    #[test]
    fn validate_checks_strength_and_range() {
        let mut config = BuildingConfig::default();
        assert!(config.validate().is_ok());

        config.length = Param::new(10).with_random(RandomSetting {
            enabled: true,
            strength: 1.5,
            range: None,
        });
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            LayoutError::InvalidParameter { name: "length", .. }
        ));

        config.length.random.strength = 0.2;
        config.width.random.range = Some((8.0, 4.0));
        let err = config.validate().unwrap_err();
        assert!(matches!(err, LayoutError::InvalidParameter { name: "width", .. }));
    }

    #[test]
    fn disabled_descriptor_skips_strength_check() {
        let mut config = BuildingConfig::default();
        config.height.random.strength = 7.0;
        assert!(config.validate().is_ok());
        assert!(!config.randomization_requested());
    }
}
