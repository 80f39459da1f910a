//! Fractal configuration and render parameters.
//!
//! Static tables describe each supported fractal and its defaults. A
//! [`RenderParams`] value is the full, serializable description of one
//! evaluation request.

use crate::{validate_max_iterations, ComplexPoint, FractalError, Region};
use serde::{Deserialize, Serialize};

/// Which escape-time fractal to evaluate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FractalKind {
    /// Each sample is the parameter `c`, orbit seeded at `c`.
    Mandelbrot,
    /// Each sample is the orbit seed `z₀`, `c` fixed for the whole grid.
    Julia { c: ComplexPoint },
}

impl FractalKind {
    pub fn id(&self) -> &'static str {
        match self {
            FractalKind::Mandelbrot => MANDELBROT_CONFIG.id,
            FractalKind::Julia { .. } => JULIA_CONFIG.id,
        }
    }
}

/// Configuration for a fractal type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractalConfig {
    /// Unique identifier (matches renderer ID in compute layer)
    pub id: &'static str,
    /// Human-readable name
    pub display_name: &'static str,
    /// Default top-left corner (included in the grid)
    pub default_top_left: (f64, f64),
    /// Default bottom-right corner (excluded from the grid)
    pub default_bottom_right: (f64, f64),
    /// Default sample spacing
    pub default_step: f64,
    pub default_max_iterations: u32,
    /// Fixed parameter for Julia sets; `None` for Mandelbrot.
    pub default_c: Option<(f64, f64)>,
}

impl FractalConfig {
    pub fn default_region(&self) -> Region {
        Region::new(
            self.default_top_left.into(),
            self.default_bottom_right.into(),
            self.default_step,
        )
    }

    pub fn default_kind(&self) -> FractalKind {
        match self.default_c {
            Some(c) => FractalKind::Julia { c: c.into() },
            None => FractalKind::Mandelbrot,
        }
    }

    pub fn default_params(&self) -> RenderParams {
        RenderParams {
            fractal: self.default_kind(),
            region: self.default_region(),
            max_iterations: self.default_max_iterations,
        }
    }
}

/// Mandelbrot set configuration.
pub static MANDELBROT_CONFIG: FractalConfig = FractalConfig {
    id: "mandelbrot",
    display_name: "Mandelbrot Set",
    default_top_left: (-2.0, 1.25),
    default_bottom_right: (1.0, -1.25),
    default_step: 0.005,
    default_max_iterations: 100,
    default_c: None,
};

/// Julia set configuration.
pub static JULIA_CONFIG: FractalConfig = FractalConfig {
    id: "julia",
    display_name: "Julia Set",
    default_top_left: (-1.5, 1.5),
    default_bottom_right: (1.5, -1.5),
    default_step: 0.005,
    default_max_iterations: 100,
    default_c: Some((-0.7, 0.27015)),
};

pub static FRACTAL_CONFIGS: &[&FractalConfig] = &[&MANDELBROT_CONFIG, &JULIA_CONFIG];

/// Look up a fractal configuration by ID.
pub fn get_fractal_config(id: &str) -> Option<&'static FractalConfig> {
    FRACTAL_CONFIGS.iter().copied().find(|c| c.id == id)
}

/// Everything needed to run one evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderParams {
    pub fractal: FractalKind,
    pub region: Region,
    pub max_iterations: u32,
}

impl RenderParams {
    /// Defaults for the fractal with the given ID.
    pub fn defaults_for(id: &str) -> Result<Self, FractalError> {
        get_fractal_config(id)
            .map(FractalConfig::default_params)
            .ok_or_else(|| FractalError::UnknownFractal(id.to_string()))
    }

    /// Parse and validate parameters from JSON.
    pub fn from_json(json: &str) -> Result<Self, FractalError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn to_json(&self) -> Result<String, FractalError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), FractalError> {
        validate_max_iterations(self.max_iterations)?;
        self.region.validate()?;
        if let FractalKind::Julia { c } = self.fractal {
            if !c.is_finite() {
                return Err(FractalError::NonFiniteCoordinate { re: c.re, im: c.im });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_fractal_config_finds_both() {
        assert_eq!(
            get_fractal_config("mandelbrot").map(|c| c.display_name),
            Some("Mandelbrot Set")
        );
        assert_eq!(
            get_fractal_config("julia").map(|c| c.display_name),
            Some("Julia Set")
        );
    }

    #[test]
    fn get_fractal_config_returns_none_for_unknown() {
        assert!(get_fractal_config("burning_ship").is_none());
    }

    #[test]
    fn default_params_are_valid() {
        for config in FRACTAL_CONFIGS {
            let params = config.default_params();
            assert!(params.validate().is_ok(), "{} defaults invalid", config.id);
            assert_eq!(params.fractal.id(), config.id);
        }
    }

    #[test]
    fn julia_defaults_carry_parameter() {
        let params = RenderParams::defaults_for("julia").unwrap();
        assert_eq!(
            params.fractal,
            FractalKind::Julia {
                c: ComplexPoint::new(-0.7, 0.27015)
            }
        );
    }

    #[test]
    fn defaults_for_unknown_id() {
        assert!(matches!(
            RenderParams::defaults_for("nope"),
            Err(FractalError::UnknownFractal(id)) if id == "nope"
        ));
    }

    #[test]
    fn json_roundtrip() {
        let original = RenderParams::defaults_for("julia").unwrap();
        let json = original.to_json().unwrap();
        assert!(json.contains("\"type\":\"julia\""));
        assert_eq!(RenderParams::from_json(&json).unwrap(), original);
    }

    #[test]
    fn from_json_parses_mandelbrot() {
        let json = r#"{
            "fractal": { "type": "mandelbrot" },
            "region": {
                "top_left": { "re": -2.0, "im": 1.0 },
                "bottom_right": { "re": 1.0, "im": -1.0 },
                "step": 0.01
            },
            "max_iterations": 250
        }"#;
        let params = RenderParams::from_json(json).unwrap();
        assert_eq!(params.fractal, FractalKind::Mandelbrot);
        assert_eq!(params.max_iterations, 250);
    }

    #[test]
    fn from_json_rejects_zero_iterations() {
        let mut params = MANDELBROT_CONFIG.default_params();
        params.max_iterations = 0;
        let json = serde_json::to_string(&params).unwrap();
        assert!(matches!(
            RenderParams::from_json(&json),
            Err(FractalError::InvalidIterationCap { .. })
        ));
    }

    #[test]
    fn from_json_reports_malformed_input() {
        assert!(matches!(
            RenderParams::from_json("{ not json"),
            Err(FractalError::Config(_))
        ));
    }
}
