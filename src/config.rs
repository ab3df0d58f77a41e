// src/config.rs

//! Plot configuration and the plottable-function registry.
//!
//! [`PlotConfig`] is the root structure, deserializable from a JSON file to
//! customize the viewport, resolution, plotted function, and output path.
//! Defaults are provided for every field so a partial (or absent) file
//! works. [`FunctionKind`] names each one-argument function of the library
//! so config files and the CLI can select one by name.

use crate::complex::Complex;
use crate::functions;
use crate::surface::Viewport;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// A plottable one-argument function over the complex plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionKind {
    Identity,
    Square,
    Reciprocal,
    Exp,
    Ln,
    Sin,
    Cos,
    Tan,
    Csc,
    Sec,
    Cot,
    Arcsin,
    Arccos,
    Arctan,
    Arccsc,
    Arcsec,
    Arccot,
    Sinh,
    Cosh,
    Tanh,
    Csch,
    Sech,
    Coth,
    Arcsinh,
    Arccosh,
    Arctanh,
    Arccsch,
    Arcsech,
    Arccoth,
}

/// Name/variant pairs, single source of truth for lookup and listing.
const FUNCTION_NAMES: &[(&str, FunctionKind)] = &[
    ("identity", FunctionKind::Identity),
    ("square", FunctionKind::Square),
    ("reciprocal", FunctionKind::Reciprocal),
    ("exp", FunctionKind::Exp),
    ("ln", FunctionKind::Ln),
    ("sin", FunctionKind::Sin),
    ("cos", FunctionKind::Cos),
    ("tan", FunctionKind::Tan),
    ("csc", FunctionKind::Csc),
    ("sec", FunctionKind::Sec),
    ("cot", FunctionKind::Cot),
    ("arcsin", FunctionKind::Arcsin),
    ("arccos", FunctionKind::Arccos),
    ("arctan", FunctionKind::Arctan),
    ("arccsc", FunctionKind::Arccsc),
    ("arcsec", FunctionKind::Arcsec),
    ("arccot", FunctionKind::Arccot),
    ("sinh", FunctionKind::Sinh),
    ("cosh", FunctionKind::Cosh),
    ("tanh", FunctionKind::Tanh),
    ("csch", FunctionKind::Csch),
    ("sech", FunctionKind::Sech),
    ("coth", FunctionKind::Coth),
    ("arcsinh", FunctionKind::Arcsinh),
    ("arccosh", FunctionKind::Arccosh),
    ("arctanh", FunctionKind::Arctanh),
    ("arccsch", FunctionKind::Arccsch),
    ("arcsech", FunctionKind::Arcsech),
    ("arccoth", FunctionKind::Arccoth),
];

impl FunctionKind {
    /// Evaluates the named function at `z`.
    pub fn apply(self, z: Complex) -> Complex {
        match self {
            FunctionKind::Identity => z,
            FunctionKind::Square => z * z,
            FunctionKind::Reciprocal => z.reciprocal(),
            FunctionKind::Exp => functions::exp(z),
            FunctionKind::Ln => functions::ln(z),
            FunctionKind::Sin => functions::sin(z),
            FunctionKind::Cos => functions::cos(z),
            FunctionKind::Tan => functions::tan(z),
            FunctionKind::Csc => functions::csc(z),
            FunctionKind::Sec => functions::sec(z),
            FunctionKind::Cot => functions::cot(z),
            FunctionKind::Arcsin => functions::arcsin(z),
            FunctionKind::Arccos => functions::arccos(z),
            FunctionKind::Arctan => functions::arctan(z),
            FunctionKind::Arccsc => functions::arccsc(z),
            FunctionKind::Arcsec => functions::arcsec(z),
            FunctionKind::Arccot => functions::arccot(z),
            FunctionKind::Sinh => functions::sinh(z),
            FunctionKind::Cosh => functions::cosh(z),
            FunctionKind::Tanh => functions::tanh(z),
            FunctionKind::Csch => functions::csch(z),
            FunctionKind::Sech => functions::sech(z),
            FunctionKind::Coth => functions::coth(z),
            FunctionKind::Arcsinh => functions::arcsinh(z),
            FunctionKind::Arccosh => functions::arccosh(z),
            FunctionKind::Arctanh => functions::arctanh(z),
            FunctionKind::Arccsch => functions::arccsch(z),
            FunctionKind::Arcsech => functions::arcsech(z),
            FunctionKind::Arccoth => functions::arccoth(z),
        }
    }

    /// Looks a function up by its lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        FUNCTION_NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, kind)| kind)
    }

    /// The lowercase name of this function.
    pub fn name(self) -> &'static str {
        FUNCTION_NAMES
            .iter()
            .find(|&&(_, kind)| kind == self)
            .map(|&(n, _)| n)
            .expect("every variant is listed in FUNCTION_NAMES")
    }

    /// All available function names, for help text and error messages.
    pub fn available_names() -> Vec<&'static str> {
        FUNCTION_NAMES.iter().map(|&(n, _)| n).collect()
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Complete configuration for a domain-coloring plot.
///
/// Intended to be deserialized from a JSON file; every field falls back to
/// its default when missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Image width in pixels.
    pub width: usize,
    /// Image height in pixels.
    pub height: usize,
    /// Left edge of the real range.
    pub re_min: f64,
    /// Right edge of the real range.
    pub re_max: f64,
    /// Bottom edge of the imaginary range.
    pub im_min: f64,
    /// Top edge of the imaginary range.
    pub im_max: f64,
    /// The function to plot.
    pub function: FunctionKind,
    /// Output image path (binary PPM).
    pub output: PathBuf,
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            width: 800,
            height: 800,
            re_min: -2.0,
            re_max: 2.0,
            im_min: -2.0,
            im_max: 2.0,
            function: FunctionKind::Identity,
            output: PathBuf::from("plot.ppm"),
        }
    }
}

impl PlotConfig {
    /// Loads a configuration from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// The viewport described by this configuration.
    pub fn viewport(&self) -> Viewport {
        Viewport {
            width: self.width,
            height: self.height,
            re_min: self.re_min,
            re_max: self.re_max,
            im_min: self.im_min,
            im_max: self.im_max,
        }
    }
}
