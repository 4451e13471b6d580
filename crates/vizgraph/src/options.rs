use crate::edge_path::DEFAULT_ARROW_HEAD_SIZE;
use crate::error::{Error, Result};
use crate::highlight::ActionOnClick;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SIZE: f64 = 500.0;
pub const DEFAULT_DIMMED_OPACITY: f64 = 0.3;

/// Display settings that are plain data, as opposed to the factories and callbacks configured on
/// [`GraphDisplayBuilder`](crate::GraphDisplayBuilder).
///
/// Every field has a default, so a partial JSON object deserializes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayOptions {
    /// Side of the square canvas the layout runs in.
    pub size: f64,
    /// Opacity of everything outside the keep-visible set while a built-in highlight is active.
    pub dimmed_opacity: f64,
    pub arrow_head_size: f64,
    pub action_on_click: Option<ActionOnClick>,
    /// Whether edges get arrowheads. `None` follows the graph's own directedness.
    pub directed_edges: Option<bool>,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            dimmed_opacity: DEFAULT_DIMMED_OPACITY,
            arrow_head_size: DEFAULT_ARROW_HEAD_SIZE,
            action_on_click: None,
            directed_edges: None,
        }
    }
}

impl DisplayOptions {
    pub fn validate(&self) -> Result<()> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(invalid(format!(
                "size must be finite and positive (got {})",
                self.size
            )));
        }
        if !(0.0..=1.0).contains(&self.dimmed_opacity) {
            return Err(invalid(format!(
                "dimmedOpacity must be within [0, 1] (got {})",
                self.dimmed_opacity
            )));
        }
        if !self.arrow_head_size.is_finite() || self.arrow_head_size < 0.0 {
            return Err(invalid(format!(
                "arrowHeadSize must be finite and non-negative (got {})",
                self.arrow_head_size
            )));
        }
        Ok(())
    }
}

pub(crate) fn invalid(message: impl Into<String>) -> Error {
    Error::InvalidConfig {
        message: message.into(),
    }
}
