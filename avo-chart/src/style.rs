//! Colors and the layout pieces shared by every chart family.

use avo_data::observation::AvocadoType;

use crate::models::{Axis, Font, Legend, Title, XAnchor};

pub const TEAL: &str = "#17B897";
pub const RED: &str = "#E12D39";
pub const GRID_COLOR: &str = "lightgray";
pub const BACKGROUND: &str = "white";

/// Fixed color for each avocado type.
pub fn type_color(avocado_type: AvocadoType) -> &'static str {
    match avocado_type {
        AvocadoType::Conventional => TEAL,
        AvocadoType::Organic => RED,
    }
}

/// Small title pinned to the upper left, used by the time-series cards.
pub fn left_title(text: impl Into<String>) -> Title {
    Title {
        text: text.into(),
        x: Some(0.05),
        xanchor: Some(XAnchor::Left),
        font: Some(Font { size: 20 }),
    }
}

/// Larger centered title used by the analysis charts.
pub fn centered_title(text: impl Into<String>) -> Title {
    Title {
        text: text.into(),
        x: Some(0.5),
        xanchor: Some(XAnchor::Center),
        font: Some(Font { size: 22 }),
    }
}

/// Gridded axis that can be zoomed.
pub fn grid_axis(title: impl Into<String>) -> Axis {
    Axis {
        title: title.into(),
        fixedrange: None,
        showgrid: true,
        gridcolor: GRID_COLOR.to_string(),
        tickprefix: None,
    }
}

/// Gridded axis locked against zooming.
pub fn fixed_axis(title: impl Into<String>) -> Axis {
    Axis {
        fixedrange: Some(true),
        ..grid_axis(title)
    }
}

/// Boxed legend to the right of the plot area.
pub fn side_legend() -> Legend {
    Legend {
        x: 1.02,
        y: 1.0,
        bgcolor: "rgba(255,255,255,0.8)".to_string(),
        bordercolor: "gray".to_string(),
        borderwidth: 1,
    }
}
