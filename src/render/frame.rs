use serde::{Deserialize, Serialize};

use crate::core::{CurvePoint, EvmMetrics, S_CURVE_SAMPLES, sample_s_curve};
use crate::error::{EvmError, EvmResult};
use crate::render::primitives::{Color, LineStrokeStyle, palette};

pub const CHART_TITLE: &str =
    "Planned Value (PV), Earned Value (EV), and Actual Cost (AC) S-Curves with Variance Areas";
pub const CHART_X_LABEL: &str = "Time";
pub const CHART_Y_LABEL: &str = "Value";

/// Normalized time position of the single vertical reference line.
pub const ETC_LINE_TIME: f64 = 0.5;

/// One plotted S-curve in chart coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveTrace {
    pub label: String,
    pub color: Color,
    pub points: Vec<CurvePoint>,
}

/// Shaded area between two curves, restricted to where the condition holds.
///
/// Each region is a closed polygon in `(t, value)` coordinates: the lower
/// curve walked forward, then the upper curve walked back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarianceBand {
    pub label: String,
    pub color: Color,
    pub regions: Vec<Vec<CurvePoint>>,
}

/// Placement of a dashed reference line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ReferenceAxis {
    /// Constant metric value across the whole time axis. Display-only
    /// overlay, not a temporal projection.
    Horizontal { value: f64 },
    /// Fixed normalized time position across the whole value axis.
    Vertical { t: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLine {
    pub label: String,
    pub color: Color,
    pub stroke: LineStrokeStyle,
    pub axis: ReferenceAxis,
}

/// Swatch shape a legend entry is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendMarker {
    Line,
    Patch,
}

/// One legend row: label plus swatch description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendEntry<'a> {
    pub label: &'a str,
    pub color: Color,
    pub marker: LegendMarker,
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Construction is deterministic and side-effect free: identical metrics
/// yield an identical frame, so both rendering and tests consume the exact
/// same geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub traces: Vec<CurveTrace>,
    pub bands: Vec<VarianceBand>,
    pub reference_lines: Vec<ReferenceLine>,
}

impl ChartFrame {
    /// Builds the full chart scene from one computed metrics set.
    pub fn from_metrics(metrics: &EvmMetrics) -> EvmResult<Self> {
        let pv_curve = sample_s_curve(metrics.pv, S_CURVE_SAMPLES)?;
        let ev_curve = sample_s_curve(metrics.ev, S_CURVE_SAMPLES)?;
        let ac_curve = sample_s_curve(metrics.ac, S_CURVE_SAMPLES)?;

        let bands = vec![
            VarianceBand {
                label: "Under-Completion Area (EV < PV)".to_owned(),
                color: palette::LIGHT_GREEN,
                regions: variance_regions(&ev_curve, &pv_curve),
            },
            VarianceBand {
                label: "Cost Overrun Area (AC < PV)".to_owned(),
                color: palette::LIGHT_CORAL,
                regions: variance_regions(&ac_curve, &pv_curve),
            },
        ];

        let traces = vec![
            CurveTrace {
                label: "Planned Value (PV) S-Curve".to_owned(),
                color: palette::BLUE,
                points: pv_curve,
            },
            CurveTrace {
                label: "Earned Value (EV) S-Curve".to_owned(),
                color: palette::GREEN,
                points: ev_curve,
            },
            CurveTrace {
                label: "Actual Cost (AC) S-Curve".to_owned(),
                color: palette::RED,
                points: ac_curve,
            },
        ];

        let reference_lines = vec![
            ReferenceLine {
                label: "ETC Line".to_owned(),
                color: palette::ORANGE,
                stroke: LineStrokeStyle::Dashed,
                axis: ReferenceAxis::Vertical { t: ETC_LINE_TIME },
            },
            ReferenceLine {
                label: "ETC Value".to_owned(),
                color: palette::ORANGE,
                stroke: LineStrokeStyle::Dashed,
                axis: ReferenceAxis::Horizontal { value: metrics.etc },
            },
            ReferenceLine {
                label: "VAC Value".to_owned(),
                color: palette::PURPLE,
                stroke: LineStrokeStyle::Dashed,
                axis: ReferenceAxis::Horizontal { value: metrics.vac },
            },
            ReferenceLine {
                label: "Cost Variance (CV)".to_owned(),
                color: palette::BROWN,
                stroke: LineStrokeStyle::Dashed,
                axis: ReferenceAxis::Horizontal { value: metrics.cv },
            },
            ReferenceLine {
                label: "Schedule Variance (SV)".to_owned(),
                color: palette::PINK,
                stroke: LineStrokeStyle::Dashed,
                axis: ReferenceAxis::Horizontal { value: metrics.sv },
            },
            ReferenceLine {
                label: "Budget at Completion (BAC)".to_owned(),
                color: palette::BLACK,
                stroke: LineStrokeStyle::Dashed,
                axis: ReferenceAxis::Horizontal { value: metrics.bac },
            },
        ];

        Ok(Self {
            title: CHART_TITLE.to_owned(),
            x_label: CHART_X_LABEL.to_owned(),
            y_label: CHART_Y_LABEL.to_owned(),
            traces,
            bands,
            reference_lines,
        })
    }

    /// Legend entries in draw order: curves, bands, then reference lines.
    #[must_use]
    pub fn legend_entries(&self) -> Vec<LegendEntry<'_>> {
        let mut entries =
            Vec::with_capacity(self.traces.len() + self.bands.len() + self.reference_lines.len());
        for trace in &self.traces {
            entries.push(LegendEntry {
                label: trace.label.as_str(),
                color: trace.color,
                marker: LegendMarker::Line,
            });
        }
        for band in &self.bands {
            entries.push(LegendEntry {
                label: band.label.as_str(),
                color: band.color,
                marker: LegendMarker::Patch,
            });
        }
        for line in &self.reference_lines {
            entries.push(LegendEntry {
                label: line.label.as_str(),
                color: line.color,
                marker: LegendMarker::Line,
            });
        }
        entries
    }

    /// Inclusive value-axis range covering every curve and reference line,
    /// padded so nothing sits on the plot border.
    #[must_use]
    pub fn value_range(&self) -> (f64, f64) {
        let mut min = 0.0_f64;
        let mut max = 0.0_f64;
        for trace in &self.traces {
            for point in &trace.points {
                min = min.min(point.value);
                max = max.max(point.value);
            }
        }
        for line in &self.reference_lines {
            if let ReferenceAxis::Horizontal { value } = line.axis {
                min = min.min(value);
                max = max.max(value);
            }
        }

        let span = max - min;
        if span == 0.0 {
            return (min - 1.0, max + 1.0);
        }
        (min - span * 0.05, max + span * 0.05)
    }

    pub fn validate(&self) -> EvmResult<()> {
        if self.traces.is_empty() {
            return Err(EvmError::InvalidData(
                "chart frame must contain at least one curve trace".to_owned(),
            ));
        }
        for trace in &self.traces {
            trace.color.validate()?;
            if trace.points.len() < 2 {
                return Err(EvmError::InvalidData(format!(
                    "trace `{}` needs at least 2 points",
                    trace.label
                )));
            }
            for point in &trace.points {
                validate_point(&trace.label, *point)?;
            }
        }
        for band in &self.bands {
            band.color.validate()?;
            for region in &band.regions {
                if region.len() < 4 {
                    return Err(EvmError::InvalidData(format!(
                        "band `{}` contains a degenerate region",
                        band.label
                    )));
                }
                for point in region {
                    validate_point(&band.label, *point)?;
                }
            }
        }
        for line in &self.reference_lines {
            line.color.validate()?;
            let position = match line.axis {
                ReferenceAxis::Horizontal { value } => value,
                ReferenceAxis::Vertical { t } => t,
            };
            if !position.is_finite() {
                return Err(EvmError::InvalidData(format!(
                    "reference line `{}` must sit at a finite position",
                    line.label
                )));
            }
        }
        Ok(())
    }
}

fn validate_point(owner: &str, point: CurvePoint) -> EvmResult<()> {
    if !point.t.is_finite() || !point.value.is_finite() {
        return Err(EvmError::InvalidData(format!(
            "`{owner}` contains a non-finite sample"
        )));
    }
    Ok(())
}

/// Extracts the shaded polygons between `lower` and `upper` where the lower
/// curve sits strictly below the upper one.
///
/// One polygon per contiguous run of the condition, mirroring a pointwise
/// `where`-masked fill. Runs shorter than two samples enclose no area and are
/// dropped.
fn variance_regions(lower: &[CurvePoint], upper: &[CurvePoint]) -> Vec<Vec<CurvePoint>> {
    debug_assert_eq!(lower.len(), upper.len());

    let mut regions = Vec::new();
    let mut run: Vec<usize> = Vec::new();

    let mut flush = |run: &mut Vec<usize>| {
        if run.len() >= 2 {
            let mut polygon = Vec::with_capacity(run.len() * 2);
            polygon.extend(run.iter().map(|&i| lower[i]));
            polygon.extend(run.iter().rev().map(|&i| upper[i]));
            regions.push(polygon);
        }
        run.clear();
    };

    for i in 0..lower.len().min(upper.len()) {
        if lower[i].value < upper[i].value {
            run.push(i);
        } else {
            flush(&mut run);
        }
    }
    flush(&mut run);

    regions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(t: f64, value: f64) -> CurvePoint {
        CurvePoint { t, value }
    }

    #[test]
    fn variance_regions_single_run_closes_polygon() {
        let lower = vec![point(0.0, 0.0), point(0.5, 1.0), point(1.0, 4.0)];
        let upper = vec![point(0.0, 0.0), point(0.5, 2.0), point(1.0, 8.0)];

        let regions = variance_regions(&lower, &upper);
        assert_eq!(regions.len(), 1);
        // Lower forward, upper backward.
        assert_eq!(regions[0].len(), 4);
        assert_eq!(regions[0][0], point(0.5, 1.0));
        assert_eq!(regions[0][1], point(1.0, 4.0));
        assert_eq!(regions[0][2], point(1.0, 8.0));
        assert_eq!(regions[0][3], point(0.5, 2.0));
    }

    #[test]
    fn variance_regions_empty_when_lower_never_below() {
        let lower = vec![point(0.0, 0.0), point(0.5, 2.0), point(1.0, 8.0)];
        let upper = vec![point(0.0, 0.0), point(0.5, 1.0), point(1.0, 4.0)];

        assert!(variance_regions(&lower, &upper).is_empty());
    }

    #[test]
    fn variance_regions_drops_single_sample_runs() {
        let lower = vec![point(0.0, 1.0), point(0.5, 0.0), point(1.0, 1.0)];
        let upper = vec![point(0.0, 0.0), point(0.5, 1.0), point(1.0, 0.0)];

        assert!(variance_regions(&lower, &upper).is_empty());
    }
}
