//! MLP Layer Diagram
//!
//! SVG rendering of a fetched network architecture. One node column per
//! layer boundary; the strongest weights per target node draw as links
//! whose width scales with |weight| and whose color keys on sign. Wide
//! hidden layers render as a solid column, but link anchors always use
//! the real unit index so the geometry stays honest.

use leptos::*;

use crate::api::client::ModelArchitecture;
use crate::components::decision_flow::ribbon;
use crate::state::global::GlobalState;

const DIAGRAM_WIDTH: f64 = 900.0;
const DIAGRAM_HEIGHT: f64 = 560.0;
const MARGIN_X: f64 = 90.0;
const COLUMN_TOP: f64 = 70.0;
const COLUMN_BOTTOM: f64 = 490.0;
/// Columns wider than this draw as a bar instead of single units.
const MAX_DRAWN_NODES: usize = 16;

fn column_x(index: usize, columns: usize) -> f64 {
    let steps = columns.saturating_sub(1).max(1) as f64;
    MARGIN_X + index as f64 / steps * (DIAGRAM_WIDTH - 2.0 * MARGIN_X)
}

fn node_y(index: usize, dim: usize) -> f64 {
    let span = COLUMN_BOTTOM - COLUMN_TOP;
    COLUMN_TOP + (index as f64 + 0.5) / dim.max(1) as f64 * span
}

fn column_name(index: usize, columns: usize) -> String {
    if index == 0 {
        "Input".to_string()
    } else if index + 1 == columns {
        "Output".to_string()
    } else {
        format!("Hidden {}", index)
    }
}

/// Weighted-connection diagram for one fetched architecture
#[component]
pub fn LayerDiagram(architecture: ModelArchitecture) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let mut dims: Vec<usize> = Vec::with_capacity(architecture.layers.len() + 1);
    if let Some(first) = architecture.layers.first() {
        dims.push(first.input_dim);
    }
    for layer in &architecture.layers {
        dims.push(layer.output_dim);
    }

    let max_weight = architecture
        .layers
        .iter()
        .flat_map(|layer| layer.edges.iter())
        .map(|edge| edge.weight.abs())
        .fold(0.0_f64, f64::max);
    let max_weight = if max_weight > 0.0 { max_weight } else { 1.0 };

    let hidden = architecture
        .hidden_layer_sizes
        .iter()
        .map(|size| size.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let header = format!(
        "Hidden layers: {}. Output activation: {}.",
        hidden, architecture.out_activation
    );

    let layers = store_value(architecture.layers);
    let dims = store_value(dims);

    let marks = move || {
        let palette = state.palette();
        let dims = dims.get_value();
        let layers = layers.get_value();
        let columns = dims.len();

        let links = layers
            .iter()
            .enumerate()
            .map(|(li, layer)| {
                let x0 = column_x(li, columns);
                let x1 = column_x(li + 1, columns);
                let in_dim = layer.input_dim;
                let out_dim = layer.output_dim;
                layer
                    .edges
                    .iter()
                    .map(|edge| {
                        let strength = edge.weight.abs() / max_weight;
                        let stroke = if edge.weight >= 0.0 {
                            palette.safe
                        } else {
                            palette.malicious
                        };
                        let width = 0.6 + 3.4 * strength;
                        let opacity = 0.25 + 0.55 * strength;
                        view! {
                            <path
                                d=ribbon(x0, node_y(edge.src, in_dim), x1, node_y(edge.tgt, out_dim))
                                fill="none"
                                stroke=stroke
                                stroke-width=format!("{:.2}", width)
                                opacity=format!("{:.2}", opacity)
                            />
                        }
                    })
                    .collect_view()
            })
            .collect_view();

        let nodes = dims
            .iter()
            .enumerate()
            .map(|(ci, dim)| {
                let x = column_x(ci, columns);
                let caption = format!("{} ({})", column_name(ci, columns), dim);
                let caption_y = COLUMN_BOTTOM + 34.0;

                let units = if *dim <= MAX_DRAWN_NODES {
                    (0..*dim)
                        .map(|i| {
                            let cy = node_y(i, *dim);
                            view! {
                                <circle
                                    cx=x
                                    cy=cy
                                    r="7"
                                    fill=palette.surface
                                    stroke=palette.axis
                                    stroke-width="1.5"
                                />
                            }
                        })
                        .collect_view()
                } else {
                    let bar_x = x - 6.0;
                    view! {
                        <rect
                            x=bar_x
                            y=COLUMN_TOP
                            width="12"
                            height={COLUMN_BOTTOM - COLUMN_TOP}
                            rx="6"
                            fill=palette.surface
                            stroke=palette.axis
                            stroke-width="1.5"
                        />
                    }
                    .into_view()
                };

                view! {
                    {units}
                    <text
                        x=x
                        y=caption_y
                        text-anchor="middle"
                        font-size="14"
                        fill=palette.muted
                    >
                        {caption}
                    </text>
                }
            })
            .collect_view();

        view! {
            {links}
            {nodes}
        }
    };

    view! {
        <div class="text-center">
            <p class="text-sm mb-2" style=move || format!("color: {};", state.palette().muted)>
                {header}
            </p>
            <svg
                viewBox=format!("0 0 {} {}", DIAGRAM_WIDTH, DIAGRAM_HEIGHT)
                class="w-full h-auto"
            >
                {marks}
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_span_the_margins() {
        assert_eq!(column_x(0, 3), MARGIN_X);
        assert_eq!(column_x(2, 3), DIAGRAM_WIDTH - MARGIN_X);
        let mid = column_x(1, 3);
        assert!((mid - DIAGRAM_WIDTH / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_node_positions_stay_inside_the_column() {
        for dim in [1, 2, 15, 100] {
            assert!(node_y(0, dim) > COLUMN_TOP);
            assert!(node_y(dim - 1, dim) < COLUMN_BOTTOM);
        }
    }

    #[test]
    fn test_column_names() {
        assert_eq!(column_name(0, 3), "Input");
        assert_eq!(column_name(1, 3), "Hidden 1");
        assert_eq!(column_name(2, 3), "Output");
    }
}
