use pegwatch_types::{BubbleInput, BubbleItem, PackConfig, PipelineEntry};

/// Radius of a circle for `value` when the largest value is `max_value`.
///
/// Scales with the square root so that area tracks value. Non-finite or
/// non-positive values, and a non-positive `max_value`, get the minimum radius.
#[must_use]
pub fn radius_for(value: f64, max_value: f64, cfg: &PackConfig) -> f64 {
    if !value.is_finite() || value <= 0.0 || !max_value.is_finite() || max_value <= 0.0 {
        return cfg.min_radius;
    }
    let ratio = (value / max_value).clamp(0.0, 1.0);
    cfg.min_radius + (cfg.max_radius - cfg.min_radius) * ratio.sqrt()
}

fn sort_key(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}

/// Lay out `items` on a `canvas_width` x `canvas_height` canvas.
///
/// Circles are placed largest first (ties keep input order) along an
/// Archimedean spiral from the canvas center. Each circle takes the first
/// candidate that keeps `edge_margin` from the canvas edges and `margin` from
/// every circle already placed. When no candidate fits within `max_steps`,
/// the last one tried is used and overlap is possible.
///
/// The output is in placement order. Identical input gives identical output.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "pegwatch::core::pack",
        skip(items, cfg),
        fields(items = items.len()),
    )
)]
#[must_use]
pub fn pack(
    items: &[BubbleInput],
    canvas_width: f64,
    canvas_height: f64,
    cfg: &PackConfig,
) -> Vec<BubbleItem> {
    let max_value = items.iter().map(|i| sort_key(i.value)).fold(0.0, f64::max);

    let mut order: Vec<&BubbleInput> = items.iter().collect();
    order.sort_by(|a, b| sort_key(b.value).total_cmp(&sort_key(a.value)));

    let cx = canvas_width / 2.0;
    let cy = canvas_height / 2.0;
    let mut placed: Vec<BubbleItem> = Vec::with_capacity(items.len());

    for item in order {
        let radius = radius_for(item.value, max_value, cfg);
        let fits = |x: f64, y: f64, placed: &[BubbleItem]| {
            x - radius >= cfg.edge_margin
                && x + radius <= canvas_width - cfg.edge_margin
                && y - radius >= cfg.edge_margin
                && y + radius <= canvas_height - cfg.edge_margin
                && placed
                    .iter()
                    .all(|p| (p.x - x).hypot(p.y - y) >= p.radius + radius + cfg.margin)
        };

        let (mut x, mut y) = (cx, cy);
        let mut angle = 0.0_f64;
        let mut found = false;
        for _ in 0..cfg.max_steps {
            let r = cfg.radius_step * angle;
            x = cx + r * angle.cos();
            y = cy + r * angle.sin();
            if fits(x, y, &placed) {
                found = true;
                break;
            }
            angle += cfg.angle_step;
        }

        if !found {
            #[cfg(feature = "tracing")]
            tracing::warn!(label = %item.label, radius, "no free position found; using last candidate");
        }

        placed.push(BubbleItem {
            label: item.label.clone(),
            value: item.value,
            category: item.category,
            radius,
            x,
            y,
        });
    }

    placed
}

/// Bubble inputs for pipeline entries, valued by their weight in USD millions.
///
/// Entries without a positive weight are skipped.
#[must_use]
pub fn pipeline_bubbles(entries: &[PipelineEntry]) -> Vec<BubbleInput> {
    entries
        .iter()
        .filter_map(|e| {
            e.weight()
                .map(|(value, _)| BubbleInput::new(e.name.clone(), value, e.category))
        })
        .collect()
}
