mod common;
use common::init_tracing;
use pegwatch::{PackConfig, ReferenceData};
use pegwatch_core::format::format_weight_millions;
use pegwatch_core::{pack, pipeline_bubbles};

fn main() {
    init_tracing();

    // 1. Turn the builtin pipeline into bubble inputs weighted by market cap.
    let reference = ReferenceData::builtin();
    let inputs = pipeline_bubbles(&reference.pipeline);

    // 2. Pack them on a small canvas.
    let cfg = PackConfig {
        canvas_width: 600.0,
        canvas_height: 400.0,
        ..PackConfig::default()
    };
    let placed = pack(&inputs, cfg.canvas_width, cfg.canvas_height, &cfg);

    // 3. Print the layout, largest first.
    for b in &placed {
        println!(
            "{:<28} {:>8} r={:>5.1} at ({:>5.1}, {:>5.1}) [{}]",
            b.label,
            format_weight_millions(b.value),
            b.radius,
            b.x,
            b.y,
            b.category.label()
        );
    }
}
