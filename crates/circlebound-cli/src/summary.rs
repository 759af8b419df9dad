use std::path::Path;

use circlebound_core::detection::Detection;
use circlebound_core::node::{NodeConfig, SpinStats};
use console::Style;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_run_summary(config: &NodeConfig, input: &Path) {
    let s = Styles::new();
    let range = &config.detector.color_range;

    println!();
    println!("  {}", s.title.apply_to(&config.node_name));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Topic"),
        s.value.apply_to(&config.topic)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("HSV range"),
        s.value.apply_to(format!("{:?} .. {:?}", range.lower, range.upper))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Kernel"),
        s.value.apply_to(format!("{0}x{0}", config.detector.kernel_size))
    );
    match config.display.output_dir {
        Some(ref dir) => println!(
            "  {:<14}{}",
            s.label.apply_to("Output"),
            s.path.apply_to(dir.display())
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Output"),
            s.disabled.apply_to("discarded")
        ),
    }
    println!();
}

pub fn print_spin_stats(stats: &SpinStats) {
    let s = Styles::new();
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Received"),
        s.value.apply_to(stats.received)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Dropped"),
        s.value.apply_to(stats.dropped)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Detections"),
        s.value.apply_to(stats.detections)
    );
}

pub fn print_detection(image: &Path, width: usize, height: usize, detection: Option<&Detection>) {
    let s = Styles::new();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Image"),
        s.path.apply_to(image.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(format!("{}x{}", width, height))
    );
    match detection {
        Some(d) => {
            println!(
                "  {:<14}{}",
                s.label.apply_to("Center"),
                s.value.apply_to(format!("({}, {})", d.center.0, d.center.1))
            );
            println!(
                "  {:<14}{}",
                s.label.apply_to("Radius"),
                s.value.apply_to(d.radius)
            );
            println!(
                "  {:<14}{}",
                s.label.apply_to("Area"),
                s.value.apply_to(format!("{:.1}", d.contour_area))
            );
        }
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Object"),
            s.disabled.apply_to("not found")
        ),
    }
}
