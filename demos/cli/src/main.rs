use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use timeline_core::{DetailGeometry, Timeline, TimelineOptions};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "timeline-cli",
    about = "Dựng timeline theo năm từ file cấu hình JSON."
)]
struct Args {
    /// Đường dẫn file JSON cấu hình (khóa camelCase). Bỏ trống thì dùng mặc định.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// What to print.
    #[arg(short, long, value_enum, default_value_t = Output::Summary)]
    output: Output,

    /// Render milestones as static bullets instead of clickable markers.
    #[arg(long)]
    static_markers: bool,

    /// Simulate a click on this milestone index before printing.
    #[arg(long)]
    select: Option<usize>,

    /// Container width in pixels used to place the detail box.
    #[arg(long, default_value_t = 960.0)]
    container_width: f64,

    /// Detail box width in pixels.
    #[arg(long, default_value_t = 280.0)]
    box_width: f64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Output {
    Summary,
    Layout,
    Html,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut options = match &args.input {
        Some(path) => {
            let data = std::fs::read_to_string(path)
                .with_context(|| format!("Không đọc được file {path:?}"))?;
            TimelineOptions::from_json_str(&data)
                .with_context(|| format!("Cấu hình không hợp lệ trong {path:?}"))?
        }
        None => TimelineOptions::default(),
    };
    if args.static_markers {
        options.interactive = Some(false);
    }

    let mut timeline = Timeline::from_options(options)?;
    if let Some(index) = args.select {
        let geometry = DetailGeometry {
            container_width: args.container_width,
            box_width: args.box_width,
        };
        let detail = timeline.select_milestone(index, geometry)?;
        info!(index, left_px = detail.left_px, "detail box placed");
    }

    match args.output {
        Output::Summary => print_summary(&timeline),
        Output::Layout => println!("{}", serde_json::to_string_pretty(timeline.layout())?),
        Output::Html => println!("{}", timeline.to_html()),
    }

    Ok(())
}

fn print_summary(timeline: &Timeline) {
    let layout = timeline.layout();
    println!(
        "Range: {}-{} ({} years, {:.4}% per year)\nInterval markers: {}\nMilestone groups: {}\nMilestone markers: {}",
        layout.scale.start_year,
        layout.scale.end_year,
        layout.scale.total_years,
        layout.scale.percent_per_year,
        layout.intervals.len(),
        layout.groups.len(),
        layout.marker_count()
    );
    if let Some(detail) = timeline.detail() {
        println!(
            "Detail box: \"{}\" ({}) at {}px",
            detail.content.title, detail.content.year, detail.left_px
        );
    }
}
