#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::cast_precision_loss)]

use chaintable::{GROWTH_THRESHOLD, HashTable, TableStats};
use log::info;
use plotters::prelude::*;
use rand::Rng;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

// Small start so the run goes through many grows
const INITIAL_CAPACITY: usize = 16;
const BATCH_SIZE: usize = 5_000;
const NUM_BATCHES: usize = 40;

const FONT_FAMILY: &str = "sans-serif";
const TITLE_SIZE: u32 = 35;
const TEXT_SIZE: u32 = 16;
const LINE_WIDTH: u32 = 2;
const MARKER_SIZE: u32 = 3;

fn run_simulation() -> Vec<TableStats> {
    let mut rng = rand::rng();
    let mut table: HashTable<u64, u64> = HashTable::with_capacity(INITIAL_CAPACITY);
    let mut samples = Vec::with_capacity(NUM_BATCHES);

    for batch in 0..NUM_BATCHES {
        for _ in 0..BATCH_SIZE {
            let key: u64 = rng.random();
            table.put(key, key);
        }
        let stats = table.stats();
        info!(
            "batch {batch}: {} keys, {} buckets, load {:.3}, longest chain {}, mean chain {:.3}",
            stats.len,
            stats.capacity,
            stats.load_factor(),
            stats.longest_chain,
            stats.mean_chain_length()
        );
        samples.push(stats);
    }

    samples
}

fn plot_chain_lengths(samples: &[TableStats]) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new("chain_lengths.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_len = samples.iter().map(|s| s.len).max().unwrap_or(1);
    let max_chain = samples.iter().map(|s| s.longest_chain).max().unwrap_or(1) as f64 * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption("Chain Lengths While Growing", (FONT_FAMILY, TITLE_SIZE))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..max_len, 0.0..max_chain)?;

    chart
        .configure_mesh()
        .x_desc("Number of Keys Inserted")
        .y_desc("Chain Length (entries)")
        .axis_desc_style((FONT_FAMILY, TEXT_SIZE))
        .draw()?;

    let series: [(&str, RGBColor, fn(&TableStats) -> f64); 2] = [
        ("Longest chain", RGBColor(220, 50, 50), |s: &TableStats| s.longest_chain as f64),
        ("Mean occupied chain", RGBColor(50, 90, 220), TableStats::mean_chain_length),
    ];

    for (label, color, metric) in series {
        let style = ShapeStyle::from(&color).stroke_width(LINE_WIDTH);
        chart
            .draw_series(LineSeries::new(samples.iter().map(|s| (s.len, metric(s))), style))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
        chart.draw_series(
            samples.iter().map(|s| Circle::new((s.len, metric(s)), MARKER_SIZE, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}

fn plot_load_factor(samples: &[TableStats]) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new("load_factor.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_len = samples.iter().map(|s| s.len).max().unwrap_or(1);

    let mut chart = ChartBuilder::on(&root)
        .caption("Load Factor After Each Batch", (FONT_FAMILY, TITLE_SIZE))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..max_len, 0.0..1.0)?;

    chart
        .configure_mesh()
        .x_desc("Number of Keys Inserted")
        .y_desc("Load Factor")
        .axis_desc_style((FONT_FAMILY, TEXT_SIZE))
        .draw()?;

    let threshold_style = ShapeStyle::from(&BLACK.mix(0.3)).stroke_width(1);
    chart
        .draw_series(LineSeries::new(
            vec![(0, GROWTH_THRESHOLD), (max_len, GROWTH_THRESHOLD)],
            threshold_style,
        ))?
        .label("Growth threshold")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], threshold_style));

    let color = RGBColor(50, 180, 50);
    let style = ShapeStyle::from(&color).stroke_width(LINE_WIDTH);
    chart
        .draw_series(LineSeries::new(samples.iter().map(|s| (s.len, s.load_factor())), style))?
        .label("Load factor")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::LowerRight)
        .draw()?;

    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    TermLogger::init(LevelFilter::Info, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)?;

    let samples = run_simulation();

    println!("{:>10} {:>10} {:>8} {:>8} {:>8}", "keys", "buckets", "load", "longest", "mean");
    for s in &samples {
        println!(
            "{:>10} {:>10} {:>8.3} {:>8} {:>8.3}",
            s.len,
            s.capacity,
            s.load_factor(),
            s.longest_chain,
            s.mean_chain_length()
        );
    }

    plot_chain_lengths(&samples)?;
    plot_load_factor(&samples)?;

    println!("Generated plot images: chain_lengths.png, load_factor.png");

    Ok(())
}
