use std::error::Error;
use std::hint::black_box;
use std::time::{Duration, Instant};

use clap::Parser;
use ioumat_core::geometry::bbox::Box2d;
use ioumat_core::geometry::iou::{ious, ious_naive};
use rand::Rng;
use tracing::info;

#[derive(Parser)]
#[command(name = "iou_bench")]
#[command(about = "Benchmark the naive vs vectorized pairwise IoU strategies")]
struct Args {
    #[arg(help = "Number of boxes in the first list")]
    list1_len: usize,

    #[arg(help = "Number of boxes in the second list")]
    list2_len: usize,

    #[arg(
        short,
        long,
        default_value = "10",
        help = "Repetitions per strategy"
    )]
    times: usize,
}

/// A random well-formed box inside the unit square.
fn random_box(rng: &mut impl Rng) -> Box2d {
    let xmin = rng.gen_range(0.0..1.0);
    let ymin = rng.gen_range(0.0..1.0);
    let xmax = rng.gen_range(xmin..=1.0);
    let ymax = rng.gen_range(ymin..=1.0);
    Box2d::from_coords(xmin, ymin, xmax, ymax)
}

fn time_runs<F: FnMut()>(times: usize, mut run: F) -> Duration {
    let start = Instant::now();
    for _ in 0..times {
        run();
    }
    start.elapsed()
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    info!(
        "Generating {} x {} random boxes in the unit square",
        args.list1_len, args.list2_len
    );

    let mut rng = rand::thread_rng();
    let list1: Vec<Box2d> = (0..args.list1_len).map(|_| random_box(&mut rng)).collect();
    let list2: Vec<Box2d> = (0..args.list2_len).map(|_| random_box(&mut rng)).collect();

    // Refuse to benchmark two strategies that disagree on this input
    let reference = ious_naive(&list1, &list2);
    let batch = ious(&list1, &list2);
    let max_diff = reference
        .iter()
        .zip(batch.iter())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0_f64, f64::max);
    if max_diff > 1e-9 {
        return Err(format!("strategies disagree, max abs diff {max_diff:e}").into());
    }
    info!("Strategies agree (max abs diff {:e})", max_diff);

    let naive = time_runs(args.times, || {
        black_box(ious_naive(black_box(&list1), black_box(&list2)));
    });
    let vectorized = time_runs(args.times, || {
        black_box(ious(black_box(&list1), black_box(&list2)));
    });

    info!(
        "naive method cost {:.6} seconds over {} runs",
        naive.as_secs_f64(),
        args.times
    );
    info!(
        "vectorized method cost {:.6} seconds over {} runs",
        vectorized.as_secs_f64(),
        args.times
    );
    info!(
        "naive/vectorized ratio: {:.2}",
        naive.as_secs_f64() / vectorized.as_secs_f64()
    );

    Ok(())
}
