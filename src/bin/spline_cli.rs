//! Prints a text snapshot of a built-in spline scenario to stdout.
//!
//! ```text
//! spline_cli list
//! spline_cli <scenario> [--steps <n>] [--length-steps <n>]
//! ```

use bezier_spline_engine::geom::{BBox, Point3, Transform, Vec3};
use bezier_spline_engine::spline::{
    LengthOptions, SamplingOptions, Spline, SplineEvaluator, SplineSpace, Vertex,
};
use std::fmt::Write as _;

const SCENARIOS: [&str; 4] = [
    "straight_line",
    "s_curve_2d",
    "loop_3d_auto_normal",
    "helix_up_interpolated",
];

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(text) => print!("{text}"),
        Err(err) => {
            eprintln!("spline_cli: {err}");
            std::process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<String, String> {
    let Some((name, flags)) = args.split_first() else {
        return Ok(SCENARIOS.join("\n") + "\n");
    };
    if name == "list" {
        return Ok(SCENARIOS.join("\n") + "\n");
    }

    let mut sampling = SamplingOptions::default();
    let mut length = LengthOptions::default();
    let mut flags = flags.iter();
    while let Some(flag) = flags.next() {
        let value = flags
            .next()
            .ok_or_else(|| format!("{flag} needs a value"))?
            .parse::<usize>()
            .map_err(|e| format!("{flag}: {e}"))?;
        match flag.as_str() {
            "--steps" => sampling.steps_per_curve = value,
            "--length-steps" => length.steps_per_curve = value,
            other => return Err(format!("unknown option `{other}`")),
        }
    }

    let (spline, placement) =
        scenario(name).ok_or_else(|| format!("unknown scenario `{name}`, try `list`"))?;
    let eval = spline.evaluator_in(placement).map_err(|e| e.to_string())?;
    log::info!("{name}: {} segments", eval.curve_count());
    Ok(snapshot(&eval, sampling, length))
}

fn scenario(name: &str) -> Option<(Spline, Transform)> {
    let built = match name {
        "straight_line" => (
            Spline::new(vec![
                Vertex::from_position(Point3::new(0.0, 0.0, 0.0)),
                Vertex::from_position(Point3::new(10.0, 0.0, 0.0)),
            ]),
            Transform::identity(),
        ),
        "s_curve_2d" => (
            Spline::new(vec![
                Vertex::smooth(Point3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 2.0, 0.0)),
                Vertex::smooth(Point3::new(3.0, 0.0, 0.0), Vec3::new(1.0, -2.0, 0.0)),
                Vertex::smooth(Point3::new(6.0, 0.0, 0.0), Vec3::new(1.0, 2.0, 0.0)),
            ])
            .with_2d(true),
            Transform::identity(),
        ),
        "loop_3d_auto_normal" => (
            Spline::new(vec![
                Vertex::smooth(Point3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 1.1, 0.5)),
                Vertex::smooth(Point3::new(0.0, 2.0, 1.0), Vec3::new(-1.1, 0.0, 0.0)),
                Vertex::smooth(Point3::new(-2.0, 0.0, 0.0), Vec3::new(0.0, -1.1, -0.5)),
                Vertex::smooth(Point3::new(0.0, -2.0, -1.0), Vec3::new(1.1, 0.0, 0.0)),
            ])
            .with_loop(true)
            .with_auto_normal_3d(true),
            Transform::translate(Vec3::new(0.0, 0.0, 5.0)),
        ),
        "helix_up_interpolated" => {
            let vertices = (0..5)
                .map(|i| {
                    let (s, c) = (f64::from(i) * std::f64::consts::FRAC_PI_2).sin_cos();
                    let mut vertex = Vertex::smooth(
                        Point3::new(c, s, f64::from(i) * 0.5),
                        Vec3::new(-s * 0.55, c * 0.55, 0.17),
                    );
                    vertex.set_up(Vec3::new(-c, -s, 0.0));
                    vertex
                })
                .collect();
            (Spline::new(vertices), Transform::rotate_z(0.25))
        }
        _ => return None,
    };
    Some(built)
}

/// Six decimals, with negative zero folded to zero so snapshots diff cleanly.
fn num(value: f64) -> String {
    let rounded = (value * 1e6).round() / 1e6 + 0.0;
    format!("{rounded:.6}")
}

fn triple(out: &mut String, key: &str, [x, y, z]: [f64; 3]) {
    let _ = writeln!(out, "{key} {} {} {}", num(x), num(y), num(z));
}

fn boxed(out: &mut String, key: &str, bbox: BBox) {
    triple(out, &format!("{key}_min"), bbox.min.to_array());
    triple(out, &format!("{key}_max"), bbox.max.to_array());
}

fn snapshot<S: SplineSpace>(
    eval: &SplineEvaluator<'_, S>,
    sampling: SamplingOptions,
    length: LengthOptions,
) -> String {
    let spline = eval.spline();
    let mut out = String::new();
    let _ = writeln!(out, "vertices {}", spline.len());
    let _ = writeln!(out, "segments {}", eval.curve_count());
    let _ = writeln!(out, "loop {}", spline.is_loop());
    let _ = writeln!(out, "normal_mode {:?}", spline.normal_mode());
    let _ = writeln!(out, "length {}", num(eval.approximate_length(length)));
    boxed(&mut out, "bbox", eval.bounding_box());
    for (i, bbox) in eval.bounding_boxes().enumerate() {
        boxed(&mut out, &format!("segment_{i}"), bbox);
    }

    let params = eval.resolver().sample_parameters(sampling.steps_per_curve);
    for (t, frame) in params.zip(eval.oriented_points(sampling)) {
        let _ = writeln!(out, "t {} k {}", num(t), num(eval.curvature(t)));
        triple(&mut out, "p", frame.position.to_array());
        triple(&mut out, "d", frame.forward().to_array());
        triple(&mut out, "n", frame.up().to_array());
    }
    out
}
