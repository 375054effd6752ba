use skyradiance::io::exr_utils::read_mono_exr;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <image.exr>", args[0]);
        std::process::exit(1);
    }

    let img = read_mono_exr(&args[1]).unwrap_or_else(|e| {
        eprintln!("failed to read {}: {}", args[1], e);
        std::process::exit(1);
    });

    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    let mut sum = 0.0f64;
    let mut non_finite = 0usize;
    for &v in img.data() {
        if !v.is_finite() {
            non_finite += 1;
            continue;
        }
        if v < min { min = v; }
        if v > max { max = v; }
        sum += v as f64;
    }

    let n = (img.data().len() - non_finite).max(1) as f64;
    println!("Size: {}x{} ({} pixels)", img.width(), img.height(), img.data().len());
    println!("Min: {:.6e}", min);
    println!("Max: {:.6e}", max);
    println!("Mean: {:.6e}", sum / n);
    if non_finite > 0 {
        println!("Non-finite: {}", non_finite);
    }
}
