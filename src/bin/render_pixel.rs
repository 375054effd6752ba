use skyradiance::core::sampler::Sampler;
use skyradiance::core::scene::Scene;
use skyradiance::core::settings::RenderSettings;
use skyradiance::renderers::tiled::TiledRenderer;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <x> <y> [--spp N] [--seed N] [render options]", args[0]);
        std::process::exit(1);
    }

    let x: usize = args[1].parse().unwrap_or(0);
    let y: usize = args[2].parse().unwrap_or(0);

    let mut spp: Option<u32> = None;
    let mut seed: u64 = 0;
    let mut options: Vec<String> = Vec::new();

    let mut i = 3;
    while i < args.len() {
        match args[i].as_str() {
            "--spp" => {
                i += 1;
                spp = args.get(i).and_then(|v| v.parse::<u32>().ok());
            }
            "--seed" => {
                i += 1;
                seed = args.get(i).and_then(|v| v.parse::<u64>().ok()).unwrap_or(seed);
            }
            _ => options.push(args[i].clone()),
        }
        i += 1;
    }

    let mut settings = RenderSettings::default();
    if let Err(e) = settings.apply_args(&options) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
    if let Some(spp) = spp {
        settings.samples = spp;
    }
    if let Err(e) = settings.validate() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
    if x >= settings.width || y >= settings.height {
        eprintln!("Pixel out of bounds: ({}, {}) for size {}x{}", x, y, settings.width, settings.height);
        std::process::exit(2);
    }

    let scene = Scene::from_settings(&settings);
    let renderer = TiledRenderer::new(settings.tile_width, settings.tile_height,
                                      settings.samples, settings.wavelength, 1);
    let pixel_index = (y * settings.width + x) as u64;
    let mut sampler = Sampler::new(seed, pixel_index);
    let value = renderer.render_pixel(&scene, &mut sampler, x, y);

    println!("pixel ({}, {}) spp={} wavelength={} -> {:.6e}",
             x, y, settings.samples, settings.wavelength, value);
}
