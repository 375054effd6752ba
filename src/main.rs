// Copyright 2020 TwoCookingMice

use skyradiance::core::scene::Scene;
use skyradiance::core::settings::RenderSettings;
use skyradiance::core::settings_loader::load_settings;
use skyradiance::io::{exr_utils, png_utils};
use skyradiance::media::aerosol::AerosolType;
use skyradiance::renderers::renderer::Renderer;
use skyradiance::renderers::tiled::TiledRenderer;

use console::style;
use env_logger::Env;
use log::{error, info};
use std::env;

fn print_usage(program: &str) {
    println!("{} {} [OPTIONS] [FILENAME]", style("Usage:").bold(), program);
    println!();
    println!("  -w,  --width N              image width (256)");
    println!("  -h,  --height N             image height (256)");
    println!("  -tw, --tile-width N         tile width (32)");
    println!("  -th, --tile-height N        tile height (32)");
    println!("  -l,  --wavelength NM        sampled wavelength in nm (550)");
    println!("  -i,  --integrator KIND      0/path or 1/transmittance");
    println!("  -s,  --samples N            samples per pixel (512)");
    println!("  -c,  --camera KIND          0/equirectangular or 1/fisheye");
    println!("       --atmospheric-model M  0/composite");
    println!("       --aerosol-type NAME    aerosol type or none (urban)");
    println!("       --list-aerosol-types   print the aerosol types");
    println!("       --turbidity T          aerosol turbidity (1)");
    println!("       --month M              month index 0-11 (0)");
    println!("  -o,  --max-order N          maximum scattering order (10000)");
    println!("       --only-ms              skip single scattering");
    println!("       --albedo A             ground albedo (0.3)");
    println!("       --elevation DEG        sun elevation (0)");
    println!("       --azimuth DEG          sun azimuth (0)");
    println!("  -a,  --eye-altitude M       observer altitude in meters (0)");
    println!("       --threads N            worker threads");
    println!("       --sun-disk             finite sun disk instead of a direction");
    println!("       --upper-hemisphere     equirectangular: upper hemisphere only");
    println!("       --horizon-detail       equirectangular: stretch the horizon");
    println!("       --exposure K           png preview exposure (10)");
    println!("       --config FILE          xml settings, overridden by options");
    println!("       --help                 print this message");
}

fn print_aerosol_types() {
    println!("{}", style("Aerosol types:").bold());
    println!("  none");
    for kind in AerosolType::ALL.iter() {
        println!("  {}", kind.name());
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let mut settings = RenderSettings::default();

    let mut options: Vec<String> = Vec::new();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" => {
                print_usage(&args[0]);
                return;
            }
            "--list-aerosol-types" => {
                print_aerosol_types();
                return;
            }
            "--config" => {
                i += 1;
                let Some(path) = args.get(i) else {
                    eprintln!("Missing value for --config.");
                    std::process::exit(1);
                };
                if let Err(e) = load_settings(path, &mut settings) {
                    error!("Failed to load settings from {}: {}", path, e);
                    std::process::exit(1);
                }
            }
            _ => options.push(args[i].clone()),
        }
        i += 1;
    }

    match settings.apply_args(&options) {
        Ok(positional) => {
            if positional.len() > 1 {
                eprintln!("Expected at most one output filename, got {:?}.", positional);
                std::process::exit(1);
            }
            if let Some(output) = positional.into_iter().next() {
                settings.output = output;
            }
        }
        Err(e) => {
            eprintln!("{}", e);
            print_usage(&args[0]);
            std::process::exit(1);
        }
    }

    if let Err(e) = settings.validate() {
        error!("{}", e);
        std::process::exit(1);
    }

    let scene = Scene::from_settings(&settings);
    let renderer = TiledRenderer::new(settings.tile_width, settings.tile_height,
                                      settings.samples, settings.wavelength, settings.threads);
    let image = renderer.render(&scene);

    let result = if settings.output.to_lowercase().ends_with(".png") {
        png_utils::write_png_preview(&image, settings.exposure as f32, &settings.output)
            .map_err(|e| e.to_string())
    } else {
        exr_utils::write_mono_exr(&image, &settings.output).map_err(|e| e.to_string())
    };
    match result {
        Ok(()) => info!("Done."),
        Err(e) => {
            error!("Failed to write {}: {}", settings.output, e);
            std::process::exit(2);
        }
    }
}
