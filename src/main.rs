use std::{error::Error, path::PathBuf, sync::Arc};

use clap::{Parser, Subcommand};
use nalgebra::Vector3;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ray_intersect::{Hit, HitList, Material, MaterialTable, Ray, Record, Scene, Sphere};

/// Query ray intersections against a scene.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON scene description. A small built-in scene is used when omitted.
    #[arg(long, global = true)]
    scene: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Cast a single ray and print the closest hit.
    Cast {
        #[arg(long, value_parser = parse_vector, allow_hyphen_values = true)]
        origin: Vector3<f64>,
        #[arg(long, value_parser = parse_vector, allow_hyphen_values = true)]
        direction: Vector3<f64>,
        #[arg(long, default_value_t = 0.001)]
        t_min: f64,
        #[arg(long, default_value_t = f64::INFINITY)]
        t_max: f64,
        #[arg(long, default_value_t = 0.0)]
        time: f64,
    },
    /// Cast random rays from one origin in parallel and summarize the hits.
    Sweep {
        #[arg(long, value_parser = parse_vector, allow_hyphen_values = true)]
        origin: Vector3<f64>,
        #[arg(long, default_value_t = 10_000)]
        rays: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 0.001)]
        t_min: f64,
    },
    /// Print the scene's bounding box.
    Bounds {
        #[arg(long, default_value_t = 0.0)]
        time0: f64,
        #[arg(long, default_value_t = 1.0)]
        time1: f64,
    },
}

fn parse_vector(s: &str) -> Result<Vector3<f64>, String> {
    let components = s
        .split(',')
        .map(|c| c.trim().parse::<f64>().map_err(|e| format!("{c:?}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    match components.as_slice() {
        [x, y, z] => Ok(Vector3::new(*x, *y, *z)),
        _ => Err(format!("expected x,y,z but got {} components", components.len())),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let scene = match &args.scene {
        Some(path) => Scene::load(path)?,
        None => builtin_scene(),
    };
    info!(
        materials = scene.materials.len(),
        primitives = scene.world.len(),
        "scene ready"
    );

    match args.command {
        Command::Cast {
            origin,
            direction,
            t_min,
            t_max,
            time,
        } => {
            let ray = Ray::with_time(origin, direction, time);
            match scene.world.hit(ray, t_min, t_max) {
                Some(record) => print_record(&scene, &record),
                None => println!("miss"),
            }
        }
        Command::Sweep {
            origin,
            rays,
            seed,
            t_min,
        } => sweep(&scene, origin, rays, seed, t_min),
        Command::Bounds { time0, time1 } => match scene.world.bounding_box(time0, time1) {
            Some(aabb) => {
                println!("minimum      {:?}", aabb.minimum.as_slice());
                println!("maximum      {:?}", aabb.maximum.as_slice());
                println!("surface area {}", aabb.surface_area());
                println!("longest axis {}", aabb.longest_axis());
            }
            None => println!("unbounded"),
        },
    }
    Ok(())
}

fn sweep(scene: &Scene, origin: Vector3<f64>, rays: usize, seed: Option<u64>, t_min: f64) {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let rays: Vec<Ray> = std::iter::repeat_with(|| Ray::new(origin, random_direction(&mut rng)))
        .take(rays)
        .collect();

    let hits: Vec<Record> = rays
        .par_iter()
        .filter_map(|ray| scene.world.hit(*ray, t_min, f64::INFINITY))
        .collect();

    if hits.is_empty() {
        warn!(rays = rays.len(), "sweep hit nothing");
    }
    println!("rays  {}", rays.len());
    println!("hits  {}", hits.len());
    if let Some(nearest) = hits.iter().min_by(|a, b| a.t.total_cmp(&b.t)) {
        print_record(scene, nearest);
    }
}

fn random_direction(rng: &mut impl Rng) -> Vector3<f64> {
    loop {
        let v: Vector3<f64> = Vector3::new(
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
        );
        let norm_squared = v.norm_squared();
        if norm_squared > 1e-12 && norm_squared <= 1.0 {
            return v / norm_squared.sqrt();
        }
    }
}

fn print_record(scene: &Scene, record: &Record) {
    println!("t          {}", record.t);
    println!("point      {:?}", record.point.as_slice());
    println!("normal     {:?}", record.normal.as_slice());
    println!("front face {}", record.front_face);
    match scene.materials.get(record.material) {
        Some(material) => println!("material   {material:?}"),
        None => println!("material   <missing {}>", record.material.index()),
    }
}

fn builtin_scene() -> Scene {
    let mut materials = MaterialTable::new();
    let ground = materials.insert(Material::Diffuse {
        albedo: Vector3::new(0.0, 1.0, 0.0),
    });
    let glass = materials.insert(Material::Glass {
        refractive_index: 1.5,
    });
    let red = materials.insert(Material::Diffuse {
        albedo: Vector3::new(1.0, 0.0, 0.0),
    });
    let metal = materials.insert(Material::Metal {
        albedo: Vector3::repeat(0.8),
        fuzz: 0.0,
    });

    let world: HitList = [
        Sphere::new(Vector3::new(0.0, -100.5, -1.0), 100.0, ground),
        Sphere::new(Vector3::new(0.0, 0.0, -1.0), 0.5, glass),
        Sphere::new(Vector3::new(-1.0, 0.0, -1.0), 0.4, red),
        Sphere::new(Vector3::new(1.0, 0.0, -1.0), 0.2, metal),
    ]
    .into_iter()
    .map(|sphere| Arc::new(sphere) as Arc<dyn Hit>)
    .collect();

    Scene { materials, world }
}
