use std::path::Path;

use glam::Vec2;
use image::{imageops::FilterType, RgbaImage};

use wolf_run_game::{
    actor::{ACTOR_FRAME_COUNT, ACTOR_SIZE},
    obstacle::OBSTACLE_SIZE,
};

use crate::error::Error;

pub const ASSET_ROOT: &str = "assets";

/// Sprite images, already scaled to the size they are drawn at.
pub struct Assets {
    pub actor_frames: Vec<RgbaImage>,
    pub obstacle: RgbaImage,
}

impl Assets {
    pub fn load(root: impl AsRef<Path>) -> Result<Self, Error> {
        let root = root.as_ref();

        let actor_frames = (1..=ACTOR_FRAME_COUNT)
            .map(|i| {
                let path = root.join("wolf").join(format!("wolf_run_{i}.png"));
                load_scaled(&path, ACTOR_SIZE)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let obstacle = load_scaled(&root.join("rock.png"), OBSTACLE_SIZE)?;

        log::info!(
            "Loaded {} actor frames and obstacle sprite from {}",
            actor_frames.len(),
            root.display()
        );

        Ok(Self {
            actor_frames,
            obstacle,
        })
    }
}

fn load_scaled(path: &Path, size: Vec2) -> Result<RgbaImage, Error> {
    let image = image::open(path).map_err(|source| Error::Asset {
        path: path.to_owned(),
        source,
    })?;

    Ok(image::imageops::resize(
        &image.to_rgba8(),
        size.x as u32,
        size.y as u32,
        FilterType::Triangle,
    ))
}
