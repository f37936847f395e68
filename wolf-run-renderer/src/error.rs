use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load asset {}", path.display())]
    Asset {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to create window surface")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no graphics adapter can present to the window")]
    NoAdapter,
    #[error("failed to open graphics device")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
}
