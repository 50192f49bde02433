mod buffer;
mod camera;
mod canvas;
mod color;
mod material;
mod mesh;
mod shader;
mod texture;

pub mod app;
pub mod input;
pub mod scene;
pub mod timing;

pub use buffer::{Blendable, Buffer};
pub use camera::{Camera, FreeCamera, Movement};
pub use canvas::{Canvas, DrawContext, PolygonMode};
pub use color::Color;
pub use material::Material;
pub use mesh::{Cube, Mesh, Quad, Triangle};
pub use shader::{FragmentShader, Program, Varyings, Vertex, VertexShader};
pub use texture::{Filter, Sampler, Texture, Wrap};
