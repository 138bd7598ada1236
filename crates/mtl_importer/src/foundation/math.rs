//! Math utilities and types
//!
//! MTL colors are RGB triples, carried as nalgebra vectors so they serialize
//! and compare the same way everywhere.

pub use nalgebra::Vector3;

/// 3D vector type, used for RGB colors
pub type Vec3 = Vector3<f32>;

/// Black, the starting color of every freshly declared material
pub fn black() -> Vec3 {
    Vec3::zeros()
}
